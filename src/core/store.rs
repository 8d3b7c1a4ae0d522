//! Catalog store trait

use crate::core::product::Product;
use anyhow::Result;
use async_trait::async_trait;

/// Source of product records
///
/// The query engine always works on the full collection returned by
/// [`list`](CatalogStore::list); stores are not expected to filter, index or
/// paginate. Implementations must hand out snapshots, never live views.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Every record, ordered by id
    async fn list(&self) -> Result<Vec<Product>>;

    /// Get a record by id
    async fn get(&self, id: i64) -> Result<Option<Product>>;

    /// Store a new record under a freshly assigned id
    ///
    /// Any id already present on `product` is ignored.
    async fn create(&self, product: Product) -> Result<Product>;

    /// Replace an existing record
    ///
    /// Fails if `id` is unknown. The stored record always carries `id`.
    async fn update(&self, id: i64, product: Product) -> Result<Product>;

    /// Delete a record; fails if `id` is unknown
    async fn delete(&self, id: i64) -> Result<()>;

    /// Check whether a record exists
    async fn exists(&self, id: i64) -> Result<bool> {
        Ok(self.get(id).await?.is_some())
    }
}
