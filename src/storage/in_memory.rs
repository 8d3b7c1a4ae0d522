//! In-memory implementation of CatalogStore

use crate::core::product::Product;
use crate::core::store::CatalogStore;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct Catalog {
    products: BTreeMap<i64, Product>,
    last_id: i64,
}

impl Catalog {
    fn insert_new(&mut self, mut product: Product) -> Result<Product> {
        let id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| anyhow!("Product id space exhausted after {}", self.last_id))?;
        self.last_id = id;
        product.id = Some(id);
        self.products.insert(id, product.clone());
        Ok(product)
    }
}

/// In-memory catalog store
///
/// Useful for testing and development. Uses RwLock for thread-safe access;
/// clones share the same catalog. Ids are assigned from a counter that never
/// goes backwards, so deleted ids are not reused.
#[derive(Clone, Default)]
pub struct InMemoryCatalogStore {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryCatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `products`
    ///
    /// Records that already carry an id keep it; the others are numbered after
    /// the highest id seen. Fails if that numbering runs past `i64::MAX`.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut catalog = Catalog::default();
        let mut pending = Vec::new();

        for product in products {
            match product.id {
                Some(id) => {
                    catalog.last_id = catalog.last_id.max(id);
                    catalog.products.insert(id, product);
                }
                None => pending.push(product),
            }
        }
        for product in pending {
            catalog.insert_new(product)?;
        }

        Ok(Self {
            catalog: Arc::new(RwLock::new(catalog)),
        })
    }

    /// Load a JSON array of products from disk
    pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let products: Vec<Product> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

        tracing::info!(count = products.len(), path = %path.display(), "loaded catalog seed");
        Self::from_products(products)
            .with_context(|| format!("Failed to seed catalog from {}", path.display()))
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.catalog.read().map(|c| c.products.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn list(&self) -> Result<Vec<Product>> {
        let catalog = self
            .catalog
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(catalog.products.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Product>> {
        let catalog = self
            .catalog
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(catalog.products.get(&id).cloned())
    }

    async fn create(&self, product: Product) -> Result<Product> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        catalog.insert_new(product)
    }

    async fn update(&self, id: i64, mut product: Product) -> Result<Product> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let slot = catalog
            .products
            .get_mut(&id)
            .ok_or_else(|| anyhow!("Product not found: {}", id))?;

        product.id = Some(id);
        *slot = product.clone();

        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        catalog
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| anyhow!("Product not found: {}", id))
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let catalog = self
            .catalog
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(catalog.products.contains_key(&id))
    }
}
