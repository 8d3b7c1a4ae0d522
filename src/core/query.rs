//! Query parameters and paginated results

use crate::core::product::Product;
use crate::engine::filter::FilterCriteria;
use crate::engine::sort::SortKey;
use serde::{Deserialize, Serialize};

/// Default page size, also used when the requested limit is out of range
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest accepted page size
pub const MAX_LIMIT: i64 = 100;

/// Query parameters for filtering, sorting and pagination
///
/// This structure is extracted from URL query strings. Every parameter is
/// optional; `page` and `limit` have defaults and are normalized by their
/// accessors rather than rejected.
///
/// # Example
/// ```text
/// GET /api/products?page=2&limit=20
/// GET /api/products?brand=CeraVe&sortBy=price-desc
/// GET /api/products?productType=Serum&tags=oil-free,fragrance-free
/// GET /api/products?search=niacinamide
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryParams {
    /// Page number (starts at 1)
    pub page: i64,

    /// Number of items per page
    pub limit: i64,

    /// Exact category match, case-insensitive
    pub product_type: Option<String>,

    /// Comma-separated tags; every tag must match
    pub tags: Option<String>,

    /// Exact brand match, case-insensitive
    pub brand: Option<String>,

    /// Substring of name, brand or ingredients
    pub search: Option<String>,

    /// One of `name`, `name-desc`, `price`, `price-desc`, `brand`, `date`
    pub sort_by: Option<String>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            product_type: None,
            tags: None,
            brand: None,
            search: None,
            sort_by: None,
        }
    }
}

impl QueryParams {
    /// Get page number; anything below 1 becomes 1
    pub fn page(&self) -> usize {
        usize::try_from(self.page).ok().filter(|p| *p >= 1).unwrap_or(1)
    }

    /// Get limit; anything outside `1..=100` becomes the default of 10
    pub fn limit(&self) -> usize {
        if (1..=MAX_LIMIT).contains(&self.limit) {
            self.limit as usize
        } else {
            DEFAULT_LIMIT as usize
        }
    }

    /// True if `page` was outside its valid range
    pub fn page_was_normalized(&self) -> bool {
        self.page < 1
    }

    /// True if `limit` was outside its valid range
    pub fn limit_was_normalized(&self) -> bool {
        !(1..=MAX_LIMIT).contains(&self.limit)
    }

    pub fn filter_criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.brand.as_deref(),
            self.search.as_deref(),
            self.product_type.as_deref(),
            self.tags.as_deref(),
        )
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::parse(self.sort_by.as_deref())
    }
}

/// One page of query results with pagination metadata
///
/// Serialized flat, with the page content under `products`:
/// `{ "products": [...], "total": 5, "page": 1, "limit": 10, "totalPages": 1 }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// The records on the requested page
    #[serde(rename = "products")]
    pub items: Vec<Product>,

    /// Number of records matching the filters, before pagination
    pub total: usize,

    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// `ceil(total / limit)`, 0 when nothing matched
    pub total_pages: usize,
}
