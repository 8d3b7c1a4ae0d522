//! # Catalog Query
//!
//! A query engine and REST service for a skincare product catalog.
//!
//! ## Features
//!
//! - **Tag Classification**: Rule-based "alcohol-free", "fragrance-free",
//!   "oil-free" and "sensitive skin friendly" detection from ingredient lists
//! - **Filtering**: Brand, category, free-text search and tag filters combined with AND
//! - **Sorting**: Stable sort by name, price, brand or creation order
//! - **Pagination**: Page arithmetic that never fails, even past the last page
//! - **REST API**: axum routes over a pluggable catalog store
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog::prelude::*;
//!
//! let records = vec![
//!     Product::new("Hydrating Serum", "CeraVe", "Water, Glycerin", "Serum", Some(18)),
//!     Product::new("Argan Glow Serum", "Nivea", "Water, Glycerin", "Serum", Some(12)),
//! ];
//!
//! let params = QueryParams {
//!     tags: Some("oil-free".to_string()),
//!     sort_by: Some("price-desc".to_string()),
//!     ..Default::default()
//! };
//!
//! let result = query(&records, &params);
//! assert_eq!(result.total, 1);
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        CatalogError, CatalogStore, ErrorResponse, Product, QueryParams, QueryResult,
    };

    // === Engine ===
    pub use crate::engine::{
        FilterCriteria, PageBounds, SortKey, filter_products, matches_tags, paginate, query,
        sort_products, unique_brands,
    };

    // === Storage ===
    pub use crate::storage::InMemoryCatalogStore;

    // === Config ===
    pub use crate::config::CatalogConfig;

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder, build_catalog_routes};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
