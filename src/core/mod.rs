//! Core module containing the catalog data model and its boundary types

pub mod error;
pub mod product;
pub mod query;
pub mod store;
pub mod text;

pub use error::{CatalogError, ErrorResponse};
pub use product::Product;
pub use query::{QueryParams, QueryResult};
pub use store::CatalogStore;
