//! HTTP exposure of the catalog
//!
//! This module provides a `ServerBuilder` that wires a catalog store into an
//! axum router with CORS and request tracing layers.

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
pub use router::build_catalog_routes;
