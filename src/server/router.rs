//! Router builder for catalog routes

use super::handlers::{
    AppState, create_product, delete_product, get_product, health_check, list_all_products,
    list_brands, list_products, test_filters, update_product,
};
use axum::{Router, routing::get};

/// Build the catalog routes
///
/// - GET /health, /healthz - Health check
/// - GET /api/products - Filtered, sorted, paginated listing
/// - GET /api/products/all - Every product, unpaged
/// - GET /api/products/brands - Distinct brands
/// - GET /api/products/test-filters - Tag matching diagnostic
/// - POST /api/products - Create a product
/// - GET/PUT/DELETE /api/products/{id} - Single product
pub fn build_catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/all", get(list_all_products))
        .route("/api/products/brands", get(list_brands))
        .route("/api/products/test-filters", get(test_filters))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(state)
}
