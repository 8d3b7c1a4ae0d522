//! HTTP handlers for the product catalog

use crate::core::error::CatalogError;
use crate::core::product::Product;
use crate::core::query::{QueryParams, QueryResult};
use crate::core::store::CatalogStore;
use crate::engine::{self, matches_tags};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::fmt::Write;
use std::sync::Arc;

/// Number of products covered by the tag diagnostic report
const DIAGNOSTIC_SAMPLE: usize = 5;

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(store: impl CatalogStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "catalog-query"
    }))
}

/// GET /api/products: filtered, sorted and paginated listing
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<QueryResult>, CatalogError> {
    if params.page_was_normalized() {
        tracing::warn!(page = params.page, "Invalid page number, setting to 1");
    }
    if params.limit_was_normalized() {
        tracing::warn!(limit = params.limit, "Invalid limit, setting to 10");
    }

    tracing::info!(
        page = params.page(),
        limit = params.limit(),
        product_type = params.product_type.as_deref(),
        tags = params.tags.as_deref(),
        brand = params.brand.as_deref(),
        search = params.search.as_deref(),
        sort_by = params.sort_by.as_deref(),
        "Fetching products"
    );

    let products = state.store.list().await?;
    let result = engine::query(&products, &params);

    tracing::info!(
        returned = result.items.len(),
        page = result.page,
        total_pages = result.total_pages,
        total = result.total,
        "Returning products"
    );

    Ok(Json(result))
}

/// GET /api/products/all: every product, unpaged
pub async fn list_all_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CatalogError> {
    let products = state.store.list().await?;
    tracing::info!(count = products.len(), "Retrieved all products");
    Ok(Json(products))
}

/// GET /api/products/brands: distinct brands for dropdowns
pub async fn list_brands(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, CatalogError> {
    let products = state.store.list().await?;
    let brands = engine::unique_brands(&products);
    tracing::info!(count = brands.len(), "Returning unique brands");
    Ok(Json(brands))
}

/// Parameters of the tag diagnostic endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagDiagnosticsParams {
    pub product_type: Option<String>,
    pub tags: Option<String>,
}

/// GET /api/products/test-filters: plain-text tag match report
pub async fn test_filters(
    State(state): State<AppState>,
    Query(params): Query<TagDiagnosticsParams>,
) -> Result<String, CatalogError> {
    let products = state.store.list().await?;
    let report = render_tag_report(&products, &params)
        .map_err(|e| CatalogError::Internal(format!("Failed to render report: {e}")))?;

    tracing::info!(
        product_type = params.product_type.as_deref(),
        tags = params.tags.as_deref(),
        "Filter test completed"
    );
    Ok(report)
}

fn render_tag_report(
    products: &[Product],
    params: &TagDiagnosticsParams,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Filter Test Results:")?;
    writeln!(out, "==================")?;
    writeln!(
        out,
        "Product Type: {}",
        params.product_type.as_deref().unwrap_or("null")
    )?;
    writeln!(out, "Tags: {}", params.tags.as_deref().unwrap_or("null"))?;
    writeln!(out)?;
    writeln!(out, "Total products in database: {}", products.len())?;
    writeln!(out)?;

    let sample = products.len().min(DIAGNOSTIC_SAMPLE);
    writeln!(out, "Testing tag matching on first {sample} products:")?;
    for (i, product) in products.iter().take(sample).enumerate() {
        let matched = matches_tags(product, params.tags.as_deref());
        let id = product
            .id
            .map_or_else(|| "null".to_string(), |id| id.to_string());
        writeln!(
            out,
            "{}. {} (ID: {}) - Matches: {}",
            i + 1,
            product.name_text(),
            id,
            if matched { "YES" } else { "NO" }
        )?;
    }

    Ok(out)
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, CatalogError> {
    let product = state
        .store
        .get(id)
        .await?
        .ok_or(CatalogError::NotFound { id })?;

    tracing::info!(id, "Retrieved product");
    Ok(Json(product))
}

/// POST /api/products
///
/// A body that is not a product comes back as `INVALID_INPUT` JSON rather
/// than axum's plain-text rejection.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Product>, JsonRejection>,
) -> Result<Json<Product>, CatalogError> {
    let Json(product) = payload?;
    let created = state.store.create(product.title_cased()).await?;
    tracing::info!(id = created.id, "Created new product");
    Ok(Json(created))
}

/// PUT /api/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<Product>, JsonRejection>,
) -> Result<Json<Product>, CatalogError> {
    let Json(product) = payload?;
    if !state.store.exists(id).await? {
        return Err(CatalogError::NotFound { id });
    }

    let updated = state.store.update(id, product.title_cased()).await?;
    tracing::info!(id, "Updated product");
    Ok(Json(updated))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, CatalogError> {
    if !state.store.exists(id).await? {
        return Err(CatalogError::NotFound { id });
    }

    state.store.delete(id).await?;
    tracing::info!(id, "Deleted product");
    Ok(StatusCode::OK)
}
