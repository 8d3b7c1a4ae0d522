//! Typed error handling for the catalog service
//!
//! The query engine itself never fails; errors only come from the boundary:
//! unknown ids, malformed input, and the catalog store.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::prelude::*;
//!
//! async fn fetch(store: &dyn CatalogStore, id: i64) -> Result<Product, CatalogError> {
//!     store.get(id).await?.ok_or(CatalogError::NotFound { id })
//! }
//! ```

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The main error type for the catalog service
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No product with this id
    #[error("Product not found with ID: {id}")]
    NotFound { id: i64 },

    /// Request payload or parameters could not be used
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Catalog store failure
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    /// Should not happen in normal operation
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
            CatalogError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            CatalogError::Storage(_) | CatalogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::NotFound { .. } => "PRODUCT_NOT_FOUND",
            CatalogError::InvalidInput { .. } => "INVALID_INPUT",
            CatalogError::Storage(_) => "STORAGE_ERROR",
            CatalogError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: match self {
                CatalogError::NotFound { id } => Some(serde_json::json!({ "id": id })),
                _ => None,
            },
        }
    }
}

impl From<JsonRejection> for CatalogError {
    fn from(rejection: JsonRejection) -> Self {
        CatalogError::InvalidInput {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, Json(self.to_response())).into_response()
    }
}
