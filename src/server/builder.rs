//! ServerBuilder for fluent API to build the catalog HTTP server

use super::handlers::AppState;
use super::router::build_catalog_routes;
use crate::config::CatalogConfig;
use crate::core::store::CatalogStore;
use crate::storage::InMemoryCatalogStore;
use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for the catalog server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryCatalogStore::new())
///     .with_cors_origin("http://localhost:3000")
///     .build()?;
/// ```
#[derive(Default)]
pub struct ServerBuilder {
    store: Option<Arc<dyn CatalogStore>>,
    cors_origin: Option<String>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a builder from a loaded configuration
    ///
    /// Seeds an in-memory store from `seed_file` when one is configured,
    /// otherwise starts with an empty catalog.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let store = match &config.seed_file {
            Some(path) => InMemoryCatalogStore::load_seed_file(path)?,
            None => InMemoryCatalogStore::new(),
        };

        Ok(Self::new()
            .with_store(store)
            .with_cors_origin(config.cors.allowed_origin.clone()))
    }

    /// Set the catalog store (required)
    pub fn with_store(mut self, store: impl CatalogStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Allow cross-origin requests from a single origin
    pub fn with_cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origin = Some(origin.into());
        self
    }

    /// Build the final router
    pub fn build(self) -> Result<Router> {
        let store = self
            .store
            .ok_or_else(|| anyhow::anyhow!("CatalogStore is required. Call .with_store()"))?;

        let mut app = build_catalog_routes(AppState { store });

        if let Some(origin) = &self.cors_origin {
            let origin = HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin: {origin}"))?;
            let cors = CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers(Any);
            app = app.layer(cors);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
