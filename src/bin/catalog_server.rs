//! Catalog HTTP server
//!
//! Usage: `catalog-server [config.yaml]`
//!
//! The configuration path may also come from `CATALOG_CONFIG`. Without one,
//! the server starts on 127.0.0.1:8080 with an empty catalog. Log verbosity
//! follows `RUST_LOG` (default `info`).

use catalog::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("CATALOG_CONFIG").ok());

    let config = match config_path {
        Some(path) => {
            tracing::info!(path = %path, "loading configuration");
            CatalogConfig::from_yaml_file(&path)?
        }
        None => CatalogConfig::default(),
    };

    ServerBuilder::from_config(&config)?
        .serve(&config.bind_address())
        .await
}
