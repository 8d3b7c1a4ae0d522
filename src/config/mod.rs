//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Listening address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Cross-origin policy for the browser frontend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CorsConfig {
    /// Single origin allowed to call the API
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}

/// Complete configuration for the catalog service
///
/// Every section is optional in YAML; missing values take their defaults.
///
/// ```yaml
/// server:
///   host: 0.0.0.0
///   port: 8080
/// cors:
///   allowed_origin: http://localhost:3000
/// seed_file: data/products.json
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    pub server: ServerConfig,

    pub cors: CorsConfig,

    /// JSON array of products loaded into the store at startup
    pub seed_file: Option<PathBuf>,
}

impl CatalogConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// `host:port` to bind the server to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.cors.allowed_origin, "http://localhost:3000");
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = CatalogConfig::from_yaml_str("server:\n  port: 9000\n").unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.cors, CorsConfig::default());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = CatalogConfig {
            seed_file: Some(PathBuf::from("data/products.json")),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();

        // Should be able to parse it back
        let parsed = CatalogConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(CatalogConfig::from_yaml_str("server: [not, a, map]").is_err());
    }
}
