//! Configuration management for the Cafe Stock Ledger
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with CAFE_STOCK_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{Catalog, CatalogError, CategoryItems};

use crate::store::DuplicatePolicy;

/// Local database used when no URL is configured
pub const DEFAULT_DATABASE_URL: &str = "postgres://postgres@localhost:5432/cafe_stock";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Which stock store backend to run
    pub storage: StorageConfig,

    /// Write path behavior
    pub ledger: LedgerConfig,

    /// Catalog override; the built-in master data is used when absent
    #[serde(default)]
    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Seconds to wait for a pooled connection
    pub acquire_timeout_secs: u64,

    /// Create the stock tables at startup
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LedgerConfig {
    /// Behavior when a reading's natural key already exists
    pub duplicate_policy: DuplicatePolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub categories: Vec<CategoryItems>,
    pub outlets: Vec<String>,
}

impl CatalogConfig {
    pub fn build(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.categories.clone(), self.outlets.clone())
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("CAFE_STOCK_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let builder = Self::defaults(config::Config::builder(), &environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CAFE_STOCK_ prefix)
            .add_source(
                Environment::with_prefix("CAFE_STOCK")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    fn defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("environment", environment)?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.url", DEFAULT_DATABASE_URL)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout_secs", 30)?
            .set_default("database.run_migrations", true)?
            .set_default("storage.backend", "postgres")?
            .set_default("ledger.duplicate_policy", "append")
    }

    /// The catalog this process runs with
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(catalog) => catalog.build(),
            None => Ok(Catalog::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Config {
        Config::defaults(config::Config::builder(), "test")
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("");
        assert_eq!(config.environment, "test");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(config.database.max_connections, 10);
        assert!(config.database.run_migrations);
        assert_eq!(config.storage.backend, StorageBackend::Postgres);
        assert_eq!(config.ledger.duplicate_policy, DuplicatePolicy::Append);
        assert_eq!(config.catalog().unwrap(), Catalog::default());
    }

    #[test]
    fn test_overrides() {
        let config = from_toml(
            r#"
            [storage]
            backend = "memory"

            [ledger]
            duplicate_policy = "reject"
            "#,
        );
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.ledger.duplicate_policy, DuplicatePolicy::Reject);
    }

    #[test]
    fn test_catalog_override() {
        let config = from_toml(
            r#"
            [catalog]
            outlets = ["Colaba Cafe"]

            [[catalog.categories]]
            name = "Beverages"
            items = ["Cappuccino", "Latte", "Espresso"]
            "#,
        );
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.categories(), vec!["Beverages"]);
        assert_eq!(catalog.outlets(), ["Colaba Cafe"]);
        assert!(catalog.contains_item("Beverages", "Latte"));
    }

    #[test]
    fn test_invalid_catalog_override() {
        let config = from_toml(
            r#"
            [catalog]
            outlets = ["Colaba Cafe", "Colaba Cafe"]
            categories = []
            "#,
        );
        assert_eq!(
            config.catalog(),
            Err(CatalogError::DuplicateOutlet("Colaba Cafe".to_string()))
        );
    }
}
