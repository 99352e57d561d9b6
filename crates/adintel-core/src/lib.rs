use thiserror::Error;

pub mod app_config;
pub mod catalog;
pub mod config;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, BrandEntry, Catalog, CompetitorEntry};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogParse(#[from] serde_yaml::Error),

    #[error("invalid catalog: {0}")]
    Validation(String),
}
