//! Configuration for the catalog chat application

pub mod engine;
pub mod settings;

pub use engine::EngineConfig;
pub use settings::{CatalogConfig, ObservabilityConfig, ServerConfig, Settings};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
