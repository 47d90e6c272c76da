//! Core error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),
}
