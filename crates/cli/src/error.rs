//! CLI error type.

use std::path::PathBuf;

use cradle_shop::{CatalogError, ShopError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `cradle-cli` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog document is malformed or inconsistent.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A shop operation or event script was rejected.
    #[error("{0}")]
    Shop(#[from] ShopError),

    /// No product has the requested id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The catalog file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;
