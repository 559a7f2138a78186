//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CRADLE_CATALOG_PATH` - Catalog file to load (YAML, or JSON by `.json` extension).
//!   The bundled baby-care catalog is used when unset.
//! - `CRADLE_CURRENCY` - Currency for catalogs that do not declare one (default: USD)
//! - `CRADLE_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Log filter (default: `cradle_cli=info,cradle_shop=info`)

use std::path::PathBuf;

use cradle_core::CurrencyCode;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Catalog file; `None` selects the bundled catalog
    pub catalog_path: Option<PathBuf>,
    /// Currency for catalog documents without a `currency` key
    pub currency: CurrencyCode,
    /// Log output format
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = lookup("CRADLE_CATALOG_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let currency = match lookup("CRADLE_CURRENCY") {
            Some(value) => value
                .parse::<CurrencyCode>()
                .map_err(|e| ConfigError::InvalidEnvVar("CRADLE_CURRENCY".to_string(), e))?,
            None => CurrencyCode::default(),
        };

        let log_format = match lookup("CRADLE_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("" | "pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "CRADLE_LOG_FORMAT".to_string(),
                    format!("expected 'pretty' or 'json', got '{other}'"),
                ));
            }
        };

        Ok(Self {
            catalog_path,
            currency,
            log_format,
        })
    }

    /// Prefer a path given on the command line over the environment.
    #[must_use]
    pub fn with_catalog_override(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.catalog_path = path;
        }
        self
    }
}
