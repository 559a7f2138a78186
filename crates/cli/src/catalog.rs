//! Catalog loading for the CLI.

use std::path::Path;

use cradle_shop::Catalog;

use crate::config::CliConfig;
use crate::error::{CliError, Result};

/// Baby-care catalog compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../data/catalog.yaml");

/// Load the configured catalog file, or the bundled one.
///
/// Files ending in `.json` are parsed as JSON, anything else as YAML.
///
/// # Errors
///
/// Returns `CliError::Io` if the file cannot be read and `CliError::Catalog`
/// if it does not parse or validate.
pub fn load(config: &CliConfig) -> Result<Catalog> {
    let catalog = match &config.catalog_path {
        None => Catalog::from_yaml_str(BUNDLED_CATALOG, config.currency)?,
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            if is_json(path) {
                Catalog::from_json_str(&text, config.currency)?
            } else {
                Catalog::from_yaml_str(&text, config.currency)?
            }
        }
    };

    tracing::info!(
        products = catalog.len(),
        source = config
            .catalog_path
            .as_deref()
            .map_or_else(|| "bundled".to_string(), |p| p.display().to_string()),
        "Catalog loaded"
    );

    Ok(catalog)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// The bundled catalog, for tests.
#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub fn bundled() -> Catalog {
    Catalog::from_yaml_str(BUNDLED_CATALOG, cradle_core::CurrencyCode::USD).unwrap()
}
