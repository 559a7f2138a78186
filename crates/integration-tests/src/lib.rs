//! Integration tests for the Cradle shop engine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cradle-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shop_session` - End-to-end cart, filter and favorites scenarios
//! - `shop_properties` - Property tests over random event sequences
//!
//! Shared fixtures live here so both suites build catalogs the same way.

#![cfg_attr(not(test), forbid(unsafe_code))]

use cradle_core::{Category, CurrencyCode, Product, ProductId};
use cradle_shop::{Catalog, CatalogError};
use rust_decimal::Decimal;

/// The catalog shipped with `cradle-cli`.
pub const BUNDLED_CATALOG: &str = include_str!("../../cli/data/catalog.yaml");

/// Parse the bundled catalog.
///
/// # Errors
///
/// Returns `CatalogError` if the bundled document no longer validates.
pub fn bundled_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_yaml_str(BUNDLED_CATALOG, CurrencyCode::USD)
}

/// A catalog whose even-numbered products are out of stock.
///
/// Ids are `p0`, `p1`, ... and prices are `id + 1` dollars.
///
/// # Errors
///
/// Returns `CatalogError` only if `count` produces an invalid id, which
/// cannot happen for ids of this shape.
pub fn numbered_catalog(count: u32) -> Result<Catalog, CatalogError> {
    let products = (0..count)
        .zip(Category::ALL.into_iter().cycle())
        .filter_map(|(n, category)| {
            let id = ProductId::parse(&format!("p{n}")).ok()?;
            Some(
                Product::new(
                    id,
                    format!("Product {n}"),
                    format!("Numbered product {n}"),
                    category,
                    Decimal::from(n + 1),
                )
                .with_stock(n % 2 == 1),
            )
        })
        .collect();
    Catalog::from_products(products, CurrencyCode::USD)
}
