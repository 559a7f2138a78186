//! The read-only product catalog.
//!
//! A catalog is built once at startup, validated, and then shared by every
//! session behind an `Arc`. Insertion order is the canonical display order.

use std::collections::HashMap;

use cradle_core::{Category, CurrencyCode, Price, Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Serialized form of a catalog file (YAML or JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Currency for every price in the document. Falls back to the loader's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyCode>,
    pub products: Vec<Product>,
}

/// Immutable, ordered, id-indexed product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
    currency: CurrencyCode,
}

impl Catalog {
    /// Build a catalog from product records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if two records share an id, or if a record's
    /// prices or rating are out of range.
    pub fn from_products(
        products: Vec<Product>,
        currency: CurrencyCode,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            validate_product(product)?;
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        tracing::debug!(products = products.len(), %currency, "Catalog built");

        Ok(Self {
            products,
            index,
            currency,
        })
    }

    /// Build a catalog from a parsed document.
    ///
    /// # Errors
    ///
    /// See [`Catalog::from_products`].
    pub fn from_document(
        document: CatalogDocument,
        default_currency: CurrencyCode,
    ) -> Result<Self, CatalogError> {
        let currency = document.currency.unwrap_or(default_currency);
        Self::from_products(document.products, currency)
    }

    /// Parse and build a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Yaml` on malformed input, or a validation error.
    pub fn from_yaml_str(
        yaml: &str,
        default_currency: CurrencyCode,
    ) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(yaml)?;
        Self::from_document(document, default_currency)
    }

    /// Parse and build a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` on malformed input, or a validation error.
    pub fn from_json_str(
        json: &str,
        default_currency: CurrencyCode,
    ) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document, default_currency)
    }

    /// All products in display order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id in O(1).
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Product> {
        self.index
            .get(id)
            .and_then(|&position| self.products.get(position))
    }

    /// Whether the catalog knows this id.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Selling price of a product, in the catalog currency.
    #[must_use]
    pub fn price_of(&self, id: &str) -> Option<Price> {
        self.by_id(id)
            .map(|product| Price::new(product.price, self.currency))
    }

    /// Wrap a raw amount in the catalog currency.
    #[must_use]
    pub const fn price(&self, amount: Decimal) -> Price {
        Price::new(amount, self.currency)
    }

    /// Currency every price in this catalog is expressed in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Distinct categories present, in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category);
            }
        }
        seen
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Convert back to the serializable document form.
    #[must_use]
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            currency: Some(self.currency),
            products: self.products.clone(),
        }
    }
}

/// Check one record's price and rating ranges.
fn validate_product(product: &Product) -> Result<(), CatalogError> {
    let invalid_price = |reason: &str| CatalogError::InvalidPrice {
        id: product.id.clone(),
        reason: reason.to_string(),
    };

    if product.price < Decimal::ZERO {
        return Err(invalid_price("price is negative"));
    }
    if product.original_price < Decimal::ZERO {
        return Err(invalid_price("original price is negative"));
    }
    if product.price > product.original_price {
        return Err(invalid_price("price exceeds original price"));
    }
    if !product.rating.is_finite() || !(0.0..=5.0).contains(&product.rating) {
        return Err(CatalogError::InvalidRating {
            id: product.id.clone(),
        });
    }

    Ok(())
}
