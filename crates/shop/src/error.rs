//! Error types for the shop engine.
//!
//! Every error here is a synchronous validation failure raised at the call
//! site. Nothing is retried: the engine performs no I/O.

use cradle_core::ProductId;
use thiserror::Error;

/// Why a product was refused by the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The identifier is not in the catalog.
    UnknownProduct,
    /// The product exists but is out of stock.
    OutOfStock,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownProduct => write!(f, "not in catalog"),
            Self::OutOfStock => write!(f, "out of stock"),
        }
    }
}

/// Errors raised by shop session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    /// `add` was called for a product that cannot be put in the cart.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct {
        id: ProductId,
        reason: InvalidReason,
    },

    /// A category filter named a tag outside the known set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A cart line reached the largest representable quantity.
    #[error("Quantity overflow for product {0}")]
    QuantityOverflow(ProductId),

    /// A scripted UI event could not be parsed.
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
}

impl ShopError {
    /// Whether this error came from a refused `add`.
    #[must_use]
    pub const fn is_invalid_product(&self) -> bool {
        matches!(self, Self::InvalidProduct { .. })
    }
}

/// Errors raised while building a [`Catalog`](crate::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two records share one identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A record's prices break `0 <= price <= original_price`.
    #[error("Invalid price for product {id}: {reason}")]
    InvalidPrice { id: ProductId, reason: String },

    /// A record's rating is outside 0 to 5.
    #[error("Invalid rating for product {id}")]
    InvalidRating { id: ProductId },

    /// The YAML document could not be parsed.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for shop operations.
pub type Result<T> = std::result::Result<T, ShopError>;
