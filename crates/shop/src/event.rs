//! UI events that drive a shop session.
//!
//! Events also have a compact text form used by scripts and the CLI:
//!
//! | Text | Event |
//! |------|-------|
//! | `add:<id>` | [`ShopEvent::AddToCart`] (surrounding whitespace in ids is ignored) |
//! | `remove:<id>` | [`ShopEvent::RemoveFromCart`] |
//! | `fav:<id>` | [`ShopEvent::ToggleFavorite`] |
//! | `search:<text>` | [`ShopEvent::Search`] (text may be empty) |
//! | `category:<tag or all>` | [`ShopEvent::SelectCategory`] |
//! | `clear` | [`ShopEvent::ClearCart`] |

use std::fmt;
use std::str::FromStr;

use cradle_core::ProductId;

use crate::error::ShopError;
use crate::filter::CategoryFilter;

/// One user interaction with the shop screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopEvent {
    /// Search box text changed.
    Search(String),
    /// Category menu selection changed.
    SelectCategory(CategoryFilter),
    /// "Add to Cart" or "+" pressed.
    AddToCart(ProductId),
    /// "-" pressed.
    RemoveFromCart(ProductId),
    /// Heart pressed.
    ToggleFavorite(ProductId),
    /// Cart emptied, e.g. after checkout.
    ClearCart,
}

impl fmt::Display for ShopEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(text) => write!(f, "search:{text}"),
            Self::SelectCategory(category) => write!(f, "category:{category}"),
            Self::AddToCart(id) => write!(f, "add:{id}"),
            Self::RemoveFromCart(id) => write!(f, "remove:{id}"),
            Self::ToggleFavorite(id) => write!(f, "fav:{id}"),
            Self::ClearCart => write!(f, "clear"),
        }
    }
}

impl FromStr for ShopEvent {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "clear" {
            return Ok(Self::ClearCart);
        }

        let invalid = || ShopError::InvalidEvent(s.to_owned());
        let (kind, arg) = s.split_once(':').ok_or_else(invalid)?;
        let product_id = || ProductId::parse(arg.trim()).map_err(|_| invalid());

        match kind.trim() {
            "add" => Ok(Self::AddToCart(product_id()?)),
            "remove" => Ok(Self::RemoveFromCart(product_id()?)),
            "fav" => Ok(Self::ToggleFavorite(product_id()?)),
            "search" => Ok(Self::Search(arg.to_owned())),
            "category" => Ok(Self::SelectCategory(arg.parse()?)),
            _ => Err(invalid()),
        }
    }
}
