//! Cradle Shop - In-memory catalog and cart engine.
//!
//! This crate holds the only stateful logic of the shop screen:
//! - [`catalog`] - Validated, id-indexed, read-only product list
//! - [`filter`] - Pure search-text and category filtering
//! - [`cart`] - Per-product quantities with derived totals
//! - [`favorites`] - Set of favorited products
//! - [`session`] - One shopper's cart, favorites and query, driven by [`event`]s
//!
//! # Architecture
//!
//! The catalog is loaded once and shared behind an `Arc`. Cart and favorites
//! state lives in copy-on-write snapshots owned by a single session; every
//! mutation swaps in a new snapshot, so a view holding an older one keeps a
//! consistent picture. Everything is synchronous and single-threaded: events
//! are applied strictly in the order they arrive.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use cradle_core::{Category, CurrencyCode, Product, ProductId};
//! use cradle_shop::{Catalog, FilterQuery, ShopSession};
//! use rust_decimal::Decimal;
//!
//! let onesies = ProductId::parse("1").unwrap();
//! let catalog = Catalog::from_products(
//!     vec![Product::new(
//!         onesies.clone(),
//!         "Organic Cotton Onesies",
//!         "Soft organic cotton",
//!         Category::Clothing,
//!         Decimal::new(2499, 2),
//!     )],
//!     CurrencyCode::USD,
//! )
//! .unwrap();
//!
//! let mut session = ShopSession::new(Arc::new(catalog));
//! session.cart_mut().add(&onesies).unwrap();
//! session.cart_mut().add(&onesies).unwrap();
//!
//! assert_eq!(session.filter(&FilterQuery::search("organic")).len(), 1);
//! assert_eq!(session.summary().label(), "2 items in cart");
//! assert_eq!(session.summary().total_price.to_string(), "$49.98");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod error;
pub mod event;
pub mod favorites;
pub mod filter;
pub mod session;

pub use cart::{CartLine, CartSnapshot, CartStore, CartSummary, LineState};
pub use catalog::{Catalog, CatalogDocument};
pub use error::{CatalogError, InvalidReason, Result, ShopError};
pub use event::ShopEvent;
pub use favorites::{FavoritesSnapshot, FavoritesStore};
pub use filter::{CategoryFilter, FilterQuery, filter};
pub use session::{ProductCard, ShopSession};
