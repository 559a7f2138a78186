//! Cradle Core - Shared types library.
//!
//! This crate provides the common types used by every Cradle component:
//! - `shop` - Catalog, filter engine, cart and favorites stores
//! - `cli` - Command-line front end that drives a shop session
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no logging, no session state.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, categories and the
//!   product record itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
