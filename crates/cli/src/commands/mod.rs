//! Subcommand implementations.
//!
//! Each command returns its output as text; `main` decides where it goes.

pub mod products;
pub mod replay;
