//! Replay a script of shop events against a fresh session.
//!
//! # Usage
//!
//! ```bash
//! cradle-cli replay add:1 add:2 add:1 remove:2 fav:3
//! cradle-cli replay "search:baby" category:Feeding add:4
//! ```
//!
//! An add the shop refuses (unknown or out-of-stock product) is reported and
//! the replay continues, the way the shop screen blocks a single action.
//! Any other error stops the replay.

use std::sync::Arc;

use cradle_shop::{Catalog, ShopEvent, ShopSession};

use crate::error::Result;
use crate::render;

/// Apply `events` in order and describe the resulting session.
///
/// # Errors
///
/// Returns `CliError::Shop` for an event that does not parse.
pub fn run(catalog: Arc<Catalog>, events: &[String]) -> Result<String> {
    let mut session = ShopSession::new(catalog);
    let mut refused = Vec::new();

    for text in events {
        let event: ShopEvent = text.parse()?;
        match session.apply(event) {
            Ok(()) => {}
            Err(e) if e.is_invalid_product() => {
                tracing::warn!(event = %text, error = %e, "Event refused");
                refused.push(format!("refused {text}: {e}"));
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::debug!(
        applied = events.len() - refused.len(),
        refused = refused.len(),
        "Replay finished"
    );

    let mut sections = refused;
    sections.push(format!(
        "{} of {} products visible ({})",
        session.visible_products().len(),
        session.catalog().len(),
        session.query().category.label(),
    ));
    sections.push(render::cart(session.cart()));

    let favorites = session.favorites().products(session.catalog());
    if favorites.is_empty() {
        sections.push("No favorites".to_string());
    } else {
        let names: Vec<&str> = favorites.iter().map(|p| p.name.as_str()).collect();
        sections.push(format!("Favorites: {}", names.join(", ")));
    }

    Ok(sections.join("\n"))
}
