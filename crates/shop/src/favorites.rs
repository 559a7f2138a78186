//! Per-session favorites set.

use std::collections::BTreeSet;
use std::sync::Arc;

use cradle_core::{Product, ProductId};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Immutable view of favorited product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesSnapshot {
    ids: BTreeSet<ProductId>,
}

impl FavoritesSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    /// Snapshot with `id` flipped in or out.
    #[must_use]
    pub fn toggled(&self, id: &ProductId) -> Self {
        let mut ids = self.ids.clone();
        if !ids.remove(id.as_str()) {
            ids.insert(id.clone());
        }
        Self { ids }
    }
}

/// The favorites of one shop session.
///
/// Ids are not checked against the catalog; toggling never fails.
#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    snapshot: Arc<FavoritesSnapshot>,
}

impl FavoritesStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a saved snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: FavoritesSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// Flip membership of `id`.
    pub fn toggle(&mut self, id: &ProductId) -> Arc<FavoritesSnapshot> {
        let next = self.snapshot.toggled(id);
        tracing::debug!(
            product_id = %id,
            favorite = next.contains(id.as_str()),
            "Favorite toggled"
        );
        self.snapshot = Arc::new(next);
        self.snapshot()
    }

    #[must_use]
    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.snapshot.contains(id.as_str())
    }

    /// Current contents.
    #[must_use]
    pub fn snapshot(&self) -> Arc<FavoritesSnapshot> {
        Arc::clone(&self.snapshot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Favorited products in catalog order. Ids the catalog lacks are skipped.
    #[must_use]
    pub fn products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog
            .list()
            .iter()
            .filter(|product| self.snapshot.contains(product.id.as_str()))
            .collect()
    }
}
