//! Per-session shopping cart.
//!
//! The cart is a mapping of product id to a quantity of at least one. Each
//! mutation builds a fresh [`CartSnapshot`] and swaps it in (copy-on-write),
//! so earlier snapshots handed to a view never change underneath it.
//!
//! Totals are always derived from the current snapshot; nothing is cached.

use std::collections::BTreeMap;
use std::num::NonZeroU32;
use std::sync::Arc;

use cradle_core::{Price, Product, ProductId};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{InvalidReason, Result, ShopError};

/// Where one product sits in the cart state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    Absent,
    InCart(NonZeroU32),
}

/// Immutable view of cart contents.
///
/// Quantities are `NonZeroU32`: a stored zero is unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartSnapshot {
    entries: BTreeMap<ProductId, NonZeroU32>,
}

impl CartSnapshot {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity held for a product, 0 when absent.
    #[must_use]
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.entries.get(id).map_or(0, |quantity| quantity.get())
    }

    /// State of one product in the cart.
    #[must_use]
    pub fn state_of(&self, id: &str) -> LineState {
        self.entries
            .get(id)
            .copied()
            .map_or(LineState::Absent, LineState::InCart)
    }

    /// Whether the product has an entry.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.entries
            .values()
            .map(|quantity| u64::from(quantity.get()))
            .sum()
    }

    /// Entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, u32)> {
        self.entries.iter().map(|(id, quantity)| (id, quantity.get()))
    }

    /// Plain `id -> quantity` map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<ProductId, u32> {
        self.iter().map(|(id, quantity)| (id.clone(), quantity)).collect()
    }

    /// Snapshot with one more unit of `id`.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::QuantityOverflow` if the line is already at `u32::MAX`.
    pub fn incremented(&self, id: &ProductId) -> Result<Self> {
        let next = match self.entries.get(id.as_str()) {
            Some(quantity) => quantity
                .checked_add(1)
                .ok_or_else(|| ShopError::QuantityOverflow(id.clone()))?,
            None => NonZeroU32::MIN,
        };

        let mut entries = self.entries.clone();
        entries.insert(id.clone(), next);
        Ok(Self { entries })
    }

    /// Snapshot with one unit of `id` taken away, dropping the entry at zero.
    ///
    /// Returns `None` when `id` has no entry.
    #[must_use]
    pub fn decremented(&self, id: &str) -> Option<Self> {
        let quantity = self.entries.get(id)?;
        let mut entries = self.entries.clone();
        match NonZeroU32::new(quantity.get() - 1) {
            Some(fewer) => {
                if let Some(slot) = entries.get_mut(id) {
                    *slot = fewer;
                }
            }
            None => {
                entries.remove(id);
            }
        }
        Some(Self { entries })
    }
}

/// A cart entry resolved against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub quantity: u32,
    /// `quantity * product.price`.
    pub line_total: Price,
}

/// Aggregate numbers shown in the cart banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub total_items: u64,
    pub total_price: Price,
}

impl CartSummary {
    /// Whether the cart holds nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// Banner text, e.g. "1 item in cart" or "3 items in cart".
    #[must_use]
    pub fn label(&self) -> String {
        let noun = if self.total_items == 1 { "item" } else { "items" };
        format!("{} {noun} in cart", self.total_items)
    }
}

/// The cart of one shop session.
#[derive(Debug, Clone)]
pub struct CartStore {
    catalog: Arc<Catalog>,
    snapshot: Arc<CartSnapshot>,
}

impl CartStore {
    /// Create an empty cart over `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::from_snapshot(catalog, CartSnapshot::new())
    }

    /// Restore a cart from an earlier snapshot.
    ///
    /// Entries the catalog no longer knows are kept; they price as zero.
    #[must_use]
    pub fn from_snapshot(catalog: Arc<Catalog>, snapshot: CartSnapshot) -> Self {
        Self {
            catalog,
            snapshot: Arc::new(snapshot),
        }
    }

    /// Current contents.
    #[must_use]
    pub fn snapshot(&self) -> Arc<CartSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Catalog this cart prices against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Add one unit of a product.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::InvalidProduct` if the product is not in the
    /// catalog or is out of stock, and `ShopError::QuantityOverflow` if its
    /// line is full. The cart is unchanged on error.
    pub fn add(&mut self, id: &ProductId) -> Result<Arc<CartSnapshot>> {
        let product = self
            .catalog
            .by_id(id.as_str())
            .ok_or_else(|| ShopError::InvalidProduct {
                id: id.clone(),
                reason: InvalidReason::UnknownProduct,
            })?;

        if !product.in_stock {
            return Err(ShopError::InvalidProduct {
                id: id.clone(),
                reason: InvalidReason::OutOfStock,
            });
        }

        let next = self.snapshot.incremented(&product.id)?;
        tracing::debug!(
            product_id = %id,
            quantity = next.quantity_of(id.as_str()),
            "Added to cart"
        );
        self.snapshot = Arc::new(next);
        Ok(self.snapshot())
    }

    /// Remove one unit of a product.
    ///
    /// Removing a product that is not in the cart is a no-op.
    pub fn remove(&mut self, id: &ProductId) -> Arc<CartSnapshot> {
        match self.snapshot.decremented(id.as_str()) {
            Some(next) => {
                tracing::debug!(
                    product_id = %id,
                    quantity = next.quantity_of(id.as_str()),
                    "Removed from cart"
                );
                self.snapshot = Arc::new(next);
            }
            None => {
                tracing::debug!(product_id = %id, "Remove ignored, product not in cart");
            }
        }
        self.snapshot()
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> Arc<CartSnapshot> {
        tracing::debug!(lines = self.snapshot.len(), "Cart cleared");
        self.snapshot = Arc::new(CartSnapshot::new());
        self.snapshot()
    }

    /// Quantity held for a product, 0 when absent.
    #[must_use]
    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.snapshot.quantity_of(id.as_str())
    }

    /// Whether the product has an entry.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.snapshot.contains(id.as_str())
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.snapshot.total_items()
    }

    /// Sum of `quantity * price` over all entries.
    ///
    /// An entry whose product cannot be resolved contributes zero.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.snapshot.iter().fold(
            Price::zero(self.catalog.currency()),
            |total, (id, quantity)| match self.catalog.price_of(id.as_str()) {
                Some(price) => total.plus(price.times(quantity).amount),
                None => {
                    tracing::warn!(
                        product_id = %id,
                        quantity,
                        "Cart entry not in catalog, priced at zero"
                    );
                    total
                }
            },
        )
    }

    /// Entries resolved against the catalog, in id order.
    ///
    /// Unresolvable entries are skipped.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine<'_>> {
        self.snapshot
            .iter()
            .filter_map(|(id, quantity)| {
                let product = self.catalog.by_id(id.as_str())?;
                Some(CartLine {
                    product,
                    quantity,
                    line_total: self.catalog.price(product.price).times(quantity),
                })
            })
            .collect()
    }

    /// Total items and total price together.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total_items: self.total_items(),
            total_price: self.total_price(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cradle_core::{Category, CurrencyCode};
    use rust_decimal::Decimal;

    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    fn product(s: &str, price: i64, in_stock: bool) -> Product {
        Product::new(id(s), s, s, Category::Care, Decimal::from(price)).with_stock(in_stock)
    }

    /// A: 10 in stock, B: 20 out of stock, C: 2.50 in stock.
    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::from_products(
                vec![
                    product("A", 10, true),
                    product("B", 20, false),
                    Product::new(id("C"), "C", "C", Category::Toys, Decimal::new(250, 2)),
                ],
                CurrencyCode::USD,
            )
            .unwrap(),
        )
    }

    fn store() -> CartStore {
        CartStore::new(catalog())
    }

    // =========================================================================
    // add
    // =========================================================================

    #[test]
    fn test_add_creates_entry_at_one() {
        let mut cart = store();
        let snapshot = cart.add(&id("A")).unwrap();
        assert_eq!(snapshot.quantity_of("A"), 1);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_add_increments() {
        let mut cart = store();
        cart.add(&id("A")).unwrap();
        cart.add(&id("A")).unwrap();
        let snapshot = cart.add(&id("A")).unwrap();
        assert_eq!(snapshot.state_of("A"), LineState::InCart(NonZeroU32::new(3).unwrap()));
    }

    #[test]
    fn test_add_out_of_stock_rejected() {
        let mut cart = store();
        let err = cart.add(&id("B")).unwrap_err();
        assert_eq!(
            err,
            ShopError::InvalidProduct {
                id: id("B"),
                reason: InvalidReason::OutOfStock,
            }
        );
        assert!(cart.snapshot().is_empty());
    }

    #[test]
    fn test_add_unknown_rejected() {
        let mut cart = store();
        let err = cart.add(&id("Z")).unwrap_err();
        assert!(matches!(
            err,
            ShopError::InvalidProduct {
                reason: InvalidReason::UnknownProduct,
                ..
            }
        ));
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_add_overflow_rejected() {
        let mut entries = BTreeMap::new();
        entries.insert(id("A"), NonZeroU32::MAX);
        let mut cart = CartStore::from_snapshot(catalog(), CartSnapshot { entries });

        let err = cart.add(&id("A")).unwrap_err();
        assert_eq!(err, ShopError::QuantityOverflow(id("A")));
        assert_eq!(cart.quantity_of(&id("A")), u32::MAX);
    }

    // =========================================================================
    // remove / clear
    // =========================================================================

    #[test]
    fn test_remove_decrements() {
        let mut cart = store();
        cart.add(&id("A")).unwrap();
        cart.add(&id("A")).unwrap();
        let snapshot = cart.remove(&id("A"));
        assert_eq!(snapshot.quantity_of("A"), 1);
    }

    #[test]
    fn test_remove_last_unit_deletes_entry() {
        let mut cart = store();
        cart.add(&id("A")).unwrap();
        let snapshot = cart.remove(&id("A"));
        assert!(!snapshot.contains("A"));
        assert_eq!(snapshot.state_of("A"), LineState::Absent);
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = store();
        cart.add(&id("C")).unwrap();
        let before = cart.snapshot();
        let after = cart.remove(&id("A"));
        assert_eq!(before, after);
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_clear() {
        let mut cart = store();
        cart.add(&id("A")).unwrap();
        cart.add(&id("C")).unwrap();
        let snapshot = cart.clear();
        assert!(snapshot.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price().amount, Decimal::ZERO);
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    #[test]
    fn test_earlier_snapshot_is_unchanged_by_mutation() {
        let mut cart = store();
        let first = cart.add(&id("A")).unwrap();
        cart.add(&id("A")).unwrap();
        cart.add(&id("C")).unwrap();
        assert_eq!(first.quantity_of("A"), 1);
        assert!(!first.contains("C"));
    }

    #[test]
    fn test_snapshot_serializes_as_map() {
        let mut cart = store();
        cart.add(&id("C")).unwrap();
        cart.add(&id("A")).unwrap();
        cart.add(&id("A")).unwrap();
        let json = serde_json::to_string(&*cart.snapshot()).unwrap();
        assert_eq!(json, r#"{"A":2,"C":1}"#);
    }

    #[test]
    fn test_to_map() {
        let mut cart = store();
        cart.add(&id("A")).unwrap();
        let map = cart.snapshot().to_map();
        assert_eq!(map.get("A"), Some(&1));
        assert_eq!(map.len(), 1);
    }

    // =========================================================================
    // Totals
    // =========================================================================

    #[test]
    fn test_example_scenario() {
        let mut cart = store();

        cart.add(&id("A")).unwrap();
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price().amount, Decimal::from(10));

        assert!(cart.add(&id("B")).unwrap_err().is_invalid_product());

        cart.add(&id("A")).unwrap();
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price().amount, Decimal::from(20));

        cart.remove(&id("A"));
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price().amount, Decimal::from(10));

        cart.remove(&id("A"));
        assert!(cart.snapshot().is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_total_price_decimal_exact() {
        let mut cart = store();
        for _ in 0..3 {
            cart.add(&id("C")).unwrap();
        }
        assert_eq!(cart.total_price().amount, Decimal::new(750, 2));
        assert_eq!(cart.total_price().to_string(), "$7.50");
    }

    #[test]
    fn test_total_price_skips_unresolvable_entry() {
        let mut cart = store();
        cart.add(&id("A")).unwrap();
        cart.add(&id("C")).unwrap();

        // Reopen the same contents against a catalog that dropped "A".
        let newer = Arc::new(
            Catalog::from_products(
                vec![Product::new(id("C"), "C", "C", Category::Toys, Decimal::new(250, 2))],
                CurrencyCode::USD,
            )
            .unwrap(),
        );
        let restored = CartStore::from_snapshot(newer, (*cart.snapshot()).clone());

        assert_eq!(restored.total_items(), 2);
        assert_eq!(restored.total_price().amount, Decimal::new(250, 2));
        assert_eq!(restored.lines().len(), 1);
    }

    #[test]
    fn test_lines() {
        let mut cart = store();
        cart.add(&id("C")).unwrap();
        cart.add(&id("C")).unwrap();
        cart.add(&id("A")).unwrap();

        let lines = cart.lines();
        assert_eq!(lines.len(), 2);
        let first = lines.first().unwrap();
        assert_eq!(first.product.id, id("A"));
        assert_eq!(first.quantity, 1);
        let second = lines.get(1).unwrap();
        assert_eq!(second.quantity, 2);
        assert_eq!(second.line_total.amount, Decimal::from(5));
    }

    #[test]
    fn test_summary_label() {
        let mut cart = store();
        assert!(cart.summary().is_empty());
        assert_eq!(cart.summary().label(), "0 items in cart");

        cart.add(&id("A")).unwrap();
        assert_eq!(cart.summary().label(), "1 item in cart");

        cart.add(&id("C")).unwrap();
        let summary = cart.summary();
        assert_eq!(summary.label(), "2 items in cart");
        assert_eq!(summary.total_price.to_string(), "$12.50");
    }
}
