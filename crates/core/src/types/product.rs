//! The catalog product record.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{Category, ProductId};

/// An immutable catalog product.
///
/// `name` and `description` are what free-text search matches against;
/// `in_stock` decides whether the product may be added to a cart. The
/// remaining display fields carry no invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Current selling price.
    pub price: Decimal,
    /// List price before discount. Never below `price` in a valid catalog.
    pub original_price: Decimal,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Average review score, 0 to 5.
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub brand: String,
    /// Display glyph shown on the product card.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
}

const fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Create an in-stock product sold at its list price.
    ///
    /// Display fields start empty; use the `with_*` methods to fill them.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            category,
            price,
            original_price: price,
            in_stock: true,
            rating: 0.0,
            review_count: 0,
            brand: String::new(),
            image: String::new(),
            features: Vec::new(),
        }
    }

    /// Set the list price the current price is discounted from.
    #[must_use]
    pub fn with_original_price(mut self, original_price: Decimal) -> Self {
        self.original_price = original_price;
        self
    }

    /// Set stock availability.
    #[must_use]
    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Set rating and review count.
    #[must_use]
    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Set the brand name.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the feature tags.
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Amount saved against the list price.
    #[must_use]
    pub fn savings(&self) -> Decimal {
        self.original_price.saturating_sub(self.price)
    }

    /// Discount against the list price as a whole percentage.
    ///
    /// Returns 0 when the list price is zero or the ratio is out of range.
    #[must_use]
    pub fn discount_percent(&self) -> u32 {
        // Divide first: savings * 100 overflows for list prices near Decimal::MAX
        self.savings()
            .checked_div(self.original_price)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(|percent| {
                percent.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            })
            .and_then(|percent| percent.to_u32())
            .unwrap_or(0)
    }

    /// Feature tags shown on the card, plus how many were left out.
    #[must_use]
    pub fn feature_preview(&self, shown: usize) -> (&[String], usize) {
        let cut = shown.min(self.features.len());
        let (head, rest) = self.features.split_at(cut);
        (head, rest.len())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn onesies() -> Product {
        Product::new(
            ProductId::parse("1").unwrap(),
            "Organic Cotton Baby Onesies (3-Pack)",
            "Soft, breathable organic cotton onesies",
            Category::Clothing,
            Decimal::new(2499, 2),
        )
        .with_original_price(Decimal::new(3499, 2))
        .with_features(["Organic Cotton", "Hypoallergenic", "Machine Washable"])
    }

    #[test]
    fn test_savings() {
        assert_eq!(onesies().savings(), Decimal::from(10));
    }

    #[test]
    fn test_discount_percent_rounds() {
        // 10 / 34.99 = 28.58%
        assert_eq!(onesies().discount_percent(), 29);
    }

    #[test]
    fn test_discount_percent_zero_list_price() {
        let free = onesies().with_original_price(Decimal::ZERO);
        assert_eq!(free.discount_percent(), 0);
    }

    #[test]
    fn test_discount_percent_huge_list_price() {
        let priced_at = |price| Product {
            price,
            ..onesies().with_original_price(Decimal::MAX)
        };

        assert_eq!(priced_at(Decimal::ZERO).discount_percent(), 100);
        assert_eq!(priced_at(Decimal::MAX / Decimal::TWO).discount_percent(), 50);
        assert_eq!(priced_at(Decimal::MAX).discount_percent(), 0);
    }

    #[test]
    fn test_new_defaults() {
        let product = Product::new(
            ProductId::parse("x").unwrap(),
            "Name",
            "Desc",
            Category::Toys,
            Decimal::from(5),
        );
        assert!(product.in_stock);
        assert_eq!(product.original_price, product.price);
        assert_eq!(product.savings(), Decimal::ZERO);
    }

    #[test]
    fn test_feature_preview() {
        let product = onesies();
        let (shown, more) = product.feature_preview(2);
        assert_eq!(shown, ["Organic Cotton", "Hypoallergenic"]);
        assert_eq!(more, 1);

        let (shown, more) = product.feature_preview(10);
        assert_eq!(shown.len(), 3);
        assert_eq!(more, 0);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "id": "7",
            "name": "Swaddle",
            "description": "Muslin swaddle",
            "category": "Sleep",
            "price": "12.50",
            "original_price": "15.00"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "7");
        assert_eq!(product.price, Decimal::new(1250, 2));
        assert!(product.in_stock);
        assert!(product.features.is_empty());
    }
}
