//! One shopper's view of the shop.
//!
//! A [`ShopSession`] owns the cart, the favorites and the current filter
//! query, and shares the catalog. Views read from it and feed UI events back
//! through [`ShopSession::apply`], one at a time, in arrival order.

use std::sync::Arc;

use cradle_core::Product;
use tracing::instrument;

use crate::cart::{CartStore, CartSummary};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::event::ShopEvent;
use crate::favorites::FavoritesStore;
use crate::filter::{self, CategoryFilter, FilterQuery};

/// What a product card needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard<'a> {
    pub product: &'a Product,
    /// Units in the cart, 0 when absent.
    pub quantity: u32,
    pub is_favorite: bool,
}

impl ProductCard<'_> {
    /// Whether the "Add to Cart" control is enabled.
    #[must_use]
    pub const fn can_add(&self) -> bool {
        self.product.in_stock
    }
}

/// State of one active shop screen.
#[derive(Debug, Clone)]
pub struct ShopSession {
    catalog: Arc<Catalog>,
    query: FilterQuery,
    cart: CartStore,
    favorites: FavoritesStore,
}

impl ShopSession {
    /// Start a session with an empty cart, no favorites, and the identity query.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            cart: CartStore::new(Arc::clone(&catalog)),
            catalog,
            query: FilterQuery::all(),
            favorites: FavoritesStore::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current search text and category.
    #[must_use]
    pub const fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn set_search(&mut self, search_text: impl Into<String>) {
        self.query.search_text = search_text.into();
    }

    pub const fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }

    /// Filter the catalog by an arbitrary query.
    #[must_use]
    pub fn filter(&self, query: &FilterQuery) -> Vec<&Product> {
        filter::filter(self.catalog.list(), query)
    }

    /// Products passing the current query, in catalog order.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter(&self.query)
    }

    /// Visible products with their cart and favorite state.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<ProductCard<'_>> {
        self.visible_products()
            .into_iter()
            .map(|product| ProductCard {
                product,
                quantity: self.cart.quantity_of(&product.id),
                is_favorite: self.favorites.is_favorite(&product.id),
            })
            .collect()
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    #[must_use]
    pub const fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub const fn favorites_mut(&mut self) -> &mut FavoritesStore {
        &mut self.favorites
    }

    /// Cart totals for the banner.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        self.cart.summary()
    }

    /// Apply one UI event.
    ///
    /// # Errors
    ///
    /// Returns the cart's error for a refused [`ShopEvent::AddToCart`]; the
    /// session is unchanged in that case.
    #[instrument(skip_all, fields(event = %event))]
    pub fn apply(&mut self, event: ShopEvent) -> Result<()> {
        match event {
            ShopEvent::Search(text) => self.set_search(text),
            ShopEvent::SelectCategory(category) => self.set_category(category),
            ShopEvent::AddToCart(id) => {
                self.cart.add(&id)?;
            }
            ShopEvent::RemoveFromCart(id) => {
                self.cart.remove(&id);
            }
            ShopEvent::ToggleFavorite(id) => {
                self.favorites.toggle(&id);
            }
            ShopEvent::ClearCart => {
                self.cart.clear();
            }
        }
        Ok(())
    }
}
