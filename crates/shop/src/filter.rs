//! Catalog filtering by free-text search and category.
//!
//! Filtering is a pure, stable narrowing of the input: it never re-sorts and
//! never mutates the products it is given.

use std::fmt;
use std::str::FromStr;

use cradle_core::{Category, Product};

use crate::error::ShopError;

/// Sentinel accepted in place of a category tag.
pub const ALL_CATEGORIES: &str = "all";

/// Category predicate of a [`FilterQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every category matches.
    #[default]
    All,
    /// Only products in exactly this category match.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product category passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Tag used in URLs and scripts (`"all"` or the category tag).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category.as_str(),
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Products",
            Self::Only(category) => category.label(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_CATEGORIES) {
            return Ok(Self::All);
        }
        s.parse::<Category>()
            .map(Self::Only)
            .map_err(|_| ShopError::UnknownCategory(s.to_owned()))
    }
}

/// Search text plus category, as entered in the shop toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterQuery {
    /// Free text, matched case-insensitively against name or description.
    pub search_text: String,
    pub category: CategoryFilter,
}

impl FilterQuery {
    /// Create a query from both parts.
    #[must_use]
    pub fn new(search_text: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search_text: search_text.into(),
            category,
        }
    }

    /// The identity query: empty search, all categories.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Search text across all categories.
    #[must_use]
    pub fn search(search_text: impl Into<String>) -> Self {
        Self::new(search_text, CategoryFilter::All)
    }

    /// One category, no search text.
    #[must_use]
    pub fn in_category(category: Category) -> Self {
        Self::new(String::new(), CategoryFilter::Only(category))
    }

    /// Whether this query keeps every product.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.search_text.is_empty() && self.category == CategoryFilter::All
    }

    /// Whether a single product passes both predicates.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        Matcher::new(self).matches(product)
    }
}

/// A query with its needle lower-cased once, for filtering many products.
struct Matcher {
    needle: String,
    category: CategoryFilter,
}

impl Matcher {
    fn new(query: &FilterQuery) -> Self {
        Self {
            needle: query.search_text.to_lowercase(),
            category: query.category,
        }
    }

    fn matches(&self, product: &Product) -> bool {
        self.category.matches(product.category) && self.matches_text(product)
    }

    fn matches_text(&self, product: &Product) -> bool {
        self.needle.is_empty()
            || product.name.to_lowercase().contains(&self.needle)
            || product.description.to_lowercase().contains(&self.needle)
    }
}

/// Narrow `products` to those matching `query`, preserving order.
///
/// Returns an empty vector when nothing matches.
pub fn filter<'a, I>(products: I, query: &FilterQuery) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let matcher = Matcher::new(query);
    products
        .into_iter()
        .filter(|product| matcher.matches(product))
        .collect()
}
