//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! # List everything
//! cradle-cli products
//!
//! # Search within a category
//! cradle-cli products --search organic --category Clothing
//!
//! # One product in detail
//! cradle-cli show 3
//! ```

use cradle_core::Category;
use cradle_shop::{Catalog, CategoryFilter, FilterQuery, filter};

use crate::error::{CliError, Result};
use crate::render;

/// List products matching a search text and category (`all` for any).
///
/// # Errors
///
/// Returns `CliError::Shop` if `category` is not a known tag or `all`.
pub fn list(catalog: &Catalog, search: &str, category: &str) -> Result<String> {
    let category: CategoryFilter = category.parse()?;
    let query = FilterQuery::new(search, category);
    let found = filter(catalog.list(), &query);

    tracing::debug!(search, %category, matches = found.len(), "Filtered catalog");

    if found.is_empty() {
        return Ok("No products match".to_string());
    }

    let noun = if found.len() == 1 { "product" } else { "products" };
    let mut lines = vec![format!("{} {noun} ({})", found.len(), category.label())];
    lines.extend(found.iter().map(|product| render::product_row(product, catalog)));
    Ok(lines.join("\n"))
}

/// Show one product in detail.
///
/// # Errors
///
/// Returns `CliError::ProductNotFound` if no product has this id.
pub fn show(catalog: &Catalog, id: &str) -> Result<String> {
    let product = catalog
        .by_id(id)
        .ok_or_else(|| CliError::ProductNotFound(id.to_owned()))?;
    Ok(render::product_detail(product, catalog))
}

/// Category menu with product counts.
#[must_use]
pub fn categories(catalog: &Catalog) -> String {
    let count = |category: Category| {
        catalog
            .list()
            .iter()
            .filter(|product| product.category == category)
            .count()
    };

    let mut lines = vec![format!(
        "{:<10} {} ({})",
        CategoryFilter::All.as_str(),
        CategoryFilter::All.label(),
        catalog.len()
    )];
    lines.extend(Category::ALL.into_iter().map(|category| {
        format!(
            "{:<10} {} ({})",
            category.as_str(),
            category.label(),
            count(category)
        )
    }));
    lines.join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cradle_shop::ShopError;

    use super::*;
    use crate::catalog::bundled;

    #[test]
    fn test_list_all() {
        let output = list(&bundled(), "", "all").unwrap();
        assert!(output.starts_with("6 products (All Products)"));
        assert_eq!(output.lines().count(), 7);
    }

    #[test]
    fn test_list_search_organic() {
        let output = list(&bundled(), "organic", "all").unwrap();
        assert!(output.starts_with("1 product (All Products)"));
        assert!(output.contains("Organic Cotton Baby Onesies"));
    }

    #[test]
    fn test_list_search_and_category() {
        let output = list(&bundled(), "baby", "feeding").unwrap();
        assert!(output.starts_with("1 product (Feeding)"));
        assert!(output.contains("Baby Feeding Starter Kit"));
    }

    #[test]
    fn test_list_no_match() {
        let output = list(&bundled(), "stroller", "all").unwrap();
        assert_eq!(output, "No products match");
    }

    #[test]
    fn test_list_unknown_category() {
        let err = list(&bundled(), "", "Strollers").unwrap_err();
        assert!(matches!(err, CliError::Shop(ShopError::UnknownCategory(_))));
    }

    #[test]
    fn test_show() {
        let output = show(&bundled(), "4").unwrap();
        assert!(output.contains("Baby Feeding Starter Kit"));
        assert!(output.contains("Brand: FeedWell"));
    }

    #[test]
    fn test_show_not_found() {
        let err = show(&bundled(), "42").unwrap_err();
        assert!(matches!(err, CliError::ProductNotFound(id) if id == "42"));
    }

    #[test]
    fn test_categories() {
        let output = categories(&bundled());
        let first = output.lines().next().unwrap();
        assert!(first.starts_with("all"));
        assert!(first.ends_with("All Products (6)"));
        assert!(output.contains("Sleep & Comfort (1)"));
        assert_eq!(output.lines().count(), 1 + Category::ALL.len());
    }
}
