//! Plain-text rendering of products and carts.

use cradle_core::Product;
use cradle_shop::{CartStore, Catalog};

/// Number of feature tags shown in a listing before "+N more".
const FEATURE_PREVIEW: usize = 2;

#[must_use]
pub const fn stock_label(in_stock: bool) -> &'static str {
    if in_stock { "In Stock" } else { "Out of Stock" }
}

/// One-line listing entry.
#[must_use]
pub fn product_row(product: &Product, catalog: &Catalog) -> String {
    let (features, more) = product.feature_preview(FEATURE_PREVIEW);
    let mut tags = features.join(", ");
    if more > 0 {
        tags.push_str(&format!(", +{more} more"));
    }

    format!(
        "{:>4}  {} {}  [{}]  {}  {}  ({tags})",
        product.id,
        product.image,
        product.name,
        product.category,
        catalog.price(product.price),
        stock_label(product.in_stock),
    )
}

/// Multi-line product card.
#[must_use]
pub fn product_detail(product: &Product, catalog: &Catalog) -> String {
    let mut lines = vec![
        format!("{} {}", product.image, product.name),
        format!("Brand: {}", product.brand),
        format!("Category: {}", product.category.label()),
        product.description.clone(),
        format!(
            "Price: {} (was {}, save {}, {}% off)",
            catalog.price(product.price),
            catalog.price(product.original_price),
            catalog.price(product.savings()),
            product.discount_percent(),
        ),
        format!(
            "Rating: {:.1} ({} reviews)",
            product.rating, product.review_count
        ),
    ];
    if !product.features.is_empty() {
        lines.push(format!("Features: {}", product.features.join(", ")));
    }
    lines.push(stock_label(product.in_stock).to_string());
    lines.join("\n")
}

/// Cart lines followed by the banner summary.
#[must_use]
pub fn cart(cart: &CartStore) -> String {
    let summary = cart.summary();
    if summary.is_empty() {
        return "Cart is empty".to_string();
    }

    let mut lines: Vec<String> = cart
        .lines()
        .iter()
        .map(|line| {
            format!(
                "{:>4}  {} x{}  {}",
                line.product.id, line.product.name, line.quantity, line.line_total
            )
        })
        .collect();
    lines.push(format!("{}: {}", summary.label(), summary.total_price));
    lines.join("\n")
}
