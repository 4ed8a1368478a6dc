//! Catalog inspection commands.

use purple_shop_core::Category;
use purple_shop_core::catalog::{Catalog, CatalogProduct, CatalogQuery, SortKey};
use purple_shop_core::{CategoryFilter, sample};

/// List products matching the given filters, in the requested order.
pub fn list(search: &str, category: Option<Category>, in_stock_only: bool, sort: SortKey) {
    let catalog = sample::catalog();
    let query = CatalogQuery {
        search: search.trim().to_string(),
        category: category.map_or(CategoryFilter::All, CategoryFilter::Only),
        in_stock_only,
        sort,
    };

    let products = catalog.browse(&query);
    tracing::info!("Showing {} of {} products", products.len(), catalog.len());
    for product in products {
        tracing::info!("{}", product_line(product));
    }
}

/// List every category with how many products it holds.
pub fn categories() {
    let catalog = sample::catalog();
    for (category, count) in category_counts(&catalog) {
        tracing::info!("{:<12} {count}", category.as_str());
    }
}

fn product_line(product: &CatalogProduct) -> String {
    let stock = if product.in_stock { "" } else { " (out of stock)" };
    format!(
        "#{:<3} {:<52} {:<12} {:>9}  {:.1}{}",
        product.id.as_i32(),
        product.name,
        product.category.as_str(),
        product.price.display(),
        product.rating,
        stock
    )
}

fn category_counts(catalog: &Catalog) -> Vec<(Category, usize)> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let count = catalog
                .products()
                .iter()
                .filter(|p| p.category == category)
                .count();
            (category, count)
        })
        .collect()
}
