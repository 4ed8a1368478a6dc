//! Storefront catalog and the product browser's filter/sort pipeline.
//!
//! [`filter_and_sort`] is the single entry point used by the product browser,
//! the home page and the CLI. It never mutates its input and never fails: an
//! empty result is a valid answer.

use core::cmp::Ordering;
use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{Category, CategoryFilter, Price, ProductId};

/// A product as shown on the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Average review score, 0.0 to 5.0.
    pub rating: f32,
    pub reviews: u32,
    /// Image path relative to the site root.
    pub image: String,
    pub category: Category,
    pub in_stock: bool,
    pub description: String,
    pub features: Vec<String>,
    /// Ordered (label, value) pairs for the specifications table.
    pub specifications: Vec<(String, String)>,
}

/// Error returned for an unknown sort key.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort key: {0}")]
pub struct ParseSortKeyError(pub String);

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    /// Highest rated first.
    Rating,
    /// Alphabetical, case-insensitive.
    Name,
    /// Highest ID first.
    Newest,
}

impl SortKey {
    /// Every key, in the order the browser offers them.
    pub const ALL: [Self; 6] = [
        Self::Featured,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Rating,
        Self::Name,
        Self::Newest,
    ];

    /// Query-string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Name => "name",
            Self::Newest => "newest",
        }
    }

    /// Label for the sort dropdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Highest Rated",
            Self::Name => "Name A-Z",
            Self::Newest => "Newest",
        }
    }

    /// Parse a query value, falling back to [`SortKey::Featured`].
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    fn compare(self, a: &CatalogProduct, b: &CatalogProduct) -> Ordering {
        match self {
            Self::Featured => Ordering::Equal,
            Self::PriceLow => a.price.amount.cmp(&b.price.amount),
            Self::PriceHigh => b.price.amount.cmp(&a.price.amount),
            Self::Rating => b.rating.total_cmp(&a.rating),
            Self::Name => compare_names(&a.name, &b.name),
            Self::Newest => b.id.cmp(&a.id),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| ParseSortKeyError(s.to_owned()))
    }
}

/// Case-insensitive first. Names that differ only by case put the lowercase
/// form first (`apple` before `Apple`), matching browser `localeCompare`.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Parameters of one product browser view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    /// Case-insensitive substring matched against name or category.
    pub search: String,
    pub category: CategoryFilter,
    pub in_stock_only: bool,
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Whether any filter narrows the result (sort order does not count).
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.category != CategoryFilter::All || self.in_stock_only
    }

    fn matches(&self, needle: &str, product: &CatalogProduct) -> bool {
        let search_hit = needle.is_empty()
            || product.name.to_lowercase().contains(needle)
            || product.category.as_str().to_lowercase().contains(needle);

        search_hit
            && self.category.matches(product.category)
            && (!self.in_stock_only || product.in_stock)
    }
}

/// Filter `products` by `query` and order the survivors by `query.sort`.
///
/// The sort is stable, so ties (and every product under
/// [`SortKey::Featured`]) keep their input order.
#[must_use]
pub fn filter_and_sort<'a>(
    products: &'a [CatalogProduct],
    query: &CatalogQuery,
) -> Vec<&'a CatalogProduct> {
    let needle = query.search.to_lowercase();

    let mut matched: Vec<&CatalogProduct> = products
        .iter()
        .filter(|product| query.matches(&needle, product))
        .collect();

    if query.sort != SortKey::Featured {
        matched.sort_by(|a, b| query.sort.compare(a, b));
    }

    matched
}

/// The storefront's product list, in featured order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<CatalogProduct>,
}

impl Catalog {
    /// Create a catalog; the given order is the featured order.
    #[must_use]
    pub const fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }

    /// All products in featured order.
    #[must_use]
    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CatalogProduct> {
        self.products.iter().find(|product| product.id == id)
    }

    /// The first `count` products, shown on the home page.
    #[must_use]
    pub fn featured(&self, count: usize) -> Vec<&CatalogProduct> {
        self.products.iter().take(count).collect()
    }

    /// Run the filter/sort pipeline over the whole catalog.
    #[must_use]
    pub fn browse(&self, query: &CatalogQuery) -> Vec<&CatalogProduct> {
        filter_and_sort(&self.products, query)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::sample;

    fn product(id: i32, name: &str, cents: i64, rating: f32, category: Category) -> CatalogProduct {
        CatalogProduct {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::usd_cents(cents),
            rating,
            reviews: 0,
            image: String::new(),
            category,
            in_stock: true,
            description: String::new(),
            features: Vec::new(),
            specifications: Vec::new(),
        }
    }

    fn ids(products: &[&CatalogProduct]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    fn query(sort: SortKey) -> CatalogQuery {
        CatalogQuery {
            sort,
            ..CatalogQuery::default()
        }
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let products = vec![
            product(1, "Wireless Headphones", 19_999, 4.5, Category::Electronics),
            product(2, "Professional Camera Lens 50mm f/1.8", 29_999, 4.8, Category::Photography),
            product(3, "Ergonomic Office Chair", 39_999, 4.6, Category::Furniture),
            product(4, "Bluetooth Speaker", 7_999, 4.4, Category::Audio),
            product(5, "Mechanical Keyboard", 12_999, 4.7, Category::Gaming),
        ];
        let query = CatalogQuery {
            search: "camera".to_string(),
            ..CatalogQuery::default()
        };

        assert_eq!(ids(&filter_and_sort(&products, &query)), vec![2]);
    }

    #[test]
    fn test_search_matches_category_name() {
        let catalog = sample::catalog();
        let query = CatalogQuery {
            search: "FURNI".to_string(),
            ..CatalogQuery::default()
        };

        let found = catalog.browse(&query);
        assert_eq!(ids(&found), vec![4, 12]);
    }

    #[test]
    fn test_category_all_keeps_everything() {
        let catalog = sample::catalog();
        let found = catalog.browse(&CatalogQuery::default());
        assert_eq!(found.len(), catalog.len());
    }

    #[test]
    fn test_category_filter_and_stock_filter_combine() {
        let catalog = sample::catalog();
        let query = CatalogQuery {
            category: CategoryFilter::Only(Category::Furniture),
            in_stock_only: true,
            ..CatalogQuery::default()
        };

        assert_eq!(ids(&catalog.browse(&query)), vec![4]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = sample::catalog();
        let query = CatalogQuery {
            search: "submarine".to_string(),
            ..CatalogQuery::default()
        };

        assert!(catalog.browse(&query).is_empty());
    }

    #[test]
    fn test_price_sorts() {
        let catalog = sample::catalog();

        let low = catalog.browse(&query(SortKey::PriceLow));
        assert_eq!(low[0].name, "Wireless Charging Pad Fast Charge");

        let high = catalog.browse(&query(SortKey::PriceHigh));
        assert_eq!(high[0].name, "Ergonomic Office Chair with Lumbar Support");
    }

    #[test]
    fn test_rating_sort_is_descending_and_stable() {
        let products = vec![
            product(1, "A", 100, 4.5, Category::Audio),
            product(2, "B", 100, 4.8, Category::Audio),
            product(3, "C", 100, 4.5, Category::Audio),
        ];

        assert_eq!(
            ids(&filter_and_sort(&products, &query(SortKey::Rating))),
            vec![2, 1, 3]
        );
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let products = vec![
            product(1, "banana", 100, 1.0, Category::Audio),
            product(2, "Apple", 100, 1.0, Category::Audio),
            product(3, "cherry", 100, 1.0, Category::Audio),
        ];

        assert_eq!(
            ids(&filter_and_sort(&products, &query(SortKey::Name))),
            vec![2, 1, 3]
        );
    }

    #[test]
    fn test_name_sort_puts_lowercase_variant_first() {
        let products = vec![
            product(1, "Apple", 100, 1.0, Category::Audio),
            product(2, "apple", 100, 1.0, Category::Audio),
            product(3, "APPLE", 100, 1.0, Category::Audio),
        ];

        assert_eq!(
            ids(&filter_and_sort(&products, &query(SortKey::Name))),
            vec![2, 1, 3]
        );
    }

    #[test]
    fn test_newest_is_id_descending() {
        let catalog = sample::catalog();
        let newest = catalog.browse(&query(SortKey::Newest));
        assert_eq!(newest[0].id, ProductId::new(12));
        assert_eq!(newest[11].id, ProductId::new(1));
    }

    #[test]
    fn test_featured_preserves_input_order() {
        let catalog = sample::catalog();
        let featured = catalog.browse(&query(SortKey::Featured));
        assert_eq!(ids(&featured), (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse_lenient("price-high"), SortKey::PriceHigh);
        assert_eq!(SortKey::parse_lenient("bogus"), SortKey::Featured);
        assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::Rating);
    }

    #[test]
    fn test_featured_takes_first_products() {
        let catalog = sample::catalog();
        assert_eq!(ids(&catalog.featured(6)), vec![1, 2, 3, 4, 5, 6]);
    }

    fn arb_product() -> impl Strategy<Value = CatalogProduct> {
        (
            0..50i32,
            "[A-Za-z ]{0,12}",
            1..100_000i64,
            0..=50u8,
            0..6usize,
            any::<bool>(),
        )
            .prop_map(|(id, name, cents, tenths, category, in_stock)| CatalogProduct {
                in_stock,
                ..product(
                    id,
                    &name,
                    cents,
                    f32::from(tenths) / 10.0,
                    Category::ALL[category],
                )
            })
    }

    proptest! {
        /// Property: sorting an already sorted result changes nothing.
        #[test]
        fn sort_is_idempotent(products in prop::collection::vec(arb_product(), 0..30)) {
            for key in SortKey::ALL {
                let once: Vec<CatalogProduct> = filter_and_sort(&products, &query(key))
                    .into_iter()
                    .cloned()
                    .collect();
                let twice = filter_and_sort(&once, &query(key));

                let once_ids: Vec<_> = once.iter().map(|p| (p.id, p.name.clone())).collect();
                let twice_ids: Vec<_> = twice.iter().map(|p| (p.id, p.name.clone())).collect();
                prop_assert_eq!(once_ids, twice_ids);
            }
        }

        /// Property: filtering never invents products and honours the stock flag.
        #[test]
        fn filter_returns_subset(
            products in prop::collection::vec(arb_product(), 0..30),
            in_stock_only in any::<bool>(),
        ) {
            let query = CatalogQuery { in_stock_only, ..CatalogQuery::default() };
            let found = filter_and_sort(&products, &query);

            prop_assert!(found.len() <= products.len());
            if in_stock_only {
                prop_assert!(found.iter().all(|p| p.in_stock));
            } else {
                prop_assert_eq!(found.len(), products.len());
            }
        }
    }
}
