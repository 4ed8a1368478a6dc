//! Admin record commands.
//!
//! Both commands work against the seed records the admin panel starts
//! every session from.

use purple_shop_core::admin::ProductForm;
use purple_shop_core::sample;

use super::CommandError;

/// Rows shown in the top products list.
const TOP_PRODUCTS: usize = 5;

/// Log the dashboard statistics and the most-inquired products.
pub fn stats() {
    let store = sample::admin_store();
    let stats = store.stats();

    tracing::info!("Total Products:    {}", stats.total_products);
    tracing::info!("Product Inquiries: {}", stats.total_inquiries);
    tracing::info!("Pending Inquiries: {}", stats.pending_inquiries);
    tracing::info!("Active Products:   {}", stats.active_products);

    tracing::info!("Top Products:");
    for (rank, product) in store
        .top_products_by_inquiries(TOP_PRODUCTS)
        .into_iter()
        .enumerate()
    {
        tracing::info!(
            "{}. {} ({} inquiries)",
            rank + 1,
            product.name,
            product.inquiries
        );
    }
}

/// Validate an add-product form and report the normalized result.
///
/// # Errors
///
/// Returns [`CommandError::InvalidProduct`] with the first failing field.
pub fn validate(form: &ProductForm) -> Result<(), CommandError> {
    let draft = form.validate()?;
    tracing::info!(
        "Valid product: {} | {} | {} | stock {} | {}",
        draft.name,
        draft.category,
        draft.price.display(),
        draft.stock,
        draft.description
    );
    Ok(())
}
