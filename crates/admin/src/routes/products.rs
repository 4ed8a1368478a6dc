//! Product management route handlers.

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::instrument;

use purple_shop_core::admin::{AdminError, Product, ProductForm};
use purple_shop_core::{Category, ProductId, ProductStatus};

use crate::{
    components::data_table::{DataTableConfig, products_table_config},
    error::{Result, add_breadcrumb},
    filters,
    middleware::Workspace,
    models::{Flash, Layout, Section},
    state::AppState,
};

use super::{ConfirmTemplate, ListParams, parse_id, render};

/// Product row view for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub category: &'static str,
    pub price: String,
    pub stock: u32,
    pub inquiries: u32,
    pub status: &'static str,
    pub status_class: &'static str,
    pub created_at: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        let status = product.status();
        let status_class = match status {
            ProductStatus::Active => "status status-green",
            ProductStatus::OutOfStock => "status status-red",
        };

        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            category: product.category.as_str(),
            price: product.price.display(),
            stock: product.stock,
            inquiries: product.inquiries,
            status: status.label(),
            status_class,
            created_at: product.created_at.to_string(),
        }
    }
}

/// A `<select>` option for the category field.
#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub value: &'static str,
    pub selected: bool,
}

fn category_options(selected: &str) -> Vec<CategoryOption> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryOption {
            value: category.as_str(),
            selected: category.as_str().eq_ignore_ascii_case(selected.trim()),
        })
        .collect()
}

// =============================================================================
// Product List
// =============================================================================

/// Products list page template.
#[derive(Template)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub layout: Layout,
    pub table: DataTableConfig,
    pub products: Vec<ProductView>,
    pub total: usize,
}

/// Products list page handler.
#[instrument(skip(state, workspace))]
pub async fn index(
    State(state): State<AppState>,
    workspace: Workspace,
    Query(params): Query<ListParams>,
) -> Result<Html<String>> {
    let search = params.search();
    let status = params.status.as_deref().and_then(|s| s.parse::<ProductStatus>().ok());

    let store = workspace.store();
    let products: Vec<ProductView> = store
        .search_products(search, status)
        .into_iter()
        .map(ProductView::from)
        .collect();

    let table = products_table_config().with_values(
        search,
        &[("status", status.map_or("all", ProductStatus::as_str))],
    );

    let template = ProductsIndexTemplate {
        layout: Layout::new("Products", Section::Products, &state.config().storefront_url)
            .with_flash(workspace.take_flash().await?),
        table,
        products,
        total: store.products().len(),
    };

    Ok(render(&template))
}

// =============================================================================
// Add / Edit
// =============================================================================

/// Add and edit product form template.
#[derive(Template)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    pub layout: Layout,
    pub heading: &'static str,
    pub action: String,
    pub submit_label: &'static str,
    pub form: ProductForm,
    pub categories: Vec<CategoryOption>,
    pub error: Option<String>,
}

impl ProductFormTemplate {
    fn add(state: &AppState, form: ProductForm, error: Option<String>) -> Self {
        Self {
            layout: Layout::new("Add New Product", Section::Products, &state.config().storefront_url),
            heading: "Add New Product",
            action: "/products".to_string(),
            submit_label: "Add Product",
            categories: category_options(&form.category),
            form,
            error,
        }
    }

    fn edit(state: &AppState, id: ProductId, form: ProductForm, error: Option<String>) -> Self {
        Self {
            layout: Layout::new("Edit Product", Section::Products, &state.config().storefront_url),
            heading: "Edit Product",
            action: format!("/products/{id}"),
            submit_label: "Update Product",
            categories: category_options(&form.category),
            form,
            error,
        }
    }
}

/// Empty add-product form.
#[instrument(skip(state))]
pub async fn new_form(State(state): State<AppState>) -> Html<String> {
    render(&ProductFormTemplate::add(&state, ProductForm::default(), None))
}

/// Create a product from the submitted form.
///
/// Invalid input re-renders the form with the submitted values and a 422.
#[instrument(skip(state, workspace, form))]
pub async fn create(
    State(state): State<AppState>,
    mut workspace: Workspace,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let today = chrono::Utc::now().date_naive();
    let created = workspace
        .store_mut()
        .create_product(&form, today)
        .map(|product| product.id);

    match created {
        Ok(id) => {
            workspace.save().await?;
            tracing::info!(product_id = %id, "Product created");
            let product_id = id.to_string();
            add_breadcrumb(
                "products",
                "Created product",
                Some(&[("product_id", product_id.as_str())]),
            );
            workspace
                .set_flash(Flash::success("Product added successfully"))
                .await?;
            Ok(Redirect::to("/products").into_response())
        }
        Err(AdminError::Validation(err)) => {
            tracing::debug!(error = %err, "Product form rejected");
            let page = ProductFormTemplate::add(&state, form, Some(err.to_string()));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, render(&page)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Edit form pre-filled with the product's current values.
///
/// # Errors
///
/// Returns 404 for an unknown product.
#[instrument(skip(state, workspace))]
pub async fn edit_form(
    State(state): State<AppState>,
    workspace: Workspace,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let id: ProductId = parse_id(&id, "product")?;
    let product = workspace
        .store()
        .product(id)
        .ok_or(AdminError::ProductNotFound(id))?;

    Ok(render(&ProductFormTemplate::edit(
        &state,
        id,
        ProductForm::from_product(product),
        None,
    )))
}

/// Apply the submitted form to an existing product.
#[instrument(skip(state, workspace, form))]
pub async fn update(
    State(state): State<AppState>,
    mut workspace: Workspace,
    Path(id): Path<String>,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    let id: ProductId = parse_id(&id, "product")?;
    let updated = workspace
        .store_mut()
        .update_product(id, &form)
        .map(|product| product.id);

    match updated {
        Ok(id) => {
            workspace.save().await?;
            tracing::info!(product_id = %id, "Product updated");
            let product_id = id.to_string();
            add_breadcrumb(
                "products",
                "Updated product",
                Some(&[("product_id", product_id.as_str())]),
            );
            workspace
                .set_flash(Flash::success("Product updated successfully"))
                .await?;
            Ok(Redirect::to("/products").into_response())
        }
        Err(AdminError::Validation(err)) => {
            tracing::debug!(product_id = %id, error = %err, "Product form rejected");
            let page = ProductFormTemplate::edit(&state, id, form, Some(err.to_string()));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, render(&page)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

// =============================================================================
// Delete
// =============================================================================

/// Delete confirmation page.
#[instrument(skip(state, workspace))]
pub async fn confirm_delete(
    State(state): State<AppState>,
    workspace: Workspace,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let id: ProductId = parse_id(&id, "product")?;
    let store = workspace.store();
    let product = store.product(id).ok_or(AdminError::ProductNotFound(id))?;
    let related = store
        .inquiries()
        .iter()
        .filter(|inquiry| inquiry.product_id == id)
        .count();

    let mut message = format!("Are you sure you want to delete \"{}\"?", product.name);
    match related {
        0 => {}
        1 => message.push_str(" Its 1 inquiry will be deleted too."),
        n => message.push_str(&format!(" Its {n} inquiries will be deleted too.")),
    }

    Ok(render(&ConfirmTemplate {
        layout: Layout::new("Delete Product", Section::Products, &state.config().storefront_url),
        heading: "Delete Product",
        message,
        action: format!("/products/{id}/delete"),
        cancel_href: "/products",
    }))
}

/// Delete a product and every inquiry about it.
#[instrument(skip(workspace))]
pub async fn delete(mut workspace: Workspace, Path(id): Path<String>) -> Result<Redirect> {
    let id: ProductId = parse_id(&id, "product")?;
    let deleted = workspace.store_mut().delete_product(id)?;
    workspace.save().await?;

    tracing::info!(
        product_id = %id,
        removed_inquiries = deleted.removed_inquiries,
        "Product deleted"
    );
    let product_id = id.to_string();
    add_breadcrumb(
        "products",
        "Deleted product",
        Some(&[("product_id", product_id.as_str())]),
    );
    workspace
        .set_flash(Flash::success("Product deleted successfully"))
        .await?;
    Ok(Redirect::to("/products"))
}

#[cfg(test)]
mod tests {
    use purple_shop_core::sample;

    use super::*;

    #[test]
    fn test_product_view_derives_status() {
        let store = sample::admin_store();
        let views: Vec<ProductView> = store.products().iter().map(ProductView::from).collect();

        let out_of_stock: Vec<_> = views
            .iter()
            .filter(|v| v.status == "Out of Stock")
            .map(|v| v.id)
            .collect();
        assert_eq!(out_of_stock.len(), 1);
        assert!(views.iter().all(|v| v.price.starts_with('$')));
    }

    #[test]
    fn test_category_options_match_case_insensitively() {
        let options = category_options("electronics");
        let selected: Vec<_> = options.iter().filter(|o| o.selected).map(|o| o.value).collect();
        assert_eq!(selected, vec!["Electronics"]);
        assert!(category_options("").iter().all(|o| !o.selected));
    }
}
