//! Product route handlers: the browser, the detail page and its two forms.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use purple_shop_core::admin::InquiryForm;
use purple_shop_core::catalog::{CatalogProduct, CatalogQuery, SortKey};
use purple_shop_core::{Category, CategoryFilter, ProductId};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::Visitor;
use crate::models::{Flash, Layout, NavPage};
use crate::state::AppState;

// =============================================================================
// View Models
// =============================================================================

/// Product card data for templates.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub href: String,
    pub name: String,
    pub price: String,
    pub rating: f32,
    pub reviews: u32,
    pub image: String,
    pub category: &'static str,
    pub in_stock: bool,
}

impl From<&CatalogProduct> for ProductCardView {
    fn from(product: &CatalogProduct) -> Self {
        Self {
            href: format!("/product/{}", product.id),
            name: product.name.clone(),
            price: product.price.display(),
            rating: product.rating,
            reviews: product.reviews,
            image: product.image.clone(),
            category: product.category.as_str(),
            in_stock: product.in_stock,
        }
    }
}

/// A category shortcut linking to the filtered browser.
#[derive(Debug, Clone)]
pub struct CategoryLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

impl From<Category> for CategoryLink {
    fn from(category: Category) -> Self {
        Self {
            label: category.as_str(),
            href: format!("/products?category={}", category.as_str().to_lowercase()),
            active: false,
        }
    }
}

/// A `<select>` option.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: &'static str,
    pub selected: bool,
}

/// Product detail data for templates.
#[derive(Debug, Clone)]
pub struct ProductDetailView {
    pub card: ProductCardView,
    pub description: String,
    pub features: Vec<String>,
    pub specifications: Vec<(String, String)>,
    pub share_url: String,
}

// =============================================================================
// Product Browser
// =============================================================================

/// Product browser query parameters. Every field is optional and unknown
/// values fall back to the unfiltered default.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub in_stock: Option<String>,
}

impl BrowseParams {
    /// Convert raw parameters into a catalog query.
    #[must_use]
    pub fn to_query(&self) -> CatalogQuery {
        CatalogQuery {
            search: self.q.as_deref().unwrap_or_default().trim().to_string(),
            category: CategoryFilter::parse_lenient(self.category.as_deref().unwrap_or_default()),
            in_stock_only: matches!(self.in_stock.as_deref(), Some("1" | "true" | "on")),
            sort: SortKey::parse_lenient(self.sort.as_deref().unwrap_or_default()),
        }
    }
}

/// Product browser page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub layout: Layout,
    pub products: Vec<ProductCardView>,
    pub summary: String,
    pub search: String,
    pub in_stock_only: bool,
    pub category_options: Vec<SelectOption>,
    pub sort_options: Vec<SelectOption>,
    pub category_pills: Vec<CategoryLink>,
}

/// "Showing N of M products in X for "Y"".
#[must_use]
pub fn results_summary(shown: usize, total: usize, query: &CatalogQuery) -> String {
    let mut summary = format!("Showing {shown} of {total} products");
    if let CategoryFilter::Only(category) = query.category {
        summary.push_str(&format!(" in {category}"));
    }
    if !query.search.is_empty() {
        summary.push_str(&format!(" for \"{}\"", query.search));
    }
    summary
}

fn category_options(selected: CategoryFilter) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: "all".to_string(),
        label: "All",
        selected: selected == CategoryFilter::All,
    })
    .chain(Category::ALL.into_iter().map(|category| SelectOption {
        value: category.as_str().to_lowercase(),
        label: category.as_str(),
        selected: selected == CategoryFilter::Only(category),
    }))
    .collect()
}

fn sort_options(selected: SortKey) -> Vec<SelectOption> {
    SortKey::ALL
        .into_iter()
        .map(|key| SelectOption {
            value: key.as_str().to_string(),
            label: key.label(),
            selected: key == selected,
        })
        .collect()
}

fn category_pills(selected: CategoryFilter) -> Vec<CategoryLink> {
    std::iter::once(CategoryLink {
        label: "All",
        href: "/products".to_string(),
        active: selected == CategoryFilter::All,
    })
    .chain(Category::ALL.into_iter().map(|category| CategoryLink {
        active: selected == CategoryFilter::Only(category),
        ..CategoryLink::from(category)
    }))
    .collect()
}

/// Display the product browser.
#[instrument(skip(state, visitor))]
pub async fn index(
    State(state): State<AppState>,
    visitor: Visitor,
    Query(params): Query<BrowseParams>,
) -> Result<impl IntoResponse> {
    let query = params.to_query();
    let catalog = state.catalog();

    let products: Vec<ProductCardView> = catalog
        .browse(&query)
        .into_iter()
        .map(ProductCardView::from)
        .collect();

    tracing::debug!(
        results = products.len(),
        category = %query.category,
        sort = %query.sort,
        "Product browser query"
    );

    let layout = Layout::new("Our Products", NavPage::Products, &state.config().admin_url)
        .with_flash(visitor.take_flash().await?)
        .with_search(&query.search);

    Ok(ProductsIndexTemplate {
        summary: results_summary(products.len(), catalog.len(), &query),
        products,
        search: query.search.clone(),
        in_stock_only: query.in_stock_only,
        category_options: category_options(query.category),
        sort_options: sort_options(query.sort),
        category_pills: category_pills(query.category),
        layout,
    })
}

// =============================================================================
// Product Detail
// =============================================================================

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub layout: Layout,
    pub product: ProductDetailView,
    pub liked: bool,
    pub form: InquiryForm,
    pub form_error: Option<Flash>,
}

/// Look up a catalog product from a raw path segment.
fn find_product<'a>(state: &'a AppState, raw_id: &str) -> Result<&'a CatalogProduct> {
    raw_id
        .parse::<ProductId>()
        .ok()
        .and_then(|id| state.catalog().get(id))
        .ok_or_else(|| AppError::NotFound(format!("product {raw_id}")))
}

async fn render_show(
    state: &AppState,
    visitor: &Visitor,
    product: &CatalogProduct,
    form: InquiryForm,
    form_error: Option<String>,
) -> Result<ProductShowTemplate> {
    let layout = Layout::new(product.name.clone(), NavPage::Products, &state.config().admin_url)
        .with_flash(visitor.take_flash().await?);

    Ok(ProductShowTemplate {
        layout,
        product: ProductDetailView {
            card: ProductCardView::from(product),
            description: product.description.clone(),
            features: product.features.clone(),
            specifications: product.specifications.clone(),
            share_url: format!("{}/product/{}", state.config().base_url, product.id),
        },
        liked: visitor.likes(product.id).await?,
        form,
        form_error: form_error.map(Flash::error),
    })
}

/// Display the product detail page.
///
/// # Errors
///
/// Returns 404 if the ID is malformed or unknown.
#[instrument(skip(state, visitor))]
pub async fn show(
    State(state): State<AppState>,
    visitor: Visitor,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let product = find_product(&state, &id)?;
    add_breadcrumb("catalog", "Viewed product page", Some(&[("product_id", id.as_str())]));

    render_show(&state, &visitor, product, InquiryForm::default(), None).await
}

/// Validate and "send" a product inquiry.
///
/// On success a confirmation flash is queued and the visitor is redirected
/// back to the product. On failure the form is re-rendered with the
/// submitted values and a 422 status.
#[instrument(skip(state, visitor, form))]
pub async fn submit_inquiry(
    State(state): State<AppState>,
    visitor: Visitor,
    Path(id): Path<String>,
    Form(form): Form<InquiryForm>,
) -> Result<Response> {
    let product = find_product(&state, &id)?;

    match form.validate() {
        Ok(draft) => {
            tracing::info!(
                product_id = %product.id,
                email_domain = draft.email.domain(),
                "Product inquiry received"
            );
            add_breadcrumb(
                "inquiry",
                "Submitted product inquiry",
                Some(&[("product_id", id.as_str())]),
            );

            visitor
                .set_flash(
                    Flash::success("Inquiry Sent!")
                        .with_message("We'll get back to you within 24 hours."),
                )
                .await?;
            Ok(Redirect::to(&format!("/product/{}", product.id)).into_response())
        }
        Err(err) => {
            tracing::debug!(product_id = %product.id, error = %err, "Inquiry rejected");
            let page = render_show(&state, &visitor, product, form, Some(err.to_string())).await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
    }
}

/// Toggle whether the visitor likes this product.
#[instrument(skip(state, visitor))]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    visitor: Visitor,
    Path(id): Path<String>,
) -> Result<Redirect> {
    let product = find_product(&state, &id)?;
    let liked = visitor.toggle_like(product.id).await?;

    let title = if liked {
        "Added to favorites"
    } else {
        "Removed from favorites"
    };
    visitor.set_flash(Flash::success(title)).await?;

    Ok(Redirect::to(&format!("/product/{}", product.id)))
}
