//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! # Dashboard
//! GET  /                          - Overview: stats, recent inquiries, top products
//!
//! # Products
//! GET  /products                  - Product table (?q=&status=)
//! GET  /products/new              - Add-product form
//! POST /products                  - Create product
//! GET  /products/{id}/edit        - Edit form
//! POST /products/{id}             - Update product
//! GET  /products/{id}/delete      - Delete confirmation
//! POST /products/{id}/delete      - Delete product and its inquiries
//!
//! # Inquiries
//! GET  /inquiries                 - Inquiry table (?q=&status=)
//! POST /inquiries/{id}/status     - Set status, or toggle when `status` is absent
//! GET  /inquiries/{id}/delete     - Delete confirmation
//! POST /inquiries/{id}/delete     - Delete inquiry
//!
//! # Session
//! POST /logout                    - Discard session data, redirect to storefront
//! ```

pub mod dashboard;
pub mod inquiries;
pub mod products;
pub mod session;

use std::str::FromStr;

use askama::Template;
use axum::{
    Router,
    response::Html,
    routing::{get, post},
};
use serde::Deserialize;

use crate::{error::AppError, filters, models::Layout, state::AppState};

/// Search and status parameters shared by the list pages.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub status: Option<String>,
}

impl ListParams {
    /// Trimmed search text, empty when absent.
    #[must_use]
    pub fn search(&self) -> &str {
        self.q.as_deref().map_or("", str::trim)
    }
}

/// Generic "are you sure?" page for destructive actions.
#[derive(Template)]
#[template(path = "confirm.html")]
pub struct ConfirmTemplate {
    pub layout: Layout,
    pub heading: &'static str,
    pub message: String,
    /// Form target for the confirming POST.
    pub action: String,
    pub cancel_href: &'static str,
}

/// Render a template, logging and degrading to a plain message on failure.
pub(crate) fn render(template: &impl Template) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}

/// Parse a record ID from a path segment; anything malformed is a 404.
pub(crate) fn parse_id<T: FromStr>(raw: &str, kind: &str) -> Result<T, AppError> {
    raw.parse::<T>()
        .map_err(|_| AppError::NotFound(format!("{kind} {raw}")))
}

/// Create the product management router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/new", get(products::new_form))
        .route("/{id}", post(products::update))
        .route("/{id}/edit", get(products::edit_form))
        .route(
            "/{id}/delete",
            get(products::confirm_delete).post(products::delete),
        )
}

/// Create the inquiry router.
pub fn inquiry_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(inquiries::index))
        .route("/{id}/status", post(inquiries::update_status))
        .route(
            "/{id}/delete",
            get(inquiries::confirm_delete).post(inquiries::delete),
        )
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .nest("/products", product_routes())
        .nest("/inquiries", inquiry_routes())
        .route("/logout", post(session::logout))
}
