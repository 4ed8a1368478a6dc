//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Home page
//! GET  /about                     - About page
//!
//! # Products
//! GET  /products                  - Product browser (?q=&category=&sort=&in_stock=)
//! GET  /product/{id}              - Product detail and inquiry form
//! POST /product/{id}/inquiry      - Submit an inquiry
//! POST /product/{id}/favorite     - Toggle the liked flag
//! ```

pub mod home;
pub mod pages;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the single-product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(products::show))
        .route("/{id}/inquiry", post(products::submit_inquiry))
        .route("/{id}/favorite", post(products::toggle_favorite))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/about", get(pages::about))
        .route("/products", get(products::index))
        .nest("/product", product_routes())
}
