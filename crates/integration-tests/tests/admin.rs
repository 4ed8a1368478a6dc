//! Integration tests for the admin dashboard.
//!
//! Every admin session starts from the seed store: three products and
//! three inquiries. Changes stay in that session until logout.

use axum::http::StatusCode;

use purple_shop_integration_tests::TestClient;

const STAT_VALUE: &str = "<span class=\"stat-value\">";

/// Numbers shown on the dashboard stat cards, in display order.
fn stat_values(body: &str) -> Vec<u32> {
    body.split(STAT_VALUE)
        .skip(1)
        .filter_map(|rest| rest.split('<').next())
        .filter_map(|value| value.trim().parse().ok())
        .collect()
}

fn product_fields<'a>(name: &'a str, price: &'a str) -> [(&'static str, &'a str); 5] {
    [
        ("name", name),
        ("category", "Furniture"),
        ("price", price),
        ("stock", "5"),
        ("description", "Adjustable LED lamp"),
    ]
}

// ============================================================================
// Dashboard
// ============================================================================

#[tokio::test]
async fn test_dashboard_shows_seed_stats() {
    let mut client = TestClient::admin();
    let resp = client.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Admin Dashboard"));
    assert_eq!(stat_values(&resp.body), vec![3, 3, 2, 2]);
    assert!(resp.body.contains("John Doe"));
}

#[tokio::test]
async fn test_admin_responses_are_not_cached() {
    let mut client = TestClient::admin();
    let resp = client.get("/").await;

    assert_eq!(resp.header("cache-control"), Some("no-store"));
    assert_eq!(resp.header("x-frame-options"), Some("DENY"));
    assert!(resp.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_health() {
    let mut client = TestClient::admin();
    let resp = client.get("/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "ok");
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_products_list_and_filters() {
    let mut client = TestClient::admin();

    let resp = client.get("/products").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Showing 3 of 3 products"));

    let resp = client.get("/products?status=out_of_stock").await;
    assert!(resp.body.contains("Showing 1 of 3 products"));
    assert!(resp.body.contains("Smart Fitness Watch with Heart Rate Monitor"));

    let resp = client.get("/products?q=KEYBOARD").await;
    assert!(resp.body.contains("Showing 1 of 3 products"));
    assert!(resp.body.contains("Gaming Mechanical Keyboard RGB Backlit"));
}

#[tokio::test]
async fn test_create_product() {
    let mut client = TestClient::admin();

    let form = client.get("/products/new").await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains("Add New Product"));

    let resp = client
        .post_form("/products", &product_fields("Desk Lamp", "29.99"))
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/products"));

    let list = client.get("/products").await;
    assert!(list.body.contains("Product added successfully"));
    assert!(list.body.contains("Showing 4 of 4 products"));
    assert!(list.body.contains("Desk Lamp"));
    assert!(list.body.contains("$29.99"));

    let dashboard = client.get("/").await;
    assert_eq!(stat_values(&dashboard.body), vec![4, 3, 2, 3]);
}

#[tokio::test]
async fn test_create_product_rejects_invalid_price() {
    let mut client = TestClient::admin();

    let resp = client
        .post_form("/products", &product_fields("Desk Lamp", "-5"))
        .await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("Please enter a valid price"));
    // The form keeps what was typed
    assert!(resp.body.contains("value=\"Desk Lamp\""));

    let list = client.get("/products").await;
    assert!(list.body.contains("Showing 3 of 3 products"));
}

#[tokio::test]
async fn test_create_product_requires_name() {
    let mut client = TestClient::admin();

    let resp = client
        .post_form("/products", &product_fields("   ", "10"))
        .await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("Product name is required"));
}

#[tokio::test]
async fn test_update_product() {
    let mut client = TestClient::admin();

    let form = client.get("/products/3/edit").await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains("value=\"Gaming Mechanical Keyboard RGB Backlit\""));

    let resp = client
        .post_form(
            "/products/3",
            &[
                ("name", "Compact Keyboard"),
                ("category", "Gaming"),
                ("price", "99"),
                ("stock", "0"),
                ("description", "Tenkeyless board"),
            ],
        )
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let list = client.get("/products").await;
    assert!(list.body.contains("Product updated successfully"));
    assert!(list.body.contains("Compact Keyboard"));
    assert!(!list.body.contains("Gaming Mechanical Keyboard RGB Backlit"));

    let out_of_stock = client.get("/products?status=out_of_stock").await;
    assert!(out_of_stock.body.contains("Showing 2 of 3 products"));
}

#[tokio::test]
async fn test_delete_product_removes_its_inquiries() {
    let mut client = TestClient::admin();

    let confirm = client.get("/products/2/delete").await;
    assert_eq!(confirm.status, StatusCode::OK);
    assert!(confirm.body.contains("Its 1 inquiry will be deleted too."));

    let resp = client.post_form("/products/2/delete", &[]).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/products"));

    let list = client.get("/products").await;
    assert!(list.body.contains("Product deleted successfully"));
    assert!(list.body.contains("Showing 2 of 2 products"));

    let inquiries = client.get("/inquiries").await;
    assert!(inquiries.body.contains("Showing 2 of 2 inquiries"));
    assert!(!inquiries.body.contains("Jane Smith"));
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let mut client = TestClient::admin();

    assert_eq!(client.get("/products/99/edit").await.status, StatusCode::NOT_FOUND);
    assert_eq!(client.get("/products/abc/edit").await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        client.post_form("/products/99/delete", &[]).await.status,
        StatusCode::NOT_FOUND
    );
}

// ============================================================================
// Inquiries
// ============================================================================

#[tokio::test]
async fn test_inquiries_list_and_filters() {
    let mut client = TestClient::admin();

    let resp = client.get("/inquiries").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Showing 3 of 3 inquiries"));

    let resp = client.get("/inquiries?status=pending").await;
    assert!(resp.body.contains("Showing 2 of 3 inquiries"));
    assert!(!resp.body.contains("Jane Smith"));

    // Matches on product name too
    let resp = client.get("/inquiries?q=fitness").await;
    assert!(resp.body.contains("Showing 1 of 3 inquiries"));
    assert!(resp.body.contains("Jane Smith"));
}

#[tokio::test]
async fn test_toggle_inquiry_status_twice() {
    let mut client = TestClient::admin();

    let resp = client.post_form("/inquiries/1/status", &[]).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/inquiries"));

    let list = client.get("/inquiries").await;
    assert!(list.body.contains("Inquiry marked as responded"));
    let dashboard = client.get("/").await;
    assert_eq!(stat_values(&dashboard.body), vec![3, 3, 1, 2]);

    client.post_form("/inquiries/1/status", &[]).await;
    let list = client.get("/inquiries").await;
    assert!(list.body.contains("Inquiry marked as pending"));
    let dashboard = client.get("/").await;
    assert_eq!(stat_values(&dashboard.body), vec![3, 3, 2, 2]);
}

#[tokio::test]
async fn test_set_inquiry_status_explicitly() {
    let mut client = TestClient::admin();

    let resp = client
        .post_form(
            "/inquiries/2/status",
            &[("status", "responded"), ("return_to", "/")],
        )
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/"));

    let resp = client
        .post_form("/inquiries/2/status", &[("return_to", "/\\evil.example")])
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/inquiries"));

    let resp = client
        .post_form("/inquiries/2/status", &[("status", "archived")])
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);

    let resp = client.post_form("/inquiries/42/status", &[]).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_inquiry() {
    let mut client = TestClient::admin();

    let confirm = client.get("/inquiries/3/delete").await;
    assert_eq!(confirm.status, StatusCode::OK);
    assert!(confirm.body.contains("Mike Johnson"));

    let resp = client.post_form("/inquiries/3/delete", &[]).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let list = client.get("/inquiries").await;
    assert!(list.body.contains("Inquiry deleted successfully"));
    assert!(list.body.contains("Showing 2 of 2 inquiries"));

    // Products are untouched
    let products = client.get("/products").await;
    assert!(products.body.contains("Showing 3 of 3 products"));
}

// ============================================================================
// Sessions
// ============================================================================

#[tokio::test]
async fn test_sessions_are_isolated() {
    let mut client = TestClient::admin();
    client.post_form("/products/1/delete", &[]).await;

    let mine = client.get("/products").await;
    assert!(mine.body.contains("Showing 2 of 2 products"));

    let mut other = client.other_visitor();
    let theirs = other.get("/products").await;
    assert!(theirs.body.contains("Showing 3 of 3 products"));
}

#[tokio::test]
async fn test_logout_resets_to_seed() {
    let mut client = TestClient::admin();
    client
        .post_form("/products", &product_fields("Desk Lamp", "29.99"))
        .await;

    let resp = client.post_form("/logout", &[]).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("http://localhost:3000"));

    let list = client.get("/products").await;
    assert!(list.body.contains("Showing 3 of 3 products"));
    assert!(!list.body.contains("Desk Lamp"));
}
