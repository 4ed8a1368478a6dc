//! Integration tests for the public storefront.
//!
//! Each test builds a fresh app over the sample catalog and drives it
//! through the full middleware stack.

use axum::http::StatusCode;

use purple_shop_integration_tests::TestClient;

const HEADPHONES: &str = "Premium Wireless Headphones with Noise Cancellation";
const KEYBOARD: &str = "Gaming Mechanical Keyboard RGB Backlit";

fn inquiry_fields<'a>(email: &'a str, message: &'a str) -> [(&'static str, &'a str); 4] {
    [
        ("name", "Ann Lee"),
        ("email", email),
        ("phone", "555-0100"),
        ("message", message),
    ]
}

// ============================================================================
// Health and Middleware
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let mut client = TestClient::storefront();

    let live = client.get("/health").await;
    assert_eq!(live.status, StatusCode::OK);
    assert_eq!(live.body, "ok");

    let ready = client.get("/health/ready").await;
    assert_eq!(ready.status, StatusCode::OK);
}

#[tokio::test]
async fn test_every_response_carries_security_headers() {
    let mut client = TestClient::storefront();

    for path in ["/", "/product/999"] {
        let resp = client.get(path).await;
        assert_eq!(resp.header("x-frame-options"), Some("DENY"), "{path}");
        assert_eq!(resp.header("x-content-type-options"), Some("nosniff"), "{path}");
        assert!(resp.header("content-security-policy").is_some(), "{path}");
        assert!(resp.header("x-request-id").is_some(), "{path}");
    }
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let mut client = TestClient::storefront();
    let resp = client.get("/static/css/main.css").await;
    assert_eq!(resp.status, StatusCode::OK);
}

// ============================================================================
// Pages
// ============================================================================

#[tokio::test]
async fn test_home_shows_featured_products() {
    let mut client = TestClient::storefront();
    let resp = client.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Featured Products"));
    assert!(resp.body.contains(HEADPHONES));
    assert!(resp.body.contains("href=\"/product/1\""));
}

#[tokio::test]
async fn test_about_page() {
    let mut client = TestClient::storefront();
    let resp = client.get("/about").await;
    assert_eq!(resp.status, StatusCode::OK);
}

// ============================================================================
// Product Browser
// ============================================================================

#[tokio::test]
async fn test_browser_lists_whole_catalog_by_default() {
    let mut client = TestClient::storefront();
    let resp = client.get("/products").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Showing 12 of 12 products"));
    assert!(resp.body.contains(HEADPHONES));
    assert!(resp.body.contains(KEYBOARD));
}

#[tokio::test]
async fn test_browser_search_narrows_results() {
    let mut client = TestClient::storefront();
    let resp = client.get("/products?q=keyboard").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Showing 1 of 12 products"));
    assert!(resp.body.contains(KEYBOARD));
    assert!(!resp.body.contains(HEADPHONES));
}

#[tokio::test]
async fn test_browser_category_filter() {
    let mut client = TestClient::storefront();
    let resp = client.get("/products?category=furniture").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("in Furniture"));
    assert!(resp.body.contains("Ergonomic Office Chair with Lumbar Support"));
    assert!(!resp.body.contains(HEADPHONES));
}

#[tokio::test]
async fn test_browser_unknown_parameters_fall_back() {
    let mut client = TestClient::storefront();
    let resp = client.get("/products?category=toys&sort=cheapest").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Showing 12 of 12 products"));
}

#[tokio::test]
async fn test_browser_empty_state() {
    let mut client = TestClient::storefront();
    let resp = client.get("/products?q=zzzz-no-match").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Showing 0 of 12 products"));
    assert!(resp.body.contains("No products found"));
    assert!(resp.body.contains("Clear All Filters"));
}

// ============================================================================
// Product Detail
// ============================================================================

#[tokio::test]
async fn test_product_page_renders_details() {
    let mut client = TestClient::storefront();
    let resp = client.get("/product/1").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains(HEADPHONES));
    assert!(resp.body.contains("Key Features"));
    assert!(resp.body.contains("Active Noise Cancellation"));
    assert!(resp.body.contains("http://localhost:3000/product/1"));
}

#[tokio::test]
async fn test_unknown_or_malformed_product_is_not_found() {
    let mut client = TestClient::storefront();

    for path in ["/product/999", "/product/abc", "/product/-1"] {
        let resp = client.get(path).await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND, "{path}");
    }

    let resp = client
        .post_form("/product/999/inquiry", &inquiry_fields("ann@example.com", "Hi"))
        .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Inquiries
// ============================================================================

#[tokio::test]
async fn test_inquiry_with_missing_fields_is_rejected() {
    let mut client = TestClient::storefront();
    let resp = client
        .post_form("/product/1/inquiry", &[("name", "Ann Lee"), ("email", "")])
        .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("All fields are required"));
    assert!(resp.body.contains("class=\"flash flash-error\""));
    // Submitted values are kept in the form
    assert!(resp.body.contains("value=\"Ann Lee\""));
}

#[tokio::test]
async fn test_inquiry_with_bad_email_is_rejected() {
    let mut client = TestClient::storefront();
    let resp = client
        .post_form(
            "/product/1/inquiry",
            &inquiry_fields("not-an-email", "Does it fold?"),
        )
        .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("Please enter a valid email address"));
}

#[tokio::test]
async fn test_valid_inquiry_redirects_with_confirmation() {
    let mut client = TestClient::storefront();
    let resp = client
        .post_form(
            "/product/3/inquiry",
            &inquiry_fields("ann@example.com", "Does it fit a full-frame body?"),
        )
        .await;

    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/product/3"));

    let page = client.get("/product/3").await;
    assert!(page.body.contains("Inquiry Sent!"));

    // The confirmation is shown once
    let again = client.get("/product/3").await;
    assert!(!again.body.contains("Inquiry Sent!"));
}

// ============================================================================
// Favorites
// ============================================================================

#[tokio::test]
async fn test_favorite_toggles_per_visitor() {
    let mut client = TestClient::storefront();

    let resp = client.post_form("/product/2/favorite", &[]).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/product/2"));

    let page = client.get("/product/2").await;
    assert!(page.body.contains("Added to favorites"));
    assert!(page.body.contains("Liked"));

    // Another visitor has not liked it
    let mut other = client.other_visitor();
    let page = other.get("/product/2").await;
    assert!(!page.body.contains("Liked"));

    client.post_form("/product/2/favorite", &[]).await;
    let page = client.get("/product/2").await;
    assert!(page.body.contains("Removed from favorites"));
    assert!(!page.body.contains("Liked"));
}
