//! Integration tests for PurpleShop.
//!
//! Both apps are driven in-process: each request goes through the full
//! router (sessions, request IDs, security headers) via
//! [`tower::ServiceExt::oneshot`], so no server or port is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p purple-shop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront` - Browsing, product pages, inquiries and favorites
//! - `admin` - Dashboard, product and inquiry management, session reset

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use purple_shop_admin::{config::AdminConfig, state::AppState as AdminState};
use purple_shop_core::sample;
use purple_shop_storefront::{config::StorefrontConfig, state::AppState as StorefrontState};

/// Storefront router over the sample catalog.
#[must_use]
pub fn storefront_app() -> Router {
    purple_shop_storefront::app(StorefrontState::new(
        StorefrontConfig::default(),
        sample::catalog(),
    ))
}

/// Admin router seeded with the sample store.
#[must_use]
pub fn admin_app() -> Router {
    purple_shop_admin::app(AdminState::new(AdminConfig::default(), sample::admin_store()))
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header(header::LOCATION.as_str())
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// A browser stand-in that keeps the session cookie between requests.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    #[must_use]
    pub const fn new(app: Router) -> Self {
        Self { app, cookie: None }
    }

    #[must_use]
    pub fn storefront() -> Self {
        Self::new(storefront_app())
    }

    #[must_use]
    pub fn admin() -> Self {
        Self::new(admin_app())
    }

    /// Another visitor of the same running app, starting without a cookie.
    #[must_use]
    pub fn other_visitor(&self) -> Self {
        Self::new(self.app.clone())
    }

    /// Send a GET request.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, Body::empty()).await
    }

    /// Send a urlencoded form POST.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");
        self.send(Method::POST, uri, Body::from(body)).await
    }

    async fn send(&mut self, method: Method, uri: &str, body: Body) -> TestResponse {
        let mut request = Request::builder().method(method.clone()).uri(uri);
        if method == Method::POST {
            request = request.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        }
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let request = request.body(body).expect("Failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        self.remember_cookie(response.headers());

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    fn remember_cookie(&mut self, headers: &HeaderMap) {
        let Some(set_cookie) = headers
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
        else {
            return;
        };

        let pair = set_cookie.split(';').next().unwrap_or_default().trim();
        let cleared = pair.split_once('=').is_none_or(|(_, value)| value.is_empty());
        self.cookie = if cleared { None } else { Some(pair.to_string()) };
    }
}
