//! Integration test harness for the perfume shop storefront.
//!
//! Tests drive the real router in-process via `tower::ServiceExt::oneshot`
//! rather than a running server, so they need no external setup. The harness
//! carries the session cookie across requests, which is what makes cart flows
//! testable: every request after the first mutation replays the cookie the
//! session layer handed out.
//!
//! # Test Categories
//!
//! - `storefront_products` - Catalog read endpoints
//! - `storefront_cart` - Session-scoped cart flows
//! - `storefront_order` - Order preview derivation

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use perfume_shop_core::{Catalog, CatalogDocument};
use perfume_shop_storefront::config::StorefrontConfig;
use perfume_shop_storefront::routes;
use perfume_shop_storefront::state::AppState;

/// Catalog fixture used across the integration tests.
///
/// Product 1 (5800) and product 2 (15000) match the canonical order preview
/// example; product 4 (25000) exists to hit the free-shipping threshold
/// exactly with quantity 2.
#[must_use]
pub fn test_catalog() -> Catalog {
    let document: CatalogDocument = serde_json::from_str(
        r#"{
            "Floral": [
                {"id": 1, "name": "Rose Petal Eau de Toilette", "sale_price": 5800, "original_price": 7000},
                {"id": 2, "name": "Jasmine Noir Eau de Parfum", "sale_price": 15000, "original_price": 15000}
            ],
            "Woody": [
                {"id": 3, "name": "Cedarwood Reserve", "sale_price": 32000, "original_price": 40000},
                {"id": 4, "name": "Sandalwood Veil", "sale_price": 25000, "original_price": 25000}
            ]
        }"#,
    )
    .unwrap();
    Catalog::from(document)
}

fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        // Unused: tests hand the catalog to AppState directly
        catalog_path: PathBuf::from("unused"),
    }
}

/// A response captured from the router.
pub struct TestResponse {
    pub status: StatusCode,
    body: Vec<u8>,
}

impl TestResponse {
    /// Parse the response body as JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    /// The response body as text.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

/// In-process client for the storefront app, carrying the session cookie.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClient {
    /// Client over the standard test catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(test_catalog())
    }

    /// Client over a caller-provided catalog (e.g. an empty one).
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        let state = AppState::new(test_config(), catalog);
        Self {
            app: routes::app(state),
            cookie: None,
        }
    }

    /// Issue a GET request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self.builder("GET", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    /// Issue a POST request with a JSON body.
    pub async fn post(&mut self, uri: &str, body: &Value) -> TestResponse {
        let request = self
            .builder("POST", uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Issue a POST request with no body.
    pub async fn post_empty(&mut self, uri: &str) -> TestResponse {
        let request = self.builder("POST", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    fn builder(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie.clone());
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();

        // Adopt the session cookie the first time the session layer hands
        // one out (the cookie value before the first ';').
        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let value = set_cookie.to_str().unwrap();
            let pair = value.split(';').next().unwrap().to_string();
            self.cookie = Some(pair);
        }

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        TestResponse { status, body }
    }
}
