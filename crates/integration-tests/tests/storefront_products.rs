//! Integration tests for the catalog read endpoints.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use perfume_shop_core::Catalog;
use perfume_shop_integration_tests::TestClient;

#[tokio::test]
async fn health_returns_ok() {
    let mut client = TestClient::new();
    let response = client.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "ok");
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let mut client = TestClient::new();
    let response = client.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["message"], "Welcome to the Perfume Shop API");
}

#[tokio::test]
async fn product_listing_is_in_catalog_order() {
    let mut client = TestClient::new();
    let response = client.get("/products").await;
    assert_eq!(response.status, StatusCode::OK);

    let products = response.json();
    let ids: Vec<i64> = products
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [1, 2, 3, 4]);
}

#[tokio::test]
async fn product_detail_returns_matching_product() {
    let mut client = TestClient::new();
    let response = client.get("/products/2").await;
    assert_eq!(response.status, StatusCode::OK);

    let product = response.json();
    assert_eq!(product["id"], 2);
    assert_eq!(product["name"], "Jasmine Noir Eau de Parfum");
    assert_eq!(product["sale_price"], 15000);
    assert_eq!(product["category"], "Floral");
}

#[tokio::test]
async fn unknown_product_is_404_with_json_error() {
    let mut client = TestClient::new();
    let response = client.get("/products/999").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.json()["error"].is_string());
}

#[tokio::test]
async fn category_listing_returns_names_in_order() {
    let mut client = TestClient::new();
    let response = client.get("/categories").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), serde_json::json!(["Floral", "Woody"]));
}

#[tokio::test]
async fn category_lookup_is_case_insensitive() {
    let mut client = TestClient::new();
    for name in ["Floral", "floral", "FLORAL"] {
        let response = client.get(&format!("/categories/{name}")).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json().as_array().unwrap().len(), 2);
    }
}

#[tokio::test]
async fn unknown_category_is_empty_list_not_error() {
    let mut client = TestClient::new();
    let response = client.get("/categories/citrus").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), serde_json::json!([]));
}

#[tokio::test]
async fn empty_catalog_serves_empty_listings() {
    let mut client = TestClient::with_catalog(Catalog::default());

    let response = client.get("/products").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), serde_json::json!([]));

    let response = client.get("/products/1").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = client.get("/categories").await;
    assert_eq!(response.json(), serde_json::json!([]));
}
