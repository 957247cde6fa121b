//! Integration tests for the order preview endpoint.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use perfume_shop_integration_tests::TestClient;
use serde_json::json;

#[tokio::test]
async fn preview_on_empty_cart_is_a_validation_error() {
    let mut client = TestClient::new();
    let response = client.get("/order/preview").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["error"].is_string());
}

#[tokio::test]
async fn preview_computes_the_canonical_breakdown() {
    // {product 1: 5800 x 2, product 2: 15000 x 1}
    let mut client = TestClient::new();
    client
        .post("/cart/add", &json!({"product_id": 1, "quantity": 2}))
        .await;
    client
        .post("/cart/add", &json!({"product_id": 2, "quantity": 1}))
        .await;

    let response = client.get("/order/preview").await;
    assert_eq!(response.status, StatusCode::OK);

    let preview = response.json();
    assert_eq!(preview["subtotal_price"], 26_600);
    assert_eq!(preview["total_quantity"], 3);
    assert_eq!(preview["shipping_fee"], 3_000);
    assert_eq!(preview["final_total_price"], 29_600);

    let items = preview["order_items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["total_price"], 11_600);
    assert_eq!(items[1]["id"], 2);
    assert_eq!(items[1]["total_price"], 15_000);
}

#[tokio::test]
async fn shipping_is_free_at_exact_threshold() {
    // product 4: 25000 x 2 = 50000 exactly
    let mut client = TestClient::new();
    client
        .post("/cart/add", &json!({"product_id": 4, "quantity": 2}))
        .await;

    let preview = client.get("/order/preview").await.json();
    assert_eq!(preview["subtotal_price"], 50_000);
    assert_eq!(preview["shipping_fee"], 0);
    assert_eq!(preview["final_total_price"], 50_000);
}

#[tokio::test]
async fn preview_does_not_consume_the_cart() {
    let mut client = TestClient::new();
    client
        .post("/cart/add", &json!({"product_id": 1, "quantity": 2}))
        .await;

    let first = client.get("/order/preview").await.json();
    let second = client.get("/order/preview").await.json();
    assert_eq!(first, second);

    let cart = client.get("/cart").await.json();
    assert_eq!(cart["1"]["quantity"], 2);
}

#[tokio::test]
async fn preview_after_clear_is_a_validation_error() {
    let mut client = TestClient::new();
    client.post("/cart/add", &json!({"product_id": 1})).await;
    client.post_empty("/cart/clear").await;

    let response = client.get("/order/preview").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
