//! Integration tests for public catalog browsing.
//!
//! These tests require:
//! - A running `PostgreSQL` database, migrated and seeded
//! - The server running (cargo run -p rcolly-server)
//!
//! Run with: cargo test -p rcolly-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::Value;

use rcolly_integration_tests::{base_url, client};

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_health_endpoints() {
    let client = client();

    let resp = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to get health");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/health/ready", base_url()))
        .send()
        .await
        .expect("Failed to get readiness");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_categories_list() {
    let client = client();

    let resp = client
        .get(format!("{}/api/categories", base_url()))
        .send()
        .await
        .expect("Failed to list categories");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse response");
    let categories = body.as_array().expect("categories is an array");
    assert!(!categories.is_empty(), "seeded categories are present");

    for category in categories {
        assert!(category["name"].is_string());
        assert!(category["slug"].is_string());
    }
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_products_list_and_category_filter() {
    let client = client();

    let resp = client
        .get(format!("{}/api/products", base_url()))
        .send()
        .await
        .expect("Failed to list products");
    assert_eq!(resp.status(), StatusCode::OK);

    let all: Value = resp.json().await.expect("Failed to parse response");
    let all = all.as_array().expect("products is an array");
    assert!(!all.is_empty(), "seeded products are present");

    let resp = client
        .get(format!("{}/api/products?category=caps", base_url()))
        .send()
        .await
        .expect("Failed to list filtered products");
    assert_eq!(resp.status(), StatusCode::OK);

    let caps: Value = resp.json().await.expect("Failed to parse response");
    let caps = caps.as_array().expect("filtered products is an array");
    assert!(caps.len() <= all.len());
    for product in caps {
        assert_eq!(product["category_name"], Value::String("Caps".to_string()));
    }
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_product_detail() {
    let client = client();

    let resp = client
        .get(format!("{}/api/products", base_url()))
        .send()
        .await
        .expect("Failed to list products");
    let products: Value = resp.json().await.expect("Failed to parse response");
    let first = &products.as_array().expect("array")[0];
    let id = first["id"].as_i64().expect("product id");

    let resp = client
        .get(format!("{}/api/products/{id}", base_url()))
        .send()
        .await
        .expect("Failed to get product");

    assert_eq!(resp.status(), StatusCode::OK);

    let product: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(product["id"], first["id"]);
    assert!(product["price"].is_number());
    assert!(product["sizes"].is_string());
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_missing_product_is_404() {
    let client = client();

    let resp = client
        .get(format!("{}/api/products/999999", base_url()))
        .send()
        .await
        .expect("Failed to get product");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], Value::String("Product not found".to_string()));
}
