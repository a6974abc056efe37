//! Integration tests for the admin API.
//!
//! These tests require:
//! - A running `PostgreSQL` database, migrated and seeded
//! - The server running (cargo run -p rcolly-server)
//! - `ADMIN_PASSWORD` set to the seeded admin password
//!
//! Run with: cargo test -p rcolly-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use rcolly_integration_tests::{admin_token, base_url, client, login, register_fresh_user};

// ============================================================================
// Access Control Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_admin_routes_require_token() {
    let client = client();

    for path in ["products", "orders", "stats", "users"] {
        let resp = client
            .get(format!("{}/api/admin/{path}", base_url()))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "path: {path}");
    }
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_admin_routes_reject_customers() {
    let client = client();
    let (username, _, password) = register_fresh_user(&client).await;
    let token = login(&client, &username, &password).await;

    let resp = client
        .get(format!("{}/api/admin/stats", base_url()))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_garbage_token_is_401() {
    let client = client();

    let resp = client
        .get(format!("{}/api/admin/orders", base_url()))
        .bearer_auth("not.a.token")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Dashboard Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server, database, and ADMIN_PASSWORD"]
async fn test_stats_shape() {
    let client = client();
    let token = admin_token(&client).await;

    let resp = client
        .get(format!("{}/api/admin/stats", base_url()))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to get stats");

    assert_eq!(resp.status(), StatusCode::OK);

    let stats: Value = resp.json().await.expect("Failed to parse response");
    assert!(stats["totalSales"].is_number());
    assert!(stats["totalOrders"].is_i64());
    assert!(stats["lowStockProducts"].is_array());
    assert!(stats["recentOrders"].is_array());
    assert!(stats["totalUsers"].is_i64());
}

#[tokio::test]
#[ignore = "Requires running server, database, and ADMIN_PASSWORD"]
async fn test_customer_listing_excludes_admin() {
    let client = client();
    let token = admin_token(&client).await;

    let resp = client
        .get(format!("{}/api/admin/users", base_url()))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to list users");

    assert_eq!(resp.status(), StatusCode::OK);

    let users: Value = resp.json().await.expect("Failed to parse response");
    for user in users.as_array().expect("array") {
        assert_ne!(user["username"], json!("admin"));
        assert!(user["order_count"].is_i64());
    }
}

// ============================================================================
// Product Management Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server, database, and ADMIN_PASSWORD"]
async fn test_product_create_update_delete() {
    let client = client();
    let token = admin_token(&client).await;

    // Create via multipart, no image
    let form = reqwest::multipart::Form::new()
        .text("name", "Integration Test Cap")
        .text("description", "Created by an integration test")
        .text("price", "99.50")
        .text("stockQuantity", "5")
        .text("sizes", "S,M,L");

    let resp = client
        .post(format!("{}/api/admin/products", base_url()))
        .bearer_auth(&token)
        .multipart(form)
        .send()
        .await
        .expect("Failed to create product");

    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("product id");

    // Update without an image keeps the stored image untouched
    let form = reqwest::multipart::Form::new()
        .text("name", "Integration Test Cap v2")
        .text("price", "89.00")
        .text("stockQuantity", "7")
        .text("sizes", "S,M");

    let resp = client
        .put(format!("{}/api/admin/products/{id}", base_url()))
        .bearer_auth(&token)
        .multipart(form)
        .send()
        .await
        .expect("Failed to update product");

    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/api/products/{id}", base_url()))
        .send()
        .await
        .expect("Failed to get product");
    let product: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(product["name"], json!("Integration Test Cap v2"));
    assert_eq!(product["stock_quantity"], json!(7));

    // Delete, then the public detail is gone
    let resp = client
        .delete(format!("{}/api/admin/products/{id}", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/api/products/{id}", base_url()))
        .send()
        .await
        .expect("Failed to get deleted product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running server, database, and ADMIN_PASSWORD"]
async fn test_product_create_missing_name() {
    let client = client();
    let token = admin_token(&client).await;

    let form = reqwest::multipart::Form::new()
        .text("price", "10.00")
        .text("stockQuantity", "1");

    let resp = client
        .post(format!("{}/api/admin/products", base_url()))
        .bearer_auth(token)
        .multipart(form)
        .send()
        .await
        .expect("Failed to send create");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Order Management Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server, database, and ADMIN_PASSWORD"]
async fn test_order_listing_and_status_update() {
    let client = client();
    let token = admin_token(&client).await;

    // Place an order so the listing is non-empty
    let resp = client
        .get(format!("{}/api/products", base_url()))
        .send()
        .await
        .expect("Failed to list products");
    let products: Value = resp.json().await.expect("Failed to parse response");
    let product = &products.as_array().expect("array")[0];

    let resp = client
        .post(format!("{}/api/orders", base_url()))
        .json(&json!({
            "customerName": "Status Tester",
            "customerEmail": "status-it@example.com",
            "customerAddress": "2 Test Lane",
            "items": [{
                "productId": product["id"],
                "quantity": 1,
                "size": "L",
                "price": product["price"],
            }],
            "totalAmount": product["price"],
            "paymentMethod": "credit-card",
        }))
        .send()
        .await
        .expect("Failed to place order");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Value = resp.json().await.expect("Failed to parse response");
    let order_id = created["orderId"].as_i64().expect("order id");

    // Listing includes the items summary
    let resp = client
        .get(format!("{}/api/admin/orders", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to list orders");
    assert_eq!(resp.status(), StatusCode::OK);

    let orders: Value = resp.json().await.expect("Failed to parse response");
    let listed = orders
        .as_array()
        .expect("array")
        .iter()
        .find(|o| o["id"].as_i64() == Some(order_id))
        .expect("created order is listed");
    assert_eq!(listed["status"], json!("confirmed"));
    assert!(listed["items_summary"].as_str().expect("summary").contains("x1"));

    // Detail carries the line items
    let resp = client
        .get(format!("{}/api/admin/orders/{order_id}", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to get order");
    assert_eq!(resp.status(), StatusCode::OK);

    let detail: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(detail["items"].as_array().expect("items").len(), 1);

    // Status moves through the lifecycle
    let resp = client
        .put(format!("{}/api/admin/orders/{order_id}", base_url()))
        .bearer_auth(&token)
        .json(&json!({ "status": "shipped" }))
        .send()
        .await
        .expect("Failed to update status");
    assert_eq!(resp.status(), StatusCode::OK);

    // Unknown status is rejected before touching the database
    let resp = client
        .put(format!("{}/api/admin/orders/{order_id}", base_url()))
        .bearer_auth(&token)
        .json(&json!({ "status": "teleported" }))
        .send()
        .await
        .expect("Failed to send bad status");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running server, database, and ADMIN_PASSWORD"]
async fn test_missing_order_is_404() {
    let client = client();
    let token = admin_token(&client).await;

    let resp = client
        .get(format!("{}/api/admin/orders/999999", base_url()))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to get order");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
