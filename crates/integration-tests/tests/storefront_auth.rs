//! Integration tests for registration and login.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p rcolly-server)
//!
//! Run with: cargo test -p rcolly-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use rcolly_integration_tests::{base_url, client, login, register_fresh_user, unique_credentials};

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_register_then_login() {
    let client = client();
    let (username, email, password) = register_fresh_user(&client).await;

    let resp = client
        .post(format!("{}/api/login", base_url()))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .expect("Failed to log in");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["username"], json!(username));
    assert_eq!(body["user"]["email"], json!(email));
    assert_eq!(body["user"]["is_admin"], json!(false));
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_duplicate_username_is_rejected() {
    let client = client();
    let (username, _, password) = register_fresh_user(&client).await;

    // Same username, different email
    let (_, other_email, _) = unique_credentials();
    let resp = client
        .post(format!("{}/api/register", base_url()))
        .json(&json!({
            "username": username,
            "email": other_email,
            "password": password,
        }))
        .send()
        .await
        .expect("Failed to send duplicate registration");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_login_wrong_password() {
    let client = client();
    let (username, _, _) = register_fresh_user(&client).await;

    let resp = client
        .post(format!("{}/api/login", base_url()))
        .json(&json!({ "username": username, "password": "definitely-wrong" }))
        .send()
        .await
        .expect("Failed to send login");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_register_short_password() {
    let client = client();
    let (username, email, _) = unique_credentials();

    let resp = client
        .post(format!("{}/api/register", base_url()))
        .json(&json!({ "username": username, "email": email, "password": "short" }))
        .send()
        .await
        .expect("Failed to send registration");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_register_invalid_email() {
    let client = client();
    let (username, _, password) = unique_credentials();

    let resp = client
        .post(format!("{}/api/register", base_url()))
        .json(&json!({ "username": username, "email": "nope", "password": password }))
        .send()
        .await
        .expect("Failed to send registration");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_token_works_on_checkout_linking() {
    let client = client();
    let (username, _, password) = register_fresh_user(&client).await;
    let token = login(&client, &username, &password).await;

    // A bearer token must be accepted on requests that optionally read it.
    let resp = client
        .get(format!("{}/api/products", base_url()))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to list products");

    assert_eq!(resp.status(), StatusCode::OK);
}
