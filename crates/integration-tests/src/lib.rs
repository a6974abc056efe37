//! Integration tests for the Rcolly store.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations + seed
//! cargo run -p rcolly-cli -- migrate
//! ADMIN_PASSWORD=... cargo run -p rcolly-cli -- seed
//!
//! # Start the server
//! cargo run -p rcolly-server
//!
//! # Run integration tests
//! cargo test -p rcolly-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `BASE_URL` - Server base URL (default: `http://localhost:3000`)
//! - `ADMIN_PASSWORD` - Password of the seeded admin account

#![allow(clippy::unwrap_used, clippy::expect_used)]

use reqwest::Client;
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// A plain HTTP client.
#[must_use]
pub fn client() -> Client {
    Client::new()
}

/// Generate credentials that cannot collide with earlier test runs.
#[must_use]
pub fn unique_credentials() -> (String, String, String) {
    let tag = Uuid::new_v4().simple().to_string();
    (
        format!("it-user-{tag}"),
        format!("it-{tag}@example.com"),
        format!("it-password-{tag}"),
    )
}

/// Register a fresh account and return its (username, email, password).
///
/// # Panics
///
/// Panics if registration does not return 201.
pub async fn register_fresh_user(client: &Client) -> (String, String, String) {
    let (username, email, password) = unique_credentials();

    let resp = client
        .post(format!("{}/api/register", base_url()))
        .json(&json!({
            "username": username,
            "email": email,
            "password": password,
        }))
        .send()
        .await
        .expect("Failed to register");

    assert_eq!(resp.status(), 201, "registration should succeed");
    (username, email, password)
}

/// Log in and return the bearer token.
///
/// # Panics
///
/// Panics if login fails or the response carries no token.
pub async fn login(client: &Client, username: &str, password: &str) -> String {
    let resp = client
        .post(format!("{}/api/login", base_url()))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .expect("Failed to log in");

    assert_eq!(resp.status(), 200, "login should succeed");

    let body: Value = resp.json().await.expect("Failed to parse login response");
    body["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// Log in as the seeded admin account and return the bearer token.
///
/// # Panics
///
/// Panics if `ADMIN_PASSWORD` is unset or login fails.
pub async fn admin_token(client: &Client) -> String {
    let password = std::env::var("ADMIN_PASSWORD")
        .expect("ADMIN_PASSWORD must be set for admin integration tests");
    login(client, "admin", &password).await
}
