//! HTTP route handlers for the store API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness check (probes database)
//!
//! # Public API
//! POST /api/register               - Create a shopper account
//! POST /api/login                  - Login, returns {token, user}
//! GET  /api/categories             - All categories
//! GET  /api/products[?category=]   - Product listing, optional slug filter
//! GET  /api/products/{id}          - Product detail
//! POST /api/orders                 - Checkout (guest or authenticated)
//!
//! # Admin API (bearer token + admin flag)
//! GET    /api/admin/products       - All products
//! POST   /api/admin/products       - Create product (multipart, optional image)
//! PUT    /api/admin/products/{id}  - Update product (multipart, optional image)
//! DELETE /api/admin/products/{id}  - Delete product
//! GET    /api/admin/orders         - Orders with items summary
//! GET    /api/admin/orders/{id}    - Order detail with items
//! PUT    /api/admin/orders/{id}    - Update order status
//! GET    /api/admin/stats          - Dashboard aggregation
//! GET    /api/admin/users          - Customers with order stats
//! ```

pub mod admin;
pub mod auth;
pub mod categories;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the public API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/categories", get(categories::index))
        .route("/products", get(products::index))
        .route("/products/{id}", get(products::show))
        .route("/orders", post(orders::create))
}

/// Create the admin API router.
///
/// Each handler takes the `RequireAdmin` extractor, so unauthenticated
/// requests get a 401 and non-admin tokens a 403.
pub fn admin_routes() -> Router<AppState> {
    use axum::routing::put;

    Router::new()
        .route(
            "/products",
            get(admin::products::index).post(admin::products::create),
        )
        .route(
            "/products/{id}",
            put(admin::products::update).delete(admin::products::destroy),
        )
        .route("/orders", get(admin::orders::index))
        .route(
            "/orders/{id}",
            get(admin::orders::show).put(admin::orders::update_status),
        )
        .route("/stats", get(admin::stats::show))
        .route("/users", get(admin::users::index))
}
