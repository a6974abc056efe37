//! User domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use rcolly_core::{Email, UserId};

/// A store account (shopper or admin).
///
/// The password hash never leaves the repository layer; this type is safe
/// to serialize into API responses.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// User's email address.
    pub email: Email,
    /// Whether the account can reach the admin endpoints.
    pub is_admin: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// A customer row on the admin users view, with purchase stats.
///
/// Order stats are correlated on the checkout contact email, since guest
/// orders carry no user reference.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CustomerSummary {
    pub id: UserId,
    pub username: String,
    pub email: Email,
    pub created_at: DateTime<Utc>,
    /// Number of orders placed with this account's email.
    pub order_count: i64,
    /// Total amount spent across those orders, if any.
    pub total_spent: Option<Decimal>,
}
