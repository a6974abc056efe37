//! Product domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use rcolly_core::{CategoryId, Sizes};

/// A catalog product, joined with its category name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    /// Unique product ID.
    pub id: rcolly_core::ProductId,
    /// Product display name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Decimal,
    /// Owning category, if assigned.
    pub category_id: Option<CategoryId>,
    /// Category display name (joined), if assigned.
    pub category_name: Option<String>,
    /// URL of the product image (either a bundled asset or an upload).
    pub image_url: Option<String>,
    /// Units in stock. Decremented as a side effect of order creation.
    pub stock_quantity: i32,
    /// Available sizes.
    pub sizes: Sizes,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

/// A low-stock row on the admin dashboard.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LowStockProduct {
    pub name: String,
    pub stock_quantity: i32,
}

/// Fields for creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<String>,
    pub stock_quantity: i32,
    pub sizes: Sizes,
}

/// Fields for updating a product.
///
/// `image_url` is `None` when no replacement image was uploaded, in which
/// case the stored image is left untouched.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<String>,
    pub stock_quantity: i32,
    pub sizes: Sizes,
}
