//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use rcolly_core::{Email, OrderId, OrderItemId, OrderStatus, ProductId, UserId};

/// A placed order.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Account the order is linked to, when checkout carried a valid token.
    pub user_id: Option<UserId>,
    /// Free-text customer name from the checkout form.
    pub customer_name: String,
    /// Checkout contact email.
    pub customer_email: String,
    /// Free-text delivery address.
    pub customer_address: String,
    /// Total amount as submitted by the client.
    pub total_amount: Decimal,
    /// Payment method label (e.g., "credit-card").
    pub payment_method: String,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

/// An order row on the admin list, with an aggregated items summary.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderSummary {
    pub id: OrderId,
    pub user_id: Option<UserId>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_address: String,
    pub total_amount: Decimal,
    pub payment_method: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    /// "Name (Size: M) x2, ..." over the order's items, if any.
    pub items_summary: Option<String>,
    /// Number of line items.
    pub item_count: i64,
}

/// A line item on the admin order detail, joined with product name/image.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItemDetail {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: Option<ProductId>,
    pub quantity: i32,
    pub size: Option<String>,
    /// Unit price frozen at time of purchase.
    pub price: Decimal,
    /// Product name (joined); `None` if the product was since deleted.
    pub name: Option<String>,
    /// Product image (joined).
    pub image_url: Option<String>,
}

/// An order with its line items, as returned by the admin detail endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItemDetail>,
}

/// A recent-orders row on the admin dashboard.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecentOrder {
    pub id: OrderId,
    pub customer_name: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Validated fields for creating an order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Option<UserId>,
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_address: String,
    pub total_amount: Decimal,
    pub payment_method: String,
    pub items: Vec<NewOrderItem>,
}

/// A validated checkout line item.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub quantity: i32,
    pub size: Option<String>,
    /// Unit price as quoted to the shopper.
    pub price: Decimal,
}
