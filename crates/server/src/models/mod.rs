//! Domain models for the store.
//!
//! These derive `sqlx::FromRow` for the repository layer and `Serialize`
//! for the JSON API, so the wire format stays the database's snake_case
//! column names.

pub mod category;
pub mod order;
pub mod product;
pub mod user;

pub use category::Category;
pub use order::{NewOrder, NewOrderItem, Order, OrderItemDetail, OrderSummary, OrderWithItems, RecentOrder};
pub use product::{LowStockProduct, NewProduct, Product, ProductUpdate};
pub use user::{CustomerSummary, User};
