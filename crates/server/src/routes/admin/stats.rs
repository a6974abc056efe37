//! Admin dashboard statistics.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::db::{OrderRepository, ProductRepository, UserRepository};
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::order::RecentOrder;
use crate::models::product::LowStockProduct;
use crate::state::AppState;

/// Number of recent orders shown on the dashboard.
const RECENT_ORDERS: i64 = 5;

/// Dashboard statistics payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_sales: Decimal,
    pub total_orders: i64,
    pub low_stock_products: Vec<LowStockProduct>,
    pub recent_orders: Vec<RecentOrder>,
    pub total_users: i64,
}

/// `GET /api/admin/stats` - Aggregated dashboard numbers.
pub async fn show(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<StatsResponse>> {
    let orders = OrderRepository::new(state.pool());
    let products = ProductRepository::new(state.pool());
    let users = UserRepository::new(state.pool());

    let totals = orders.totals().await?;
    let low_stock = products
        .low_stock(state.config().low_stock_threshold)
        .await?;
    let recent = orders.recent(RECENT_ORDERS).await?;
    let total_users = users.count_customers().await?;

    Ok(Json(StatsResponse {
        total_sales: totals.total_sales.unwrap_or_default(),
        total_orders: totals.total_orders,
        low_stock_products: low_stock,
        recent_orders: recent,
        total_users,
    }))
}
