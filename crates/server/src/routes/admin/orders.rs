//! Admin order management.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use rcolly_core::{OrderId, OrderStatus};

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::order::{OrderSummary, OrderWithItems};
use crate::state::AppState;

/// `GET /api/admin/orders` - All orders with an items summary, newest
/// first.
pub async fn index(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<Vec<OrderSummary>>> {
    let orders = OrderRepository::new(state.pool()).list_with_summary().await?;
    Ok(Json(orders))
}

/// `GET /api/admin/orders/{id}` - One order with its line items.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    _admin: RequireAdmin,
) -> Result<Json<OrderWithItems>> {
    let order = OrderRepository::new(state.pool())
        .get_with_items(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok(Json(order))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// `PUT /api/admin/orders/{id}` - Update an order's status.
///
/// The status string must be one of the known lifecycle states; anything
/// else is a 400 before the database is touched.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    _admin: RequireAdmin,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<Value>> {
    let status: OrderStatus = body
        .status
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid status: {}", body.status)))?;

    OrderRepository::new(state.pool()).update_status(id, status).await?;

    tracing::info!(order_id = %id, status = %status, "order status updated");

    Ok(Json(json!({ "message": "Order status updated successfully" })))
}
