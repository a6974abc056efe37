//! Checkout handler.

use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rcolly_core::{Email, OrderId, ProductId, UserId};

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::middleware::OptionalUser;
use crate::models::order::{NewOrder, NewOrderItem};
use crate::state::AppState;

/// Default payment method when the client omits one.
const DEFAULT_PAYMENT_METHOD: &str = "credit-card";

/// Checkout request body.
///
/// Fields are optional so an incomplete submission gets the API's own
/// "Missing required fields" 400 instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_address: Option<String>,
    pub items: Option<Vec<OrderItemRequest>>,
    pub total_amount: Option<Decimal>,
    pub payment_method: Option<String>,
}

/// A checkout line item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: ProductId,
    pub quantity: i32,
    pub size: Option<String>,
    /// Unit price as quoted to the shopper.
    pub price: Decimal,
}

/// Checkout response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: OrderId,
    pub message: String,
}

/// `POST /api/orders` - Place an order.
///
/// Works for guests; when a valid bearer token accompanies the request
/// the order is linked to that account.
pub async fn create(
    State(state): State<AppState>,
    OptionalUser(claims): OptionalUser,
    Json(body): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CreateOrderResponse>)> {
    let order = validate(body, claims.map(|c| c.sub))?;

    let order_id = OrderRepository::new(state.pool()).create(&order).await?;

    tracing::info!(
        order_id = %order_id,
        items = order.items.len(),
        "order created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            order_id,
            message: "Order created successfully".to_string(),
        }),
    ))
}

/// Validate a checkout submission into a [`NewOrder`].
fn validate(body: CreateOrderRequest, user_id: Option<UserId>) -> Result<NewOrder> {
    let (Some(customer_name), Some(customer_email), Some(customer_address), Some(total_amount)) = (
        non_empty(body.customer_name),
        non_empty(body.customer_email),
        non_empty(body.customer_address),
        body.total_amount,
    ) else {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    };

    let items = body.items.unwrap_or_default();
    if items.is_empty() {
        return Err(AppError::BadRequest(
            "Order must contain at least one item".to_string(),
        ));
    }

    let customer_email = Email::parse(&customer_email)
        .map_err(|e| AppError::BadRequest(format!("Invalid customer email: {e}")))?;

    Ok(NewOrder {
        user_id,
        customer_name,
        customer_email,
        customer_address,
        total_amount,
        payment_method: body
            .payment_method
            .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string()),
        items: items
            .into_iter()
            .map(|item| NewOrderItem {
                product_id: item.product_id,
                quantity: item.quantity,
                size: item.size,
                price: item.price,
            })
            .collect(),
    })
}

/// Treat whitespace-only strings as missing.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
