//! Public product handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use rcolly_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::Product;
use crate::state::AppState;

/// Product listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Category slug filter (e.g., `?category=hoodies`).
    pub category: Option<String>,
}

/// `GET /api/products[?category=slug]` - Product listing, newest first.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool())
        .list(query.category.as_deref())
        .await?;

    Ok(Json(products))
}

/// `GET /api/products/{id}` - Product detail, 404 if unknown.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}
