//! Admin customer listing.

use axum::{Json, extract::State};

use crate::db::UserRepository;
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::user::CustomerSummary;
use crate::state::AppState;

/// `GET /api/admin/users` - Registered customers with their order count
/// and lifetime spend. Admin accounts are excluded.
pub async fn index(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<Vec<CustomerSummary>>> {
    let customers = UserRepository::new(state.pool()).list_customers().await?;
    Ok(Json(customers))
}
