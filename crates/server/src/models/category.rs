//! Category domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use rcolly_core::CategoryId;

/// A product category.
///
/// Seeded once via `rcolly-cli seed` and immutable thereafter; there are
/// no category management endpoints.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Display name (e.g., "Hoodies").
    pub name: String,
    /// URL slug used by the product filter (e.g., "hoodies").
    pub slug: String,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}
