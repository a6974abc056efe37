//! Order repository for database operations.
//!
//! Order creation is the one multi-statement write in the system: the
//! order row, its line items, and the per-product stock decrements all
//! commit or roll back together.

use rust_decimal::Decimal;
use sqlx::PgPool;

use rcolly_core::{OrderId, OrderStatus};

use super::RepositoryError;
use crate::models::order::{
    NewOrder, Order, OrderItemDetail, OrderSummary, OrderWithItems, RecentOrder,
};

/// Sales totals for the admin dashboard.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct SalesTotals {
    /// Sum of all order totals; `None` when there are no orders.
    pub total_sales: Option<Decimal>,
    /// Number of orders placed.
    pub total_orders: i64,
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create an order with its line items and decrement product stock.
    ///
    /// The whole sequence runs in one transaction: a failed item insert or
    /// stock update rolls back the order row and every earlier decrement,
    /// so an order can never exist with a partial item list and stock can
    /// never be adjusted for an order that was not recorded. Orders are
    /// created as [`OrderStatus::Confirmed`] regardless of payment method;
    /// payment is simulated client-side.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails. The
    /// transaction is rolled back on drop.
    pub async fn create(&self, order: &NewOrder) -> Result<OrderId, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let order_id: OrderId = sqlx::query_scalar(
            r"
            INSERT INTO orders (user_id, customer_name, customer_email, customer_address,
                                total_amount, payment_method, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            ",
        )
        .bind(order.user_id)
        .bind(&order.customer_name)
        .bind(&order.customer_email)
        .bind(&order.customer_address)
        .bind(order.total_amount)
        .bind(&order.payment_method)
        .bind(OrderStatus::Confirmed)
        .fetch_one(&mut *tx)
        .await?;

        for item in &order.items {
            sqlx::query(
                r"
                INSERT INTO order_items (order_id, product_id, quantity, size, price)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(&item.size)
            .bind(item.price)
            .execute(&mut *tx)
            .await?;

            sqlx::query(
                "UPDATE products SET stock_quantity = stock_quantity - $1 WHERE id = $2",
            )
            .bind(item.quantity)
            .bind(item.product_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(order_id)
    }

    /// List all orders with an aggregated items summary, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_with_summary(&self) -> Result<Vec<OrderSummary>, RepositoryError> {
        let orders = sqlx::query_as::<_, OrderSummary>(
            r"
            SELECT o.id, o.user_id, o.customer_name, o.customer_email, o.customer_address,
                   o.total_amount, o.payment_method, o.status, o.created_at,
                   STRING_AGG(p.name || ' (Size: ' || COALESCE(oi.size, '-') || ') x' || oi.quantity, ', ') AS items_summary,
                   COUNT(oi.id) AS item_count
            FROM orders o
            LEFT JOIN order_items oi ON o.id = oi.order_id
            LEFT JOIN products p ON oi.product_id = p.id
            GROUP BY o.id
            ORDER BY o.created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Get an order with its line items.
    ///
    /// Returns `None` if no such order exists. Items reference products by
    /// a LEFT JOIN, so line items survive product deletion (with a null
    /// product name).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get_with_items(
        &self,
        id: OrderId,
    ) -> Result<Option<OrderWithItems>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, customer_name, customer_email, customer_address,
                   total_amount, payment_method, status, created_at
            FROM orders
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, OrderItemDetail>(
            r"
            SELECT oi.id, oi.order_id, oi.product_id, oi.quantity, oi.size, oi.price,
                   p.name, p.image_url
            FROM order_items oi
            LEFT JOIN products p ON oi.product_id = p.id
            WHERE oi.order_id = $1
            ORDER BY oi.id
            ",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some(OrderWithItems { order, items }))
    }

    /// Update an order's status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such order exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE orders SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Total sales and order count for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn totals(&self) -> Result<SalesTotals, RepositoryError> {
        let totals = sqlx::query_as::<_, SalesTotals>(
            "SELECT SUM(total_amount) AS total_sales, COUNT(*) AS total_orders FROM orders",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(totals)
    }

    /// The most recent orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn recent(&self, limit: i64) -> Result<Vec<RecentOrder>, RepositoryError> {
        let orders = sqlx::query_as::<_, RecentOrder>(
            r"
            SELECT id, customer_name, total_amount, created_at
            FROM orders
            ORDER BY created_at DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }
}
