//! Product repository for database operations.

use sqlx::PgPool;

use rcolly_core::ProductId;

use super::RepositoryError;
use crate::models::product::{LowStockProduct, NewProduct, Product, ProductUpdate};

/// Columns selected for a full product row, joined with the category name.
const PRODUCT_COLUMNS: &str = r"
    p.id, p.name, p.description, p.price, p.category_id,
    c.name AS category_name,
    p.image_url, p.stock_quantity, p.sizes, p.created_at
";

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products newest first, optionally filtered by category slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(
        &self,
        category_slug: Option<&str>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = match category_slug {
            Some(slug) => {
                sqlx::query_as::<_, Product>(&format!(
                    r"
                    SELECT {PRODUCT_COLUMNS}
                    FROM products p
                    LEFT JOIN categories c ON p.category_id = c.id
                    WHERE c.slug = $1
                    ORDER BY p.created_at DESC
                    "
                ))
                .bind(slug)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Product>(&format!(
                    r"
                    SELECT {PRODUCT_COLUMNS}
                    FROM products p
                    LEFT JOIN categories c ON p.category_id = c.id
                    ORDER BY p.created_at DESC
                    "
                ))
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(products)
    }

    /// Get a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r"
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            LEFT JOIN categories c ON p.category_id = c.id
            WHERE p.id = $1
            "
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Create a product and return its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (e.g., a
    /// dangling category reference).
    pub async fn create(&self, product: &NewProduct) -> Result<ProductId, RepositoryError> {
        let id: ProductId = sqlx::query_scalar(
            r"
            INSERT INTO products (name, description, price, category_id, image_url, stock_quantity, sizes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            ",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.category_id)
        .bind(&product.image_url)
        .bind(product.stock_quantity)
        .bind(&product.sizes)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Update a product. The stored image is kept when `update.image_url`
    /// is `None`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such product exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET name = $1, description = $2, price = $3, category_id = $4,
                stock_quantity = $5, sizes = $6,
                image_url = COALESCE($7, image_url)
            WHERE id = $8
            ",
        )
        .bind(&update.name)
        .bind(&update.description)
        .bind(update.price)
        .bind(update.category_id)
        .bind(update.stock_quantity)
        .bind(&update.sizes)
        .bind(&update.image_url)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such product exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// List products below the given stock threshold, lowest stock first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn low_stock(
        &self,
        threshold: i32,
    ) -> Result<Vec<LowStockProduct>, RepositoryError> {
        let products = sqlx::query_as::<_, LowStockProduct>(
            r"
            SELECT name, stock_quantity
            FROM products
            WHERE stock_quantity < $1
            ORDER BY stock_quantity ASC
            ",
        )
        .bind(threshold)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }
}
