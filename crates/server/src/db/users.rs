//! User repository for database operations.

use sqlx::PgPool;

use rcolly_core::{Email, UserId};

use super::RepositoryError;
use crate::models::user::{CustomerSummary, User};

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user.
    ///
    /// New accounts never carry the admin flag; the only admin account is
    /// created by `rcolly-cli seed`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username or email is taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        username: &str,
        email: &Email,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, is_admin, created_at
            ",
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("User already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(user)
    }

    /// Get a user and their password hash by username.
    ///
    /// Returns `None` if no such user exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_with_password_hash(
        &self,
        username: &str,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, UserWithHash>(
            r"
            SELECT id, username, email, is_admin, created_at, password_hash
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| {
            (
                User {
                    id: r.id,
                    username: r.username,
                    email: r.email,
                    is_admin: r.is_admin,
                    created_at: r.created_at,
                },
                r.password_hash,
            )
        }))
    }

    /// Count customer accounts (users without the admin flag).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_customers(&self) -> Result<i64, RepositoryError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE is_admin = FALSE")
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }

    /// List customer accounts with per-user order stats, newest first.
    ///
    /// Order stats are correlated on the checkout contact email because
    /// guest checkouts carry no user reference.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_customers(&self) -> Result<Vec<CustomerSummary>, RepositoryError> {
        let customers = sqlx::query_as::<_, CustomerSummary>(
            r"
            SELECT id, username, email, created_at,
                   (SELECT COUNT(*) FROM orders WHERE customer_email = users.email) AS order_count,
                   (SELECT SUM(total_amount) FROM orders WHERE customer_email = users.email) AS total_spent
            FROM users
            WHERE is_admin = FALSE
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(customers)
    }
}

/// Internal row carrying the password hash alongside the account fields.
#[derive(sqlx::FromRow)]
struct UserWithHash {
    id: UserId,
    username: String,
    email: Email,
    is_admin: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    password_hash: String,
}
