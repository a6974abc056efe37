//! Seed the database with starter data.
//!
//! Idempotent: categories and the admin account upsert on their unique
//! keys, and sample products are only inserted when no product with the
//! same name exists yet. Safe to re-run against a live database.

use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;

use rcolly_server::services::auth::{self, AuthError};

/// Admin account created by the seed.
const ADMIN_USERNAME: &str = "admin";
const ADMIN_EMAIL: &str = "admin@rcolly.com";

/// Starter categories as (name, slug).
const CATEGORIES: &[(&str, &str)] = &[
    ("Caps", "caps"),
    ("Hoodies", "hoodies"),
    ("Pants", "pants"),
    ("T-Shirts", "tshirts"),
];

/// Starter products as (name, description, price, category slug, image,
/// stock, sizes).
const PRODUCTS: &[(&str, &str, &str, &str, &str, i32, &str)] = &[
    ("Rcolly Signature Cap", "Premium streetwear cap with signature design", "120", "caps", "/images/cap.jpg", 10, "S,M,L,XL"),
    ("Classic Black Cap", "Classic black cap for everyday wear", "100", "caps", "/images/cap1.jpg", 15, "S,M,L,XL"),
    ("Street Fusion Cap", "Urban street fusion design cap", "110", "caps", "/images/cap2.jpg", 12, "S,M,L,XL"),
    ("Urban Edge Cap", "Modern urban edge streetwear cap", "130", "caps", "/images/cap3.jpg", 8, "S,M,L,XL"),
    ("Fusion Hoodie", "Comfortable streetwear hoodie", "250", "hoodies", "/images/hood.jpg", 20, "S,M,L,XL"),
    ("Urban Zip Hoodie", "Premium zip-up hoodie", "270", "hoodies", "/images/hood1.jpg", 18, "S,M,L,XL"),
    ("Streetwear Hoodie", "Classic streetwear hoodie design", "260", "hoodies", "/images/hood2.jpg", 22, "S,M,L,XL"),
    ("Bold Print Hoodie", "Eye-catching bold print hoodie", "280", "hoodies", "/images/hood3.jpg", 16, "S,M,L,XL"),
    ("Slim Fit Pants", "Modern slim fit streetwear pants", "200", "pants", "/images/pants1.jpg", 25, "28,30,32,34"),
    ("Cargo Street Pants", "Functional cargo street pants", "220", "pants", "/images/pants2.jpg", 20, "28,30,32,34"),
    ("Fusion Joggers", "Comfortable fusion design joggers", "210", "pants", "/images/pants3.jpg", 30, "28,30,32,34"),
    ("Tapered Fit Pants", "Stylish tapered fit pants", "230", "pants", "/images/pants4.jpg", 18, "28,30,32,34"),
    ("Graphic Tee", "Unique graphic design t-shirt", "150", "tshirts", "/images/tshirt1.jpg", 35, "S,M,L,XL"),
    ("Fusion Logo Tee", "Brand fusion logo t-shirt", "160", "tshirts", "/images/tshirt2.jpg", 40, "S,M,L,XL"),
    ("Minimalist Tee", "Clean minimalist design tee", "140", "tshirts", "/images/tshirt3.jpg", 45, "S,M,L,XL"),
    ("Oversized Street Tee", "Trendy oversized street tee", "170", "tshirts", "/images/tshirt4.jpg", 32, "S,M,L,XL"),
];

/// Errors that can occur while seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing failed: {0}")]
    Hash(#[from] AuthError),

    #[error("Invalid seed data: {0}")]
    BadData(String),
}

/// Seed categories, sample products, and the admin account.
///
/// The admin password comes from `ADMIN_PASSWORD`; it is never stored in
/// the binary or the repository.
///
/// # Errors
///
/// Returns `SeedError` if an environment variable is missing, hashing
/// fails, or a statement fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| SeedError::MissingEnvVar("DATABASE_URL"))?;
    let admin_password = std::env::var("ADMIN_PASSWORD")
        .map(SecretString::from)
        .map_err(|_| SeedError::MissingEnvVar("ADMIN_PASSWORD"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url.expose_secret()).await?;

    seed_admin(&pool, &admin_password).await?;
    seed_categories(&pool).await?;
    seed_products(&pool).await?;

    tracing::info!("Seed complete!");
    Ok(())
}

async fn seed_admin(pool: &PgPool, password: &SecretString) -> Result<(), SeedError> {
    let password_hash = auth::hash_password(password.expose_secret())?;

    let result = sqlx::query(
        r"
        INSERT INTO users (username, email, password_hash, is_admin)
        VALUES ($1, $2, $3, TRUE)
        ON CONFLICT (username) DO NOTHING
        ",
    )
    .bind(ADMIN_USERNAME)
    .bind(ADMIN_EMAIL)
    .bind(&password_hash)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        tracing::info!("Admin account already exists, skipping");
    } else {
        tracing::info!(username = ADMIN_USERNAME, "Admin account created");
    }

    Ok(())
}

async fn seed_categories(pool: &PgPool) -> Result<(), SeedError> {
    for (name, slug) in CATEGORIES {
        sqlx::query(
            r"
            INSERT INTO categories (name, slug)
            VALUES ($1, $2)
            ON CONFLICT (slug) DO NOTHING
            ",
        )
        .bind(name)
        .bind(slug)
        .execute(pool)
        .await?;
    }

    tracing::info!(count = CATEGORIES.len(), "Categories seeded");
    Ok(())
}

async fn seed_products(pool: &PgPool) -> Result<(), SeedError> {
    let mut inserted = 0_u32;

    for (name, description, price, category_slug, image_url, stock, sizes) in PRODUCTS {
        let price: Decimal = price
            .parse()
            .map_err(|_| SeedError::BadData(format!("bad price for {name}: {price}")))?;

        // Category ids are looked up by slug rather than assumed, so the
        // seed stays correct against a database with prior data.
        let result = sqlx::query(
            r"
            INSERT INTO products (name, description, price, category_id, image_url, stock_quantity, sizes)
            SELECT $1, $2, $3, c.id, $5, $6, $7
            FROM categories c
            WHERE c.slug = $4
              AND NOT EXISTS (SELECT 1 FROM products WHERE name = $1)
            ",
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(category_slug)
        .bind(image_url)
        .bind(stock)
        .bind(sizes)
        .execute(pool)
        .await?;

        inserted += u32::try_from(result.rows_affected()).unwrap_or(0);
    }

    tracing::info!(inserted, total = PRODUCTS.len(), "Products seeded");
    Ok(())
}
