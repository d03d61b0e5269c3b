//! Database connection management and schema bootstrap

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Schema DDL applied at startup. `IF NOT EXISTS` keeps restarts idempotent.
///
/// Constraints mirror the domain invariants: unique product names,
/// `price > 0`, `stock >= 0`, `quantity > 0`, and foreign keys from
/// order_items to both parents.
const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS products (
        id          BIGSERIAL PRIMARY KEY,
        name        TEXT NOT NULL UNIQUE,
        description TEXT,
        price       NUMERIC NOT NULL CHECK (price > 0),
        stock       INT NOT NULL CHECK (stock >= 0)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS orders (
        id         BIGSERIAL PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        status     TEXT NOT NULL DEFAULT 'processing'
    )"#,
    r#"CREATE TABLE IF NOT EXISTS order_items (
        id         BIGSERIAL PRIMARY KEY,
        order_id   BIGINT NOT NULL REFERENCES orders(id),
        product_id BIGINT NOT NULL REFERENCES products(id),
        quantity   INT NOT NULL CHECK (quantity > 0)
    )"#,
];

/// PostgreSQL database connection pool
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(database_url)
            .await?;

        tracing::info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the products/orders/order_items tables if they don't exist
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        for ddl in SCHEMA {
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        tracing::info!("Database schema initialized");
        Ok(())
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
