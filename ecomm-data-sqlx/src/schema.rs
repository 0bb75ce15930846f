//! Bootstrap DDL for the three tables the storage engine reads and writes.
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`; this is not a migration
//! system and never alters an existing table.

use ecomm_data::DataError;

use crate::backend::DbPool;
use crate::error::SqlxErrorExt;

#[cfg(all(feature = "sqlite", not(feature = "mysql")))]
pub const DDL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        image TEXT NOT NULL,
        category TEXT NOT NULL,
        description TEXT NOT NULL,
        rating INTEGER NOT NULL,
        num_reviews INTEGER NOT NULL,
        price REAL NOT NULL,
        count_in_stock INTEGER NOT NULL,
        created_at DATETIME NOT NULL,
        updated_at DATETIME
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        payment_method TEXT NOT NULL,
        tax_price REAL NOT NULL,
        shipping_price REAL NOT NULL,
        total_price REAL NOT NULL,
        created_at DATETIME NOT NULL,
        updated_at DATETIME
    )",
    "CREATE TABLE IF NOT EXISTS order_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        quantity INTEGER NOT NULL CHECK (quantity > 0),
        image TEXT NOT NULL,
        price REAL NOT NULL,
        product_id INTEGER NOT NULL,
        order_id INTEGER NOT NULL REFERENCES orders (id)
    )",
    "CREATE INDEX IF NOT EXISTS idx_order_items_order_id ON order_items (order_id)",
];

#[cfg(feature = "mysql")]
pub const DDL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS products (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        image VARCHAR(255) NOT NULL,
        category VARCHAR(255) NOT NULL,
        description TEXT NOT NULL,
        rating INT NOT NULL,
        num_reviews INT NOT NULL,
        price DOUBLE NOT NULL,
        count_in_stock BIGINT NOT NULL,
        created_at DATETIME(6) NOT NULL,
        updated_at DATETIME(6) NULL
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        payment_method VARCHAR(255) NOT NULL,
        tax_price DOUBLE NOT NULL,
        shipping_price DOUBLE NOT NULL,
        total_price DOUBLE NOT NULL,
        created_at DATETIME(6) NOT NULL,
        updated_at DATETIME(6) NULL
    )",
    "CREATE TABLE IF NOT EXISTS order_items (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        quantity INT NOT NULL CHECK (quantity > 0),
        image VARCHAR(255) NOT NULL,
        price DOUBLE NOT NULL,
        product_id BIGINT NOT NULL,
        order_id BIGINT NOT NULL,
        INDEX idx_order_items_order_id (order_id),
        CONSTRAINT fk_order_items_order FOREIGN KEY (order_id) REFERENCES orders (id)
    )",
];

/// Create any missing table.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), DataError> {
    for statement in DDL.iter().copied() {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| e.into_write_error("applying schema"))?;
    }
    tracing::info!(statements = DDL.len(), "schema ensured");
    Ok(())
}
