use ecomm_data_sqlx::{ensure_schema, DbPool, SqlxStore};
use sqlx::sqlite::SqlitePoolOptions;

/// A store over a private in-memory database.
///
/// The pool keeps exactly one connection alive for the whole test: every
/// SQLite `:memory:` connection is its own database.
pub async fn memory_store() -> SqlxStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();
    SqlxStore::new(pool)
}

pub async fn count(pool: &DbPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
