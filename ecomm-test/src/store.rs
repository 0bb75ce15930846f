use ecomm_data_sqlx::{ensure_schema, Db, SqlxStore};
use sqlx::pool::PoolOptions;

/// A [`SqlxStore`] over a fresh private in-memory SQLite database with the schema applied.
///
/// The pool holds a single connection that is never recycled, because every
/// `:memory:` connection is a separate database. The pool is typed by the
/// selected backend, so this only connects when that backend is SQLite.
pub async fn memory_store() -> SqlxStore {
    let pool = PoolOptions::<Db>::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory SQLite database");
    ensure_schema(&pool).await.expect("failed to apply schema");
    SqlxStore::new(pool)
}

/// Run a raw statement on the store's pool, e.g. to install a failure-injecting trigger.
pub async fn execute(store: &SqlxStore, sql: &str) {
    sqlx::query(sql)
        .execute(store.pool())
        .await
        .unwrap_or_else(|e| panic!("statement failed: {e}\n{sql}"));
}

/// Row count of `table`.
pub async fn count_rows(store: &SqlxStore, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(store.pool())
        .await
        .unwrap_or_else(|e| panic!("counting {table} failed: {e}"))
}
