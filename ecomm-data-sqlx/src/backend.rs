//! Compile-time backend selection.
//!
//! Enable exactly one driver feature. `mysql` wins if both are enabled, so an
//! `--all-features` build type-checks against MySQL. The in-memory helpers in
//! `ecomm-test` are written against [`DbPool`] and only connect successfully
//! when SQLite is the selected backend.

use ecomm_data::DataError;
use sqlx::{Database, Pool};

#[cfg(not(any(feature = "sqlite", feature = "mysql")))]
compile_error!("ecomm-data-sqlx needs a database driver: enable the `sqlite` or `mysql` feature");

#[cfg(feature = "mysql")]
pub type Db = sqlx::MySql;

#[cfg(all(feature = "sqlite", not(feature = "mysql")))]
pub type Db = sqlx::Sqlite;

pub type DbPool = Pool<Db>;

pub type DbTransaction = sqlx::Transaction<'static, Db>;

/// Identifier generated by the last `INSERT` of `result`.
///
/// `op` names the read in the [`DataError::Identity`] returned when the
/// backend reported no usable identifier.
pub(crate) fn generated_id(
    result: &<Db as Database>::QueryResult,
    op: impl Into<String>,
) -> Result<i64, DataError> {
    require_id(reported_id(result), op)
}

#[cfg(feature = "mysql")]
fn reported_id(result: &<Db as Database>::QueryResult) -> Option<i64> {
    i64::try_from(result.last_insert_id()).ok()
}

#[cfg(all(feature = "sqlite", not(feature = "mysql")))]
fn reported_id(result: &<Db as Database>::QueryResult) -> Option<i64> {
    Some(result.last_insert_rowid())
}

/// Generated identifiers start at 1; anything else means none was assigned.
fn require_id(reported: Option<i64>, op: impl Into<String>) -> Result<i64, DataError> {
    reported
        .filter(|id| *id > 0)
        .ok_or_else(|| DataError::identity(op))
}
