//! Transaction helper with guaranteed release.
//!
//! [`with_transaction`] is the single place the storage engine opens a
//! transaction. The transaction is always released before the call returns:
//!
//! - **work `Ok`:** commit; a commit error is returned as a transaction failure
//! - **work `Err`, cancelled or past deadline:** the work future is dropped,
//!   rollback is attempted, and the original error is returned
//! - **rollback also fails:** [`DataError::Compound`] carrying both, original first
//! - **panic or caller drops the future:** the `sqlx::Transaction` guard is
//!   dropped, which rolls back on the connection before it returns to the pool

use ecomm_data::{DataError, ExecContext, TxStage};
use futures_core::future::BoxFuture;

use crate::backend::{DbPool, DbTransaction};

/// Run `work` inside a transaction on `pool`, racing it against `ctx`.
///
/// The unit of work receives the transaction handle and returns a boxed future,
/// the same shape as `sqlx::Connection::transaction`:
///
/// ```ignore
/// let order = with_transaction(&pool, &ctx, "create_order", move |tx| {
///     Box::pin(async move {
///         sqlx::query("INSERT INTO orders ...").execute(&mut **tx).await
///             .map_err(|e| e.into_write_error("inserting order"))?;
///         Ok(order)
///     })
/// })
/// .await?;
/// ```
///
/// Rollback is attempted even when `ctx` is already cancelled; it is not
/// subject to the context deadline.
pub async fn with_transaction<T, F>(
    pool: &DbPool,
    ctx: &ExecContext,
    op: &str,
    work: F,
) -> Result<T, DataError>
where
    T: Send,
    F: for<'c> FnOnce(&'c mut DbTransaction) -> BoxFuture<'c, Result<T, DataError>>,
{
    let mut tx = ctx
        .guard(op, async {
            pool.begin()
                .await
                .map_err(|e| DataError::transaction(op, TxStage::Begin, e))
        })
        .await?;

    let outcome = ctx.guard(op, work(&mut tx)).await;

    match outcome {
        Ok(value) => {
            tx.commit()
                .await
                .map_err(|e| DataError::transaction(op, TxStage::Commit, e))?;
            tracing::debug!(op, "transaction committed");
            Ok(value)
        }
        Err(err) => {
            let rollback = tx.rollback().await;
            Err(settle_failure(op, err, rollback))
        }
    }
}

/// Combine the unit-of-work error with the rollback outcome.
pub(crate) fn settle_failure(
    op: &str,
    original: DataError,
    rollback: Result<(), sqlx::Error>,
) -> DataError {
    match rollback {
        Ok(()) => {
            tracing::warn!(op, error = %original, "transaction rolled back");
            original
        }
        Err(rollback_err) => {
            tracing::error!(
                op,
                error = %original,
                rollback_error = %rollback_err,
                "transaction rollback failed"
            );
            DataError::compound(op, original, rollback_err)
        }
    }
}
