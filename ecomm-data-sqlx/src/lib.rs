//! # ecomm-data-sqlx: SQLx storage engine
//!
//! Implements the [`CatalogStore`](ecomm_data::CatalogStore) contract from
//! `ecomm-data` on top of [SQLx](https://github.com/launchbadge/sqlx).
//!
//! # What's in this crate
//!
//! | Item | Description |
//! |------|-------------|
//! | [`SqlxStore`] | Pool-backed store; transactional `create_order` / `delete_order` |
//! | [`with_transaction`] | Run a unit of work in a transaction with guaranteed release |
//! | [`SqlxErrorExt`] | Convert `sqlx::Error` → `DataError` (`.into_read_error()` / `.into_write_error()`) |
//! | [`ensure_schema`] | Bootstrap DDL for `products`, `orders`, `order_items` |
//!
//! # Feature flags
//!
//! | Feature  | Driver |
//! |----------|--------|
//! | `sqlite` | SQLite via `sqlx/sqlite` (default) |
//! | `mysql`  | MySQL via `sqlx/mysql` |
//!
//! # Quick start
//!
//! ```ignore
//! use ecomm_data::prelude::*;
//! use ecomm_data_sqlx::{ensure_schema, SqlxStore};
//!
//! let store = SqlxStore::connect("sqlite::memory:", 1).await?;
//! ensure_schema(store.pool()).await?;
//!
//! let ctx = ExecContext::background();
//! let order = Order::new("card", 1.0, 2.0, 13.0)
//!     .with_item(OrderItem::new(7, "Widget", 1, 10.0));
//! let order = store.create_order(&ctx, order).await?;
//! assert!(order.items.iter().all(|item| item.order_id == order.id));
//! ```

pub mod backend;
pub mod error;
pub mod schema;
pub mod store;
pub mod tx;

pub use backend::{Db, DbPool, DbTransaction};
pub use error::SqlxErrorExt;
pub use schema::ensure_schema;
pub use store::SqlxStore;
pub use tx::with_transaction;

/// Re-exports of the most commonly used types from both `ecomm-data` and this crate.
pub mod prelude {
    pub use crate::{ensure_schema, with_transaction, SqlxErrorExt, SqlxStore};
    pub use ecomm_data::prelude::*;
}
