//! # ecomm-data: entity model and store contract
//!
//! Backend-agnostic half of the data layer. The SQLx storage engine lives in
//! `ecomm-data-sqlx`.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Product`], [`Order`], [`OrderItem`] | Persisted records |
//! | [`Entity`] | Table/column metadata used to build statements |
//! | [`CatalogStore`] | Async store contract consumed by the service layer |
//! | [`DataError`] / [`ErrorKind`] | Error taxonomy of the data layer |
//! | [`ExecContext`] | Cancellation token + deadline carried by every call |

pub mod context;
pub mod entity;
pub mod error;
pub mod model;
pub mod repository;

pub use context::ExecContext;
pub use entity::Entity;
pub use error::{BoxError, DataError, ErrorKind, NoRowsMatched, TxStage};
pub use model::{now_micros, Order, OrderItem, Product};
pub use repository::CatalogStore;

pub mod prelude {
    //! Re-exports of the most commonly used data types.
    pub use crate::{CatalogStore, DataError, Entity, ExecContext, Order, OrderItem, Product};
}
