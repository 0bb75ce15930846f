//! # ecomm-test: test tooling
//!
//! | Item | Description |
//! |------|-------------|
//! | [`TestApp`] | Drive an `axum::Router` in-process |
//! | [`TestResponse`] | Status and JSON-path assertions |
//! | [`memory_store`] | `SqlxStore` over a private in-memory SQLite database |

mod app;
mod json_path;
mod store;

pub use app::{TestApp, TestRequest, TestResponse};
pub use json_path::{resolve_path, tokenize_path, PathToken};
pub use store::{count_rows, execute, memory_store};
