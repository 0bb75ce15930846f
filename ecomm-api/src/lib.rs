//! # ecomm-api: catalog and order HTTP service
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /health` | liveness |
//! | `POST /products`, `GET /products` | create / list |
//! | `GET`, `PATCH`, `DELETE /products/{id}` | get / partial update / delete |
//! | `POST /orders`, `GET /orders` | create (atomic) / list |
//! | `GET`, `DELETE /orders/{id}` | get / delete (atomic) |
//!
//! Storage failures map to `404` (not found), `503` (cancelled), `504`
//! (deadline exceeded) or `500`; the body is always `{ "error": message }`.

pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod router;
pub mod server;
pub mod service;
pub mod state;

pub use config::{DatabaseConfig, ServerConfig};
pub use error::AppError;
pub use router::router;
pub use server::serve;
pub use service::CatalogService;
pub use state::AppState;
