//! Liveness endpoint.
//!
//! | Path          | Description              |
//! |---------------|--------------------------|
//! | `GET /health` | Always `200 OK` with `OK` |

use axum::routing::get;
use axum::Router;

pub async fn health() -> &'static str {
    "OK"
}

/// A router exposing `GET /health`, ready to be merged into the application router.
pub fn health_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
