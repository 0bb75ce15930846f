//! # ecomm-core: runtime plumbing
//!
//! | Item | Description |
//! |------|-------------|
//! | [`EcommConfig`] | Layered YAML + `.env` + environment configuration |
//! | [`ConfigProperties`] | Typed configuration sections |
//! | [`init_tracing`] | Global `tracing` subscriber (`RUST_LOG`-aware) |
//! | [`default_trace`], [`catch_panic_layer`] | `tower-http` layers for the router |
//! | [`HttpError`], [`error_response`] | JSON `{ "error": ... }` responses |
//! | [`validate`] | Run `garde` rules, mapping a report to a 400 |
//! | [`health::health_routes`] | `GET /health` |

pub mod config;
pub mod error;
pub mod health;
pub mod layers;
pub mod validation;

pub use config::{ConfigError, ConfigProperties, ConfigValue, EcommConfig, FromConfigValue};
pub use error::{error_response, HttpError};
pub use layers::{catch_panic_layer, default_trace, init_tracing};
pub use validation::{validate, FieldError, ValidationErrorResponse};

pub mod prelude {
    //! Re-exports of the most commonly used types.
    pub use crate::{
        ConfigError, ConfigProperties, EcommConfig, HttpError, catch_panic_layer, default_trace,
        init_tracing, validate,
    };
}
