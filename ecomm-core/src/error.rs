use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::validation::ValidationErrorResponse;

/// Helper to create a JSON error response with a standard `{ "error": message }` body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = serde_json::json!({ "error": message.into() });
    (status, Json(body)).into_response()
}

/// Transport-level error with a fixed status per variant.
pub enum HttpError {
    NotFound(String),
    BadRequest(String),
    ServiceUnavailable(String),
    GatewayTimeout(String),
    Internal(String),
    /// Request body failed its declared constraints; rendered with per-field details.
    Validation(ValidationErrorResponse),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HttpError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HttpError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HttpError::NotFound(msg)
            | HttpError::BadRequest(msg)
            | HttpError::ServiceUnavailable(msg)
            | HttpError::GatewayTimeout(msg)
            | HttpError::Internal(msg) => msg,
            HttpError::Validation(_) => "Validation failed",
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            HttpError::NotFound(msg)
            | HttpError::BadRequest(msg)
            | HttpError::ServiceUnavailable(msg)
            | HttpError::GatewayTimeout(msg)
            | HttpError::Internal(msg) => error_response(status, msg),
            HttpError::Validation(resp) => {
                let body = serde_json::json!({
                    "error": "Validation failed",
                    "details": resp.errors,
                });
                (status, Json(body)).into_response()
            }
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            HttpError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            HttpError::ServiceUnavailable(msg) => write!(f, "Service Unavailable: {msg}"),
            HttpError::GatewayTimeout(msg) => write!(f, "Gateway Timeout: {msg}"),
            HttpError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            HttpError::Validation(resp) => write!(f, "Validation Error: {} errors", resp.errors.len()),
        }
    }
}

impl std::fmt::Debug for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

impl std::error::Error for HttpError {}
