use axum::response::{IntoResponse, Response};
use ecomm_core::HttpError;
use ecomm_data::{DataError, ErrorKind};

/// Handler error. Storage failures are classified here; their detail is
/// logged and never sent to the client.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Cancelled(String),
    Timeout(String),
    Storage(DataError),
    Http(HttpError),
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        match err.kind() {
            ErrorKind::Cancelled => AppError::Cancelled(err.to_string()),
            ErrorKind::DeadlineExceeded => AppError::Timeout(err.to_string()),
            _ => match err {
                DataError::NotFound(msg) => AppError::NotFound(msg),
                other => AppError::Storage(other),
            },
        }
    }
}

impl From<HttpError> for AppError {
    fn from(err: HttpError) -> Self {
        AppError::Http(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let http = match self {
            AppError::NotFound(msg) => HttpError::NotFound(msg),
            AppError::Cancelled(msg) => {
                tracing::warn!(error = %msg, "request cancelled");
                HttpError::ServiceUnavailable("request cancelled".into())
            }
            AppError::Timeout(msg) => {
                tracing::warn!(error = %msg, "request timed out");
                HttpError::GatewayTimeout("request timed out".into())
            }
            AppError::Storage(err) => {
                tracing::error!(error = %err, kind = ?err.kind(), "storage failure");
                HttpError::Internal("Internal server error".into())
            }
            AppError::Http(err) => err,
        };
        http.into_response()
    }
}
