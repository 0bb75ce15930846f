use serde::Serialize;

use crate::error::HttpError;

/// A field-level validation error.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Payload of [`HttpError::Validation`].
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// Run the `garde` rules declared on `value`.
///
/// ```ignore
/// async fn create(Json(body): Json<CreateProductRequest>) -> Result<..., AppError> {
///     validate(&body)?;
///     ...
/// }
/// ```
pub fn validate<T>(value: &T) -> Result<(), HttpError>
where
    T: garde::Validate,
    T::Context: Default,
{
    value.validate().map_err(|report| HttpError::Validation(convert_report(&report)))
}

fn convert_report(report: &garde::Report) -> ValidationErrorResponse {
    let errors = report
        .iter()
        .map(|(path, error)| {
            let field = path.to_string();
            FieldError {
                field: if field.is_empty() { "value".to_string() } else { field },
                message: error.message().to_string(),
            }
        })
        .collect();
    ValidationErrorResponse { errors }
}
