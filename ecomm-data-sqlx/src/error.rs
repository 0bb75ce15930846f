use ecomm_data::DataError;

/// Extension trait for converting `sqlx::Error` into `DataError`.
///
/// Due to Rust's orphan rules, we can't implement `From<sqlx::Error> for DataError`
/// in this crate. The call site picks the class: a failed statement that writes
/// is a write failure, anything that fetches is a read failure.
pub trait SqlxErrorExt {
    /// Classify as a read; `RowNotFound` becomes [`DataError::NotFound`].
    fn into_read_error(self, op: &str) -> DataError;

    fn into_write_error(self, op: &str) -> DataError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_read_error(self, op: &str) -> DataError {
        match self {
            sqlx::Error::RowNotFound => DataError::NotFound(format!("{op}: row not found")),
            other => DataError::read(op, other),
        }
    }

    fn into_write_error(self, op: &str) -> DataError {
        DataError::write(op, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecomm_data::ErrorKind;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = sqlx::Error::RowNotFound.into_read_error("getting order");
        assert!(err.is_not_found());
        assert_eq!(err.kind(), ErrorKind::ReadFailure);
    }

    #[test]
    fn write_errors_keep_operation_context() {
        let err = sqlx::Error::PoolClosed.into_write_error("inserting product");
        assert_eq!(err.kind(), ErrorKind::WriteFailure);
        assert!(err.to_string().starts_with("error inserting product:"));
    }
}
