use std::fmt;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Broad classification of a [`DataError`], used by the boundary to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    WriteFailure,
    ReadFailure,
    IdentityFailure,
    TransactionFailure,
    CompoundFailure,
    Cancelled,
    DeadlineExceeded,
    Other,
}

/// Transaction step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStage {
    Begin,
    Commit,
}

impl fmt::Display for TxStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxStage::Begin => f.write_str("beginning transaction"),
            TxStage::Commit => f.write_str("committing transaction"),
        }
    }
}

/// Errors that can occur in the data layer.
///
/// Every variant names the operation it happened in; driver errors are kept as
/// the [`source`](std::error::Error::source).
#[derive(Debug)]
pub enum DataError {
    /// A single-row fetch matched nothing.
    NotFound(String),
    /// An insert, update or delete was rejected (or an update matched no row).
    Write { op: String, source: BoxError },
    /// A query or row decode failed.
    Read { op: String, source: BoxError },
    /// The backend did not hand back a usable generated identifier.
    Identity { op: String },
    Transaction { op: String, stage: TxStage, source: BoxError },
    /// The unit of work failed and so did the rollback. `original` comes first.
    Compound { op: String, original: Box<DataError>, rollback: BoxError },
    Cancelled(String),
    DeadlineExceeded(String),
    Other(String),
}

impl DataError {
    pub fn write(op: impl Into<String>, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DataError::Write { op: op.into(), source: Box::new(err) }
    }

    pub fn read(op: impl Into<String>, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DataError::Read { op: op.into(), source: Box::new(err) }
    }

    pub fn identity(op: impl Into<String>) -> Self {
        DataError::Identity { op: op.into() }
    }

    pub fn transaction(
        op: impl Into<String>,
        stage: TxStage,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        DataError::Transaction { op: op.into(), stage, source: Box::new(err) }
    }

    pub fn compound(
        op: impl Into<String>,
        original: DataError,
        rollback: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        DataError::Compound {
            op: op.into(),
            original: Box::new(original),
            rollback: Box::new(rollback),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DataError::NotFound(_) | DataError::Read { .. } => ErrorKind::ReadFailure,
            DataError::Write { .. } => ErrorKind::WriteFailure,
            DataError::Identity { .. } => ErrorKind::IdentityFailure,
            DataError::Transaction { .. } => ErrorKind::TransactionFailure,
            DataError::Compound { .. } => ErrorKind::CompoundFailure,
            DataError::Cancelled(_) => ErrorKind::Cancelled,
            DataError::DeadlineExceeded(_) => ErrorKind::DeadlineExceeded,
            DataError::Other(_) => ErrorKind::Other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::NotFound(_))
    }

    /// The error that started a failure, looking through `Compound`.
    pub fn root(&self) -> &DataError {
        match self {
            DataError::Compound { original, .. } => original.root(),
            other => other,
        }
    }
}

/// Message used when an update or lookup matched zero rows.
#[derive(Debug)]
pub struct NoRowsMatched {
    pub table: &'static str,
    pub id: i64,
}

impl fmt::Display for NoRowsMatched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no row in {} with id {}", self.table, self.id)
    }
}

impl std::error::Error for NoRowsMatched {}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::NotFound(msg) => write!(f, "not found: {msg}"),
            DataError::Write { op, source } => write!(f, "error {op}: {source}"),
            DataError::Read { op, source } => write!(f, "error {op}: {source}"),
            DataError::Identity { op } => {
                write!(f, "error {op}: backend returned no generated identifier")
            }
            DataError::Transaction { op, stage, source } => {
                write!(f, "error {stage} for {op}: {source}")
            }
            DataError::Compound { op, original, rollback } => {
                write!(f, "{op} failed: {original}; rollback also failed: {rollback}")
            }
            DataError::Cancelled(op) => write!(f, "{op} cancelled"),
            DataError::DeadlineExceeded(op) => write!(f, "{op} exceeded its deadline"),
            DataError::Other(msg) => write!(f, "data error: {msg}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Write { source, .. }
            | DataError::Read { source, .. }
            | DataError::Transaction { source, .. } => Some(source.as_ref()),
            DataError::Compound { original, .. } => Some(original.as_ref()),
            _ => None,
        }
    }
}
