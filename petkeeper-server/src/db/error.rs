//! DAO error type
//!
//! Separates "the caller sent something wrong" from "storage is broken"
//! so the HTTP layer can answer 400 or 500 accordingly.

/// Result type alias for DAO operations
pub type DaoResult<T> = Result<T, DaoError>;

#[derive(Debug, thiserror::Error)]
pub enum DaoError {
    /// Missing input or an identifier that matches no row
    #[error("{0}")]
    InvalidArgument(String),

    /// Underlying database failure
    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl DaoError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Wrap a database error, logging it with the failing operation.
    pub(crate) fn storage(operation: &'static str, source: sqlx::Error) -> Self {
        tracing::error!(error = %source, "{}", operation);
        Self::Storage(source)
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}
