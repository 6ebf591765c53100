use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    DatabaseError(DieselError),
    #[error("connection pool error: {0}")]
    ConnectionError(#[from] diesel::r2d2::PoolError),
    /// A stored row failed domain validation.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// A uniqueness constraint rejected the write.
    #[error("conflict: {0}")]
    ConflictError(String),
}

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                RepositoryError::ConflictError(info.message().to_string())
            }
            other => RepositoryError::DatabaseError(other),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
