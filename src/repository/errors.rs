use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A pooled connection could not be acquired.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The underlying database statement failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A stored row violated a domain constraint during conversion.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
