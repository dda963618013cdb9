use thiserror::Error;

/// Store result type
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from cache store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to walk cache directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid cache entry: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid key pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error("store lock poisoned")]
    Poisoned,
}
