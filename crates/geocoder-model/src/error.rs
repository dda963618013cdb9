//! Errors surfaced by geocoding providers.

use thiserror::Error;

/// Failure reported by a [`GeocodingProvider`](crate::GeocodingProvider).
///
/// The cache layer propagates these unchanged and never stores them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Transport-level failure talking to the backend.
    #[error("network error: {0}")]
    Network(String),

    /// The backend refused the query.
    #[error("query rejected by provider: {0}")]
    Rejected(String),

    /// Request quota or rate limit exhausted.
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    /// The query itself is malformed (empty address, out-of-range coordinates).
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The provider does not implement this kind of lookup.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("provider '{0}' is not registered")]
    NotRegistered(String),

    #[error("no provider registered")]
    NoProviderRegistered,
}
