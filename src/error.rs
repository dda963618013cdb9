//! Errors surfaced by the cache facade.

use geocoder_model::ProviderError;
use geocoder_store::StoreError;
use thiserror::Error;

use crate::dump::DumpFormat;

/// Result type for cache facade operations
pub type GeocodeResult<T> = Result<T, GeocodeError>;

#[derive(Debug, Error)]
pub enum GeocodeError {
    /// An unknown dumper tag was requested.
    #[error("The dumper specified ('{}') is invalid. Valid dumpers are: {}.", .format, .valid.join(", "))]
    InvalidFormat {
        format: String,
        valid: Vec<&'static str>,
    },

    /// A valid tag was requested but no dumpers were configured.
    #[error("no dumper configured for format '{0}'")]
    DumperUnavailable(DumpFormat),

    /// Failure from the wrapped provider, passed through unchanged.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Store failure on an explicit store operation (clearing, stats).
    /// Lookups never return this.
    #[error("cache store error: {0}")]
    Store(#[from] StoreError),
}

impl GeocodeError {
    pub fn invalid_format(format: &str) -> Self {
        Self::InvalidFormat {
            format: format.to_string(),
            valid: DumpFormat::ALL.iter().map(|f| f.as_str()).collect(),
        }
    }
}
