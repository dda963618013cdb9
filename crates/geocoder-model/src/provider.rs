//! The geocoding provider capability

use std::sync::Arc;

use crate::{ProviderError, ResultSet};

/// A backend that performs forward and reverse geocoding.
///
/// Implementations are typically network-backed; everything here is
/// blocking from the caller's point of view.
pub trait GeocodingProvider: Send + Sync {
    /// Stable provider name, used for selection and provenance.
    fn name(&self) -> &str;

    /// Resolve a free-text address into location records.
    fn geocode(&self, address: &str) -> Result<ResultSet, ProviderError>;

    /// Resolve a coordinate pair into location records.
    fn reverse(&self, latitude: f64, longitude: f64) -> Result<ResultSet, ProviderError>;
}

impl<P: GeocodingProvider + ?Sized> GeocodingProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn geocode(&self, address: &str) -> Result<ResultSet, ProviderError> {
        (**self).geocode(address)
    }

    fn reverse(&self, latitude: f64, longitude: f64) -> Result<ResultSet, ProviderError> {
        (**self).reverse(latitude, longitude)
    }
}

impl<P: GeocodingProvider + ?Sized> GeocodingProvider for Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn geocode(&self, address: &str) -> Result<ResultSet, ProviderError> {
        (**self).geocode(address)
    }

    fn reverse(&self, latitude: f64, longitude: f64) -> Result<ResultSet, ProviderError> {
        (**self).reverse(latitude, longitude)
    }
}
