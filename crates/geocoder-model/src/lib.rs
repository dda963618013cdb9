//! Geocoder model types
//!
//! Defines the query, location and result-set types shared by the cache,
//! the stores and the providers, plus the provider capability itself.

pub mod error;
pub mod location;
pub mod provider;
pub mod query;

pub use error::ProviderError;
pub use location::{AdminLevel, Bounds, Coordinates, Country, Location, ResultSet};
pub use provider::GeocodingProvider;
pub use query::Query;
