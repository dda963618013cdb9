//! geocoder-cache: memoizing geocoder
//!
//! Wraps any [`GeocodingProvider`] in a [`GeocodeCache`] that derives a
//! namespaced key from each query, serves repeat lookups from a pluggable
//! [`CacheStore`], and dispatches result sets to one of five dumpers.

pub mod aggregator;
pub mod cache;
pub mod config;
pub mod dump;
pub mod error;
pub mod fixture;

pub use aggregator::ProviderAggregator;
pub use cache::{CacheConfig, CacheKey, GeocodeCache, CACHE_NAMESPACE};
pub use config::{EffectiveConfig, GeocoderSettings};
pub use dump::{DumpFormat, Dumpers, ResultDumper};
pub use error::{GeocodeError, GeocodeResult};
pub use fixture::FixtureProvider;

pub use geocoder_model::{
    Coordinates, GeocodingProvider, Location, ProviderError, Query, ResultSet,
};
pub use geocoder_store::{CacheStore, FileStore, ManualClock, MemoryStore, StoreError};
