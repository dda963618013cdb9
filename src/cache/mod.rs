//! Memoizing cache over a geocoding provider
//!
//! ## Keying
//!
//! Keys are `geocoder.` followed by the hex SHA-256 of the query's key
//! input: the address verbatim, or `"{lat},{lon}"` for reverse lookups.
//! The provider name is not part of the key.
//!
//! ## Failure policy
//!
//! Caching only affects latency, never results:
//! - store read failures are logged and treated as a miss
//! - store write failures are logged and dropped
//! - provider failures propagate and are never cached

mod config;
mod geocode_cache;
mod key;

pub use config::CacheConfig;
pub use geocode_cache::GeocodeCache;
pub use key::{CacheKey, CACHE_NAMESPACE};
