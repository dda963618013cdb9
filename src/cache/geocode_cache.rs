//! The memoizing geocoder

use std::sync::Arc;
use std::time::Duration;

use geocoder_model::{GeocodingProvider, Location, ProviderError, Query, ResultSet};
use geocoder_store::CacheStore;
use tracing::{debug, info, warn};

use super::{CacheConfig, CacheKey};
use crate::dump::{DumpFormat, Dumpers};
use crate::error::{GeocodeError, GeocodeResult};

/// Wraps a provider and memoizes its lookups in a [`CacheStore`].
///
/// The last successful result set is retained and can be read back with
/// [`current_results`](Self::current_results) or dumped with
/// [`dump_current`](Self::dump_current).
pub struct GeocodeCache<P> {
    provider: P,
    store: Arc<dyn CacheStore>,
    config: CacheConfig,
    dumpers: Option<Dumpers>,
    current: Option<ResultSet>,
}

impl<P: GeocodingProvider> GeocodeCache<P> {
    pub fn new(provider: P, store: Arc<dyn CacheStore>, config: CacheConfig) -> Self {
        Self {
            provider,
            store,
            config,
            dumpers: None,
            current: None,
        }
    }

    pub fn with_dumpers(mut self, dumpers: Dumpers) -> Self {
        self.dumpers = Some(dumpers);
        self
    }

    /// Forward geocode `address`, consulting the cache when enabled.
    pub fn geocode(&mut self, address: &str) -> GeocodeResult<ResultSet> {
        let query = Query::address(address)?;
        self.lookup(&query)
    }

    /// Reverse geocode a coordinate pair, consulting the cache when enabled.
    pub fn reverse(&mut self, latitude: f64, longitude: f64) -> GeocodeResult<ResultSet> {
        self.lookup(&Query::point(latitude, longitude))
    }

    /// Run one lookup through the cache.
    ///
    /// - disabled: provider only, the store is not touched
    /// - hit: cached results, the provider is not called
    /// - miss: provider, then one store write
    pub fn lookup(&mut self, query: &Query) -> GeocodeResult<ResultSet> {
        if !self.config.is_enabled() {
            debug!(query = %query, "cache disabled, querying provider");
            let results = self.fetch(query)?;
            return Ok(self.remember(results));
        }

        let key = CacheKey::for_query(query);
        if let Some(results) = self.read_cache(&key) {
            debug!(key = %key, query = %query, "cache hit");
            return Ok(self.remember(results));
        }

        debug!(key = %key, query = %query, "cache miss");
        let results = self.fetch(query)?;
        self.write_cache(&key, &results);
        Ok(self.remember(results))
    }

    fn fetch(&self, query: &Query) -> Result<ResultSet, ProviderError> {
        match query {
            Query::Address(address) => self.provider.geocode(address),
            Query::Point {
                latitude,
                longitude,
            } => self.provider.reverse(*latitude, *longitude),
        }
    }

    fn read_cache(&self, key: &CacheKey) -> Option<ResultSet> {
        match self.store.get(key.as_str()) {
            Ok(results) => results,
            Err(e) => {
                warn!(key = %key, error = %e, "cache read failed, treating as miss");
                None
            }
        }
    }

    fn write_cache(&self, key: &CacheKey, results: &ResultSet) {
        if !self.config.writes_entries() {
            debug!(key = %key, "zero cache timeout, result not cached");
            return;
        }
        if let Err(e) = self.store.put(key.as_str(), results, Some(self.config.timeout())) {
            warn!(key = %key, error = %e, "cache write failed, result not cached");
        }
    }

    fn remember(&mut self, results: ResultSet) -> ResultSet {
        self.current = Some(results.clone());
        results
    }

    /// Remove every entry in the cache namespace. Returns how many were removed.
    pub fn clear_cache(&self) -> GeocodeResult<usize> {
        let removed = self.store.forget(&CacheKey::namespace_pattern())?;
        info!(removed, "cleared geocoder cache");
        Ok(removed)
    }

    /// Serialize each record of `results` with the dumper for `format`.
    ///
    /// Unknown tags fail with [`GeocodeError::InvalidFormat`].
    pub fn dump(&self, results: &ResultSet, format: &str) -> GeocodeResult<Vec<String>> {
        let format: DumpFormat = format.parse()?;
        let dumpers = self
            .dumpers
            .as_ref()
            .ok_or(GeocodeError::DumperUnavailable(format))?;
        Ok(dumpers.dump(results, format))
    }

    /// Dump the retained results of the last lookup (empty if none).
    pub fn dump_current(&self, format: &str) -> GeocodeResult<Vec<String>> {
        let empty = ResultSet::empty();
        let results = self.current.as_ref().unwrap_or(&empty);
        self.dump(results, format)
    }

    pub fn current_results(&self) -> Option<&ResultSet> {
        self.current.as_ref()
    }

    pub fn get(&self) -> Option<&ResultSet> {
        self.current_results()
    }

    /// Records of the last lookup, or an empty slice.
    pub fn all(&self) -> &[Location] {
        self.current.as_ref().map(ResultSet::locations).unwrap_or(&[])
    }

    pub fn is_cache_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    pub fn cache_timeout(&self) -> Duration {
        self.config.timeout()
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CacheConfig) {
        self.config = config;
    }

    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }

    pub fn set_store(&mut self, store: Arc<dyn CacheStore>) -> &mut Self {
        self.store = store;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }
}
