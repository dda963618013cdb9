//! Provider aggregation
//!
//! Holds several named providers and routes lookups to one of them: the
//! provider picked with [`ProviderAggregator::using`], or the first one
//! registered. Result sets are capped at the configured limit.

use geocoder_model::{GeocodingProvider, ProviderError, ResultSet};
use tracing::debug;

/// Default cap on records per lookup.
pub const DEFAULT_LIMIT: usize = 5;

pub struct ProviderAggregator {
    providers: Vec<Box<dyn GeocodingProvider>>,
    chosen: Option<String>,
    limit: usize,
}

impl ProviderAggregator {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            providers: Vec::new(),
            chosen: None,
            limit,
        }
    }

    /// Register a provider. A provider with the same name is replaced in place.
    pub fn register(&mut self, provider: impl GeocodingProvider + 'static) -> &mut Self {
        let provider: Box<dyn GeocodingProvider> = Box::new(provider);
        match self.providers.iter().position(|p| p.name() == provider.name()) {
            Some(index) => self.providers[index] = provider,
            None => self.providers.push(provider),
        }
        self
    }

    /// Register several providers in order.
    pub fn register_all<I, P>(&mut self, providers: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: GeocodingProvider + 'static,
    {
        for provider in providers {
            self.register(provider);
        }
        self
    }

    /// Route subsequent lookups to the provider named `name`.
    pub fn using(&mut self, name: &str) -> Result<&mut Self, ProviderError> {
        if !self.providers.iter().any(|p| p.name() == name) {
            return Err(ProviderError::NotRegistered(name.to_string()));
        }
        self.chosen = Some(name.to_string());
        Ok(self)
    }

    /// Registered provider names, in registration order.
    pub fn providers(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn chosen(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn set_limit(&mut self, limit: usize) -> &mut Self {
        self.limit = limit;
        self
    }

    fn active(&self) -> Result<&dyn GeocodingProvider, ProviderError> {
        let provider = match &self.chosen {
            Some(name) => self.providers.iter().find(|p| p.name() == name),
            None => self.providers.first(),
        };
        provider
            .map(|p| &**p)
            .ok_or(ProviderError::NoProviderRegistered)
    }

    fn capped(&self, mut results: ResultSet) -> ResultSet {
        results.truncate(self.limit);
        results
    }
}

impl Default for ProviderAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodingProvider for ProviderAggregator {
    fn name(&self) -> &str {
        "provider_aggregator"
    }

    fn geocode(&self, address: &str) -> Result<ResultSet, ProviderError> {
        let provider = self.active()?;
        debug!(provider = provider.name(), address, "forward geocode");
        Ok(self.capped(provider.geocode(address)?))
    }

    fn reverse(&self, latitude: f64, longitude: f64) -> Result<ResultSet, ProviderError> {
        let provider = self.active()?;
        debug!(provider = provider.name(), latitude, longitude, "reverse geocode");
        Ok(self.capped(provider.reverse(latitude, longitude)?))
    }
}
