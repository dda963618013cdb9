//! Offline provider backed by canned results
//!
//! Fixture files are JSON:
//!
//! ```json
//! {
//!   "name": "fixture",
//!   "geocode": { "<address>": [ <Location>, ... ] },
//!   "reverse": { "<lat>,<lon>": [ <Location>, ... ] }
//! }
//! ```
//!
//! Reverse keys use the same `"{lat},{lon}"` rendering as cache keys.
//! Queries with no entry resolve to an empty result set.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use geocoder_model::{GeocodingProvider, ProviderError, Query, ResultSet};
use serde::Deserialize;

/// Errors loading a fixture file
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    name: String,
    #[serde(default)]
    geocode: HashMap<String, ResultSet>,
    #[serde(default)]
    reverse: HashMap<String, ResultSet>,
}

/// A provider that answers from an in-memory table.
#[derive(Debug, Clone)]
pub struct FixtureProvider {
    name: String,
    forward: HashMap<String, ResultSet>,
    reverse: HashMap<String, ResultSet>,
}

impl FixtureProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            forward: HashMap::new(),
            reverse: HashMap::new(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let file: FixtureFile = serde_json::from_str(json)?;
        Ok(Self {
            name: file.name,
            forward: file.geocode,
            reverse: file.reverse,
        })
    }

    pub fn with_address(mut self, address: impl Into<String>, results: ResultSet) -> Self {
        self.forward.insert(address.into(), results);
        self
    }

    pub fn with_point(mut self, latitude: f64, longitude: f64, results: ResultSet) -> Self {
        self.reverse
            .insert(Query::point(latitude, longitude).key_input(), results);
        self
    }
}

impl GeocodingProvider for FixtureProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn geocode(&self, address: &str) -> Result<ResultSet, ProviderError> {
        Ok(self.forward.get(address).cloned().unwrap_or_default())
    }

    fn reverse(&self, latitude: f64, longitude: f64) -> Result<ResultSet, ProviderError> {
        let key = Query::point(latitude, longitude).key_input();
        Ok(self.reverse.get(&key).cloned().unwrap_or_default())
    }
}
