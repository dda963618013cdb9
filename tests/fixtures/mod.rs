//! Shared test doubles for geocoder-cache integration tests
//!
//! - `RecordingProvider`: counts calls, can be slowed down or made to fail
//! - `FaultyStore`: a store whose reads and/or writes fail on demand
//! - `tagging_dumpers`: dumpers that emit `<format>:<locality>`

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use geocoder_cache::{Coordinates, Dumpers, GeocodingProvider, Location, ProviderError, ResultSet};
use geocoder_store::{CacheStore, MemoryStore, StoreError, StoreResult, StoreStats};

pub const WHITE_HOUSE: &str = "1600 Pennsylvania Ave., Washington, DC USA";
pub const PHILADELPHIA: (f64, f64) = (40.026104, -75.225246);

/// Path to the sample fixture provider file
pub fn sample_fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_provider.json")
}

pub fn white_house_results() -> ResultSet {
    ResultSet::new(vec![
        Location::new("recording", Coordinates::new(38.8976763, -77.0365298))
            .with_street("1600", "Pennsylvania Avenue Northwest")
            .with_locality("Washington")
            .with_postal_code("20500")
            .with_admin_level(1, "District of Columbia")
            .with_country("United States", Some("US")),
        Location::new("recording", Coordinates::new(38.8977, -77.0366))
            .with_locality("Washington"),
    ])
}

/// A provider that records every call.
pub struct RecordingProvider {
    geocode_calls: AtomicUsize,
    reverse_calls: AtomicUsize,
    fail_next: AtomicBool,
    latency: Duration,
    queries: Mutex<Vec<String>>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::with_latency(Duration::ZERO)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            geocode_calls: AtomicUsize::new(0),
            reverse_calls: AtomicUsize::new(0),
            fail_next: AtomicBool::new(false),
            latency,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Make the next lookup fail with a network error.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn geocode_calls(&self) -> usize {
        self.geocode_calls.load(Ordering::SeqCst)
    }

    pub fn reverse_calls(&self) -> usize {
        self.reverse_calls.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.geocode_calls() + self.reverse_calls()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn record(&self, query: String) -> Result<(), ProviderError> {
        self.queries.lock().unwrap().push(query);
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(ProviderError::Network("connection reset".to_string()));
        }
        Ok(())
    }
}

impl GeocodingProvider for RecordingProvider {
    fn name(&self) -> &str {
        "recording"
    }

    fn geocode(&self, address: &str) -> Result<ResultSet, ProviderError> {
        self.geocode_calls.fetch_add(1, Ordering::SeqCst);
        self.record(address.to_string())?;
        if address == WHITE_HOUSE {
            return Ok(white_house_results());
        }
        Ok(ResultSet::new(vec![
            Location::new("recording", Coordinates::new(0.0, 0.0)).with_display_name(address)
        ]))
    }

    fn reverse(&self, latitude: f64, longitude: f64) -> Result<ResultSet, ProviderError> {
        self.reverse_calls.fetch_add(1, Ordering::SeqCst);
        self.record(format!("{},{}", latitude, longitude))?;
        Ok(ResultSet::new(vec![
            Location::new("recording", Coordinates::new(latitude, longitude))
                .with_locality("Philadelphia"),
        ]))
    }
}

/// A memory store whose reads and writes can be made to fail.
pub struct FaultyStore {
    inner: MemoryStore,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub writes: AtomicUsize,
}

impl FaultyStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    fn io_error(what: &str) -> StoreError {
        StoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, what.to_string()))
    }
}

impl CacheStore for FaultyStore {
    fn get(&self, key: &str) -> StoreResult<Option<ResultSet>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::io_error("read refused"));
        }
        self.inner.get(key)
    }

    fn put(&self, key: &str, results: &ResultSet, ttl: Option<Duration>) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::io_error("write refused"));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.put(key, results, ttl)
    }

    fn forget(&self, pattern: &str) -> StoreResult<usize> {
        self.inner.forget(pattern)
    }

    fn purge_expired(&self) -> StoreResult<usize> {
        self.inner.purge_expired()
    }

    fn stats(&self) -> StoreResult<StoreStats> {
        self.inner.stats()
    }
}

fn tag(format: &'static str) -> impl Fn(&Location) -> String + Send + Sync {
    move |location: &Location| {
        format!("{}:{}", format, location.locality.as_deref().unwrap_or("?"))
    }
}

pub fn tagging_dumpers() -> Dumpers {
    Dumpers::new(tag("geojson"), tag("gpx"), tag("kml"), tag("wkb"), tag("wkt"))
}
