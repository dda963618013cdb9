//! In-process cache store

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use geocoder_model::ResultSet;

use crate::{CacheEntry, CacheStore, Clock, KeyPattern, StoreError, StoreResult, StoreStats, SystemClock};

/// A mutex-guarded map of entries.
pub struct MemoryStore {
    entries: Mutex<HashMap<String, CacheEntry>>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a store that reads time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Number of entries held, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, HashMap<String, CacheEntry>>> {
        self.entries.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<ResultSet>> {
        let now = self.clock.now();
        let mut entries = self.lock()?;

        let expired = match entries.get(key) {
            None => return Ok(None),
            Some(entry) => entry.is_expired_at(now),
        };
        if expired {
            entries.remove(key);
            return Ok(None);
        }

        Ok(entries.get(key).map(|entry| entry.results.clone()))
    }

    fn put(&self, key: &str, results: &ResultSet, ttl: Option<Duration>) -> StoreResult<()> {
        let entry = CacheEntry::new(key, results.clone(), self.clock.now(), ttl);
        self.lock()?.insert(key.to_string(), entry);
        Ok(())
    }

    fn forget(&self, pattern: &str) -> StoreResult<usize> {
        let pattern = KeyPattern::new(pattern)?;
        let mut entries = self.lock()?;
        let before = entries.len();
        entries.retain(|key, _| !pattern.matches(key));
        Ok(before - entries.len())
    }

    fn purge_expired(&self) -> StoreResult<usize> {
        let now = self.clock.now();
        let mut entries = self.lock()?;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        Ok(before - entries.len())
    }

    fn stats(&self) -> StoreResult<StoreStats> {
        let now = self.clock.now();
        let entries = self.lock()?;
        Ok(StoreStats {
            entries: entries.len(),
            expired: entries.values().filter(|e| e.is_expired_at(now)).count(),
            total_size_bytes: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualClock;
    use geocoder_model::{Coordinates, Location};

    fn results(name: &str) -> ResultSet {
        ResultSet::new(vec![
            Location::new("test", Coordinates::new(1.0, 2.0)).with_locality(name)
        ])
    }

    #[test]
    fn test_get_missing() {
        let store = MemoryStore::new();
        assert!(store.get("nope").unwrap().is_none());
    }

    #[test]
    fn test_put_then_get() {
        let store = MemoryStore::new();
        store.put("geocoder.a", &results("a"), None).unwrap();
        assert_eq!(store.get("geocoder.a").unwrap(), Some(results("a")));
    }

    #[test]
    fn test_put_overwrites() {
        let store = MemoryStore::new();
        store.put("k", &results("old"), None).unwrap();
        store.put("k", &results("new"), None).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(results("new")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ttl_expiry_with_manual_clock() {
        let clock = ManualClock::default();
        let store = MemoryStore::with_clock(Arc::new(clock.clone()));
        store.put("k", &results("a"), Some(Duration::from_secs(30))).unwrap();

        clock.advance(Duration::from_secs(29));
        assert!(store.get("k").unwrap().is_some());

        clock.advance(Duration::from_secs(1));
        assert!(store.get("k").unwrap().is_none());
        // Lazily dropped on read
        assert!(store.is_empty());
    }

    #[test]
    fn test_forget_namespace_leaves_other_keys() {
        let store = MemoryStore::new();
        store.put("geocoder.a", &results("a"), None).unwrap();
        store.put("geocoder.b", &results("b"), None).unwrap();
        store.put("sessions.c", &results("c"), None).unwrap();

        let removed = store.forget("geocoder.*").unwrap();

        assert_eq!(removed, 2);
        assert!(store.get("geocoder.a").unwrap().is_none());
        assert!(store.get("sessions.c").unwrap().is_some());
    }

    #[test]
    fn test_forget_exact_key() {
        let store = MemoryStore::new();
        store.put("geocoder.a", &results("a"), None).unwrap();
        store.put("geocoder.ab", &results("ab"), None).unwrap();

        assert_eq!(store.forget("geocoder.a").unwrap(), 1);
        assert!(store.get("geocoder.ab").unwrap().is_some());
    }

    #[test]
    fn test_purge_and_stats() {
        let clock = ManualClock::default();
        let store = MemoryStore::with_clock(Arc::new(clock.clone()));
        store.put("short", &results("a"), Some(Duration::from_secs(5))).unwrap();
        store.put("long", &results("b"), Some(Duration::from_secs(500))).unwrap();
        store.put("forever", &results("c"), None).unwrap();

        clock.advance(Duration::from_secs(10));
        let stats = store.stats().unwrap();
        assert_eq!(stats.entries, 3);
        assert_eq!(stats.expired, 1);

        assert_eq!(store.purge_expired().unwrap(), 1);
        assert_eq!(store.stats().unwrap().entries, 2);
    }
}
