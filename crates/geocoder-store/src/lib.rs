//! Cache store backends
//!
//! A [`CacheStore`] maps string keys to [`ResultSet`]s with an optional
//! time-to-live. Expiry is passive: entries past their deadline read as
//! missing and are dropped lazily or by [`CacheStore::purge_expired`].
//!
//! Two backends are provided:
//! - [`MemoryStore`]: process-local map, guarded by a mutex
//! - [`FileStore`]: one JSON document per entry under a root directory
//!
//! Both take a [`Clock`] so expiry can be driven deterministically in tests.

mod clock;
mod entry;
mod error;
mod file;
mod memory;
mod pattern;

use std::sync::Arc;
use std::time::Duration;

use geocoder_model::ResultSet;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use pattern::KeyPattern;

/// Entry counts reported by a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Entries currently held, expired or not
    pub entries: usize,
    /// Entries past their expiry that have not been purged yet
    pub expired: usize,
    /// Bytes on disk (0 for in-memory stores)
    pub total_size_bytes: u64,
}

/// Key/value storage for cached result sets.
///
/// All methods take `&self`; implementations synchronize internally.
/// There is no read-modify-write atomicity across calls.
pub trait CacheStore: Send + Sync {
    /// Fetch a live entry. Expired entries read as `None`.
    fn get(&self, key: &str) -> StoreResult<Option<ResultSet>>;

    /// Store `results` under `key`, replacing any previous entry.
    ///
    /// `ttl = None` stores without expiry.
    fn put(&self, key: &str, results: &ResultSet, ttl: Option<Duration>) -> StoreResult<()>;

    /// Remove every entry whose key matches `pattern`.
    ///
    /// `pattern` is a glob (`geocoder.*`); a pattern without glob
    /// metacharacters removes that exact key. Returns the number removed.
    fn forget(&self, pattern: &str) -> StoreResult<usize>;

    /// Drop entries past their expiry. Returns the number removed.
    fn purge_expired(&self) -> StoreResult<usize>;

    fn stats(&self) -> StoreResult<StoreStats>;
}

impl<S: CacheStore + ?Sized> CacheStore for Arc<S> {
    fn get(&self, key: &str) -> StoreResult<Option<ResultSet>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, results: &ResultSet, ttl: Option<Duration>) -> StoreResult<()> {
        (**self).put(key, results, ttl)
    }

    fn forget(&self, pattern: &str) -> StoreResult<usize> {
        (**self).forget(pattern)
    }

    fn purge_expired(&self) -> StoreResult<usize> {
        (**self).purge_expired()
    }

    fn stats(&self) -> StoreResult<StoreStats> {
        (**self).stats()
    }
}
