//! Filesystem cache store
//!
//! Layout: `<root>/<hh>/<sha256(key)>.json`, where `hh` is the first two hex
//! characters of the digest. Each file is a serialized [`CacheEntry`] that
//! carries its own key, so bulk operations can match patterns without an
//! index. Writes go through a temp file and a rename, so readers never see
//! a partial entry.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use geocoder_model::ResultSet;
use sha2::{Digest, Sha256};
use tracing::warn;
use walkdir::WalkDir;

use crate::{CacheEntry, CacheStore, Clock, KeyPattern, StoreResult, StoreStats, SystemClock};

const ENTRY_EXTENSION: &str = "json";

/// Persistent store rooted at a directory.
pub struct FileStore {
    root: PathBuf,
    clock: Arc<dyn Clock>,
}

impl FileStore {
    /// Create a store under `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_clock(root, Arc::new(SystemClock))
    }

    pub fn with_clock(root: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            root: root.into(),
            clock,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the entry file for `key`.
    pub fn path_for_key(&self, key: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        let digest = hex::encode(hasher.finalize());
        self.root
            .join(&digest[..2])
            .join(format!("{}.{}", digest, ENTRY_EXTENSION))
    }

    fn read_entry(path: &Path) -> StoreResult<CacheEntry> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Atomic write using write-then-rename
    fn write_entry(path: &Path, entry: &CacheEntry) -> StoreResult<()> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let temp_path = dir.join(format!(".{}.tmp", uuid::Uuid::new_v4()));
        let content = serde_json::to_vec(entry)?;
        fs::write(&temp_path, content)?;
        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        Ok(())
    }

    /// All readable entry files. Unreadable ones are skipped with a warning.
    fn entries(&self) -> StoreResult<Vec<(PathBuf, CacheEntry)>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for dir_entry in WalkDir::new(&self.root).min_depth(2).max_depth(2) {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();
            if !dir_entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(ENTRY_EXTENSION)
            {
                continue;
            }

            match Self::read_entry(path) {
                Ok(entry) => entries.push((path.to_path_buf(), entry)),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable cache entry"),
            }
        }
        Ok(entries)
    }

    fn remove_entry(path: &Path) -> StoreResult<bool> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl CacheStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<ResultSet>> {
        let path = self.path_for_key(key);
        if !path.exists() {
            return Ok(None);
        }

        let entry = Self::read_entry(&path)?;
        if entry.key != key {
            return Ok(None);
        }
        if entry.is_expired_at(self.clock.now()) {
            Self::remove_entry(&path)?;
            return Ok(None);
        }

        Ok(Some(entry.results))
    }

    fn put(&self, key: &str, results: &ResultSet, ttl: Option<Duration>) -> StoreResult<()> {
        let entry = CacheEntry::new(key, results.clone(), self.clock.now(), ttl);
        Self::write_entry(&self.path_for_key(key), &entry)
    }

    fn forget(&self, pattern: &str) -> StoreResult<usize> {
        let pattern = KeyPattern::new(pattern)?;
        let mut removed = 0;
        for (path, entry) in self.entries()? {
            if pattern.matches(&entry.key) && Self::remove_entry(&path)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn purge_expired(&self) -> StoreResult<usize> {
        let now = self.clock.now();
        let mut removed = 0;
        for (path, entry) in self.entries()? {
            if entry.is_expired_at(now) && Self::remove_entry(&path)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn stats(&self) -> StoreResult<StoreStats> {
        let now = self.clock.now();
        let mut stats = StoreStats::default();
        for (path, entry) in self.entries()? {
            stats.entries += 1;
            if entry.is_expired_at(now) {
                stats.expired += 1;
            }
            stats.total_size_bytes += fs::metadata(&path)?.len();
        }
        Ok(stats)
    }
}
