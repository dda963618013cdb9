//! Stored cache entries

use std::time::Duration;

use chrono::{DateTime, Utc};
use geocoder_model::ResultSet;
use serde::{Deserialize, Serialize};

/// A cached result set together with its bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The full cache key (namespace included)
    pub key: String,
    pub results: ResultSet,
    pub created_at: DateTime<Utc>,
    /// When this entry stops being served (None = never)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl CacheEntry {
    /// Create an entry stamped at `now`, expiring after `ttl`.
    ///
    /// A ttl too large to represent is treated as no expiry.
    pub fn new(key: &str, results: ResultSet, now: DateTime<Utc>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl
            .and_then(|ttl| chrono::Duration::from_std(ttl).ok())
            .and_then(|ttl| now.checked_add_signed(ttl));
        Self {
            key: key.to_string(),
            results,
            created_at: now,
            expires_at,
        }
    }

    /// Check if this entry has expired as of `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now >= expires_at,
            None => false,
        }
    }
}
