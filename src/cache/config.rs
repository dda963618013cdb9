use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cache switch and entry lifetime.
///
/// Read at lookup time; changing it between calls takes effect immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether lookups consult the store at all (default: false)
    #[serde(default)]
    pub enabled: bool,

    /// Entry lifetime in seconds; 0 disables writes
    #[serde(rename = "timeout", default = "CacheConfig::default_timeout")]
    pub timeout_seconds: u64,
}

impl CacheConfig {
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 9_999_999;

    pub fn enabled(timeout_seconds: u64) -> Self {
        Self {
            enabled: true,
            timeout_seconds,
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Whether fetched results are written back. A zero timeout never stores.
    pub fn writes_entries(&self) -> bool {
        self.enabled && self.timeout_seconds > 0
    }

    fn default_timeout() -> u64 {
        Self::DEFAULT_TIMEOUT_SECONDS
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            timeout_seconds: Self::DEFAULT_TIMEOUT_SECONDS,
        }
    }
}
