//! Built-in defaults (layer 1)

use serde::{Deserialize, Serialize};

use crate::aggregator::DEFAULT_LIMIT;
use crate::cache::CacheConfig;

/// Built-in default configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Cache lookups (default: false)
    pub cache_enabled: bool,

    /// Cache entry lifetime in seconds (default: 9999999)
    pub cache_timeout: u64,

    /// Maximum records per lookup (default: 5)
    pub limit: usize,

    /// Store backend (default: "memory")
    pub store_kind: String,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            cache_enabled: false,
            cache_timeout: CacheConfig::DEFAULT_TIMEOUT_SECONDS,
            limit: DEFAULT_LIMIT,
            store_kind: "memory".to_string(),
        }
    }
}

impl BuiltinDefaults {
    /// Convert to JSON Value for merging
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "cache": {
                "enabled": self.cache_enabled,
                "timeout": self.cache_timeout
            },
            "limit": self.limit,
            "store": {
                "kind": self.store_kind
            }
        })
    }
}
