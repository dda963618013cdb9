use std::fmt;

use geocoder_model::Query;
use sha2::{Digest, Sha256};

/// Prefix shared by every key this crate writes.
pub const CACHE_NAMESPACE: &str = "geocoder.";

/// A namespaced, content-derived cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn for_query(query: &Query) -> Self {
        Self::from_input(&query.key_input())
    }

    /// Derive a key from a raw key input string.
    pub fn from_input(input: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(input.as_bytes());
        Self(format!("{}{}", CACHE_NAMESPACE, hex::encode(hasher.finalize())))
    }

    /// Glob matching every key in the namespace.
    pub fn namespace_pattern() -> String {
        format!("{}*", CACHE_NAMESPACE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
