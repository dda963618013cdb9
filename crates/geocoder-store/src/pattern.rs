//! Key patterns for bulk removal

use globset::{Glob, GlobMatcher};

use crate::StoreResult;

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// A compiled `forget` pattern: either an exact key or a glob.
#[derive(Debug, Clone)]
pub enum KeyPattern {
    Exact(String),
    Glob(GlobMatcher),
}

impl KeyPattern {
    pub fn new(pattern: &str) -> StoreResult<Self> {
        if pattern.contains(GLOB_META) {
            Ok(Self::Glob(Glob::new(pattern)?.compile_matcher()))
        } else {
            Ok(Self::Exact(pattern.to_string()))
        }
    }

    pub fn matches(&self, key: &str) -> bool {
        match self {
            Self::Exact(exact) => exact == key,
            Self::Glob(matcher) => matcher.is_match(key),
        }
    }
}
