//! Lookup queries

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ProviderError;

/// An immutable lookup input: free-text address or a coordinate pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    Address(String),
    Point { latitude: f64, longitude: f64 },
}

impl Query {
    /// Build an address query, rejecting empty input.
    pub fn address(address: impl Into<String>) -> Result<Self, ProviderError> {
        let address = address.into();
        if address.is_empty() {
            return Err(ProviderError::InvalidQuery(
                "address must not be empty".to_string(),
            ));
        }
        Ok(Self::Address(address))
    }

    /// Build a coordinate query.
    pub fn point(latitude: f64, longitude: f64) -> Self {
        Self::Point { latitude, longitude }
    }

    /// The string a cache key is derived from.
    ///
    /// Addresses are used verbatim; points render as `"{lat},{lon}"`.
    /// Negative zero renders as `0` so equal points share a key.
    pub fn key_input(&self) -> String {
        match self {
            Self::Address(address) => address.clone(),
            Self::Point { latitude, longitude } => {
                format!("{},{}", latitude + 0.0, longitude + 0.0)
            }
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key_input())
    }
}
