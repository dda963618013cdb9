//! Typed view of the merged configuration

use std::path::PathBuf;
use std::sync::Arc;

use geocoder_store::{CacheStore, FileStore, MemoryStore};
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::cache::CacheConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Memory,
    File,
}

/// Which cache store backs the geocoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub kind: StoreKind,
    /// Root directory for the file store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StoreSettings {
    /// Instantiate the configured store.
    pub fn open(&self) -> Result<Arc<dyn CacheStore>, ConfigError> {
        match self.kind {
            StoreKind::Memory => Ok(Arc::new(MemoryStore::new())),
            StoreKind::File => {
                let path = self.path.as_ref().ok_or_else(|| {
                    ConfigError::ValidationError("store.path is required for the file store".to_string())
                })?;
                Ok(Arc::new(FileStore::new(path)))
            }
        }
    }
}

/// Everything the geocoder reads from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocoderSettings {
    pub cache: CacheConfig,
    pub limit: usize,
    pub store: StoreSettings,
    /// Provider to route lookups to (default: first registered)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_provider: Option<String>,
    /// Fixture files to load as offline providers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixtures: Vec<PathBuf>,
}
