//! Layered configuration
//!
//! Merges four layers, later layers winning:
//! 1. Built-in defaults
//! 2. User config (~/.config/geocoder/config.toml)
//! 3. Project config (geocoder.toml, or --config)
//! 4. CLI flags

mod defaults;
mod effective;
mod merge;
mod settings;

pub use defaults::BuiltinDefaults;
pub use effective::{
    default_user_config_path, resolve_project_config, ConfigError, ConfigOrigin, ConfigSource,
    EffectiveConfig, PROJECT_CONFIG_FILENAME,
};
pub use merge::{deep_merge, merge_layers};
pub use settings::{GeocoderSettings, StoreKind, StoreSettings};
