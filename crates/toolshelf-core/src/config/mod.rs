//! Configuration
//!
//! - `Settings`: catalog location, storage backend and keys, banner timing, locale
//! - `FileSettingsProvider`: YAML file-based (user/workspace level)
//! - `Labels`: localized user-visible strings

mod settings;
mod labels;
mod file;

pub use settings::{Settings, StorageSettings, CatalogLocation, DEFAULT_CATALOG_PATH};
pub use labels::{Labels, Locale};
pub use file::{FileSettingsProvider, ConfigLevel};

/// Errors that can occur while reading or writing settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
