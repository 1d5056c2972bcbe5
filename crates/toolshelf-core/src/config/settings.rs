//! Application settings

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::storage::{
    create_key_value_store, FileKeyValueStore, KeyValueStore, StorageResult,
};
use super::labels::{Labels, Locale};

/// Default relative path of the catalog resource
pub const DEFAULT_CATALOG_PATH: &str = "data/tools.json";

/// Where the catalog is fetched from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "location", rename_all = "lowercase")]
pub enum CatalogLocation {
    /// Path on the local filesystem
    File(PathBuf),
    /// HTTP(S) URL
    Url(String),
}

impl Default for CatalogLocation {
    fn default() -> Self {
        CatalogLocation::File(PathBuf::from(DEFAULT_CATALOG_PATH))
    }
}

impl CatalogLocation {
    /// Interpret `location` as a URL when it has an http(s) scheme, else a path
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            CatalogLocation::Url(location.to_string())
        } else {
            CatalogLocation::File(PathBuf::from(location))
        }
    }
}

/// Persisted-state settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Registered backend name (`memory`, `file`)
    pub backend: String,
    /// File path for the `file` backend; the user data dir when unset
    pub path: Option<PathBuf>,
    pub favorites_key: String,
    pub theme_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "file".to_string(),
            path: None,
            favorites_key: "favorites".to_string(),
            theme_key: "theme".to_string(),
        }
    }
}

impl StorageSettings {
    /// Open the configured key-value store
    pub fn open(&self) -> StorageResult<Arc<dyn KeyValueStore>> {
        match (&self.path, self.backend.as_str()) {
            (Some(path), "file") => Ok(Arc::new(FileKeyValueStore::new(path))),
            _ => create_key_value_store(&self.backend),
        }
    }
}

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogLocation,
    pub storage: StorageSettings,
    /// How long the load-error banner stays visible
    pub banner_duration_ms: u64,
    /// Re-apply the search box query when the category changes
    pub reapply_search_on_category_change: bool,
    pub locale: Locale,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: CatalogLocation::default(),
            storage: StorageSettings::default(),
            banner_duration_ms: 3000,
            reapply_search_on_category_change: false,
            locale: Locale::default(),
        }
    }
}

impl Settings {
    /// Settings suitable for tests: in-memory storage, no disk access
    pub fn in_memory() -> Self {
        Self {
            storage: StorageSettings {
                backend: "memory".to_string(),
                ..StorageSettings::default()
            },
            ..Self::default()
        }
    }

    pub fn banner_duration(&self) -> Duration {
        Duration::from_millis(self.banner_duration_ms)
    }

    pub fn labels(&self) -> Labels {
        Labels::for_locale(self.locale)
    }
}
