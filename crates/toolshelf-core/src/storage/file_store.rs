//! File-backed key-value store
//!
//! All entries live in one JSON object file, rewritten in full on every mutation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::traits::{KeyValueStore, StorageResult};

type Entries = BTreeMap<String, String>;

/// Key-value store persisted as a JSON object on disk
///
/// A missing file is an empty store. A file that does not parse is also read
/// as empty, and is replaced by the next write.
pub struct FileKeyValueStore {
    path: PathBuf,
    cache: RwLock<Option<Entries>>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Store under the user data directory (`~/.local/share/toolshelf/storage.json` on Linux)
    pub fn user() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".local/share"));
        data_dir.join("toolshelf").join("storage.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Entries {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Entries::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    fn entries(&self) -> Entries {
        if let Some(entries) = self.cache.read().as_ref() {
            return entries.clone();
        }
        let entries = self.load();
        *self.cache.write() = Some(entries.clone());
        entries
    }

    fn save(&self, entries: Entries) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, content)?;
        *self.cache.write() = Some(entries);
        Ok(())
    }

    /// Drop the cache and re-read the file
    pub fn reload(&self) {
        let entries = self.load();
        *self.cache.write() = Some(entries);
    }
}

impl std::fmt::Debug for FileKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileKeyValueStore")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries();
        entries.insert(key.to_string(), value.to_string());
        self.save(entries)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save(entries)
    }
}
