//! Storage backend registry for creating key-value stores by name

use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::file_store::FileKeyValueStore;
use super::memory_store::MemoryKeyValueStore;
use super::traits::{KeyValueStore, StorageError, StorageResult};

/// Factory function type for creating key-value stores
pub type StoreFactory = Box<dyn Fn() -> Arc<dyn KeyValueStore> + Send + Sync>;

/// Definition of a registered storage backend
pub struct BackendDefinition {
    pub name: String,
    pub description: String,
    pub factory: StoreFactory,
}

impl std::fmt::Debug for BackendDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

static REGISTRY: Lazy<RwLock<BTreeMap<String, BackendDefinition>>> = Lazy::new(|| {
    let mut map = BTreeMap::new();

    map.insert(
        "memory".to_string(),
        BackendDefinition {
            name: "memory".to_string(),
            description: "In-memory storage, cleared when the session ends".to_string(),
            factory: Box::new(|| Arc::new(MemoryKeyValueStore::new())),
        },
    );

    map.insert(
        "file".to_string(),
        BackendDefinition {
            name: "file".to_string(),
            description: "JSON file in the user data directory".to_string(),
            factory: Box::new(|| Arc::new(FileKeyValueStore::user())),
        },
    );

    RwLock::new(map)
});

/// Register (or replace) a storage backend
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use toolshelf_core::storage::{register_key_value_store, create_key_value_store, MemoryKeyValueStore};
///
/// register_key_value_store(
///     "scratch",
///     "Scratch storage",
///     Box::new(|| Arc::new(MemoryKeyValueStore::new())),
/// );
/// assert!(create_key_value_store("scratch").is_ok());
/// ```
pub fn register_key_value_store(name: &str, description: &str, factory: StoreFactory) {
    REGISTRY.write().insert(
        name.to_string(),
        BackendDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    );
}

/// Create a store from a registered backend name
pub fn create_key_value_store(name: &str) -> StorageResult<Arc<dyn KeyValueStore>> {
    let registry = REGISTRY.read();
    registry
        .get(name)
        .map(|def| (def.factory)())
        .ok_or_else(|| StorageError::UnknownBackend(name.to_string()))
}

/// List registered backends as `(name, description)` pairs
pub fn list_key_value_stores() -> Vec<(String, String)> {
    REGISTRY
        .read()
        .values()
        .map(|def| (def.name.clone(), def.description.clone()))
        .collect()
}
