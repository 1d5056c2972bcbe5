//! Core traits and types for local key-value storage

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Unknown storage backend: {0}")]
    UnknownBackend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable string-to-string storage, the local equivalent of browser local storage
///
/// Implementations:
/// - `MemoryKeyValueStore`: in-memory, for tests and ephemeral sessions
/// - `FileKeyValueStore`: a JSON object file on disk
///
/// Reads never fail: a missing or unreadable value is `None`.
pub trait KeyValueStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
