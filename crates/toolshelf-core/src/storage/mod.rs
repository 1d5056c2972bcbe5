//! Local key-value storage
//!
//! - `KeyValueStore` trait for implementing custom stores
//! - Built-in implementations: `MemoryKeyValueStore`, `FileKeyValueStore`
//! - A registry for creating stores by backend name

mod traits;
mod memory_store;
mod file_store;
mod registry;

pub use traits::{KeyValueStore, StorageError, StorageResult};
pub use memory_store::MemoryKeyValueStore;
pub use file_store::FileKeyValueStore;
pub use registry::{
    register_key_value_store, create_key_value_store, list_key_value_stores,
    BackendDefinition, StoreFactory,
};
