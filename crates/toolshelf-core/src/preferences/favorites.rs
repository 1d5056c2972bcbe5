//! Persisted set of favorite tool ids

use std::sync::Arc;

use crate::logging::SharedLogger;
use crate::{log_error, log_warn};
use crate::storage::KeyValueStore;

/// Favorite tool ids, persisted as a JSON array on every mutation
///
/// Ids keep insertion order, so adding and then removing the same id leaves
/// the stored value exactly as it was.
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    ids: Vec<String>,
    logger: SharedLogger,
}

impl FavoritesStore {
    /// Load favorites from `store`; a missing or malformed value is an empty set
    pub fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>, logger: SharedLogger) -> Self {
        let key = key.into();
        let ids = match store.get(&key) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(mut ids) => {
                    let mut seen = std::collections::HashSet::new();
                    ids.retain(|id| seen.insert(id.clone()));
                    ids
                }
                Err(e) => {
                    log_warn!(logger, "[FavoritesStore] Ignoring malformed value under '{}': {}", key, e);
                    Vec::new()
                }
            },
        };

        Self { store, key, ids, logger }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Flip membership of `id` and persist; returns the new status
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = match self.ids.iter().position(|f| f == id) {
            Some(pos) => {
                self.ids.remove(pos);
                false
            }
            None => {
                self.ids.push(id.to_string());
                true
            }
        };
        self.persist();
        now_favorite
    }

    /// Favorite ids in insertion order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.ids)
            .map_err(crate::storage::StorageError::from)
            .and_then(|value| self.store.set(&self.key, &value));
        if let Err(e) = result {
            log_error!(self.logger, "[FavoritesStore] Failed to persist favorites: {}", e);
        }
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("store", &self.store.name())
            .field("key", &self.key)
            .field("ids", &self.ids)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogLevel, MemoryLogger, NoOpLogger};
    use crate::storage::MemoryKeyValueStore;

    fn store_with(value: Option<&str>) -> Arc<MemoryKeyValueStore> {
        let store = MemoryKeyValueStore::new();
        if let Some(value) = value {
            store.set("favorites", value).unwrap();
        }
        Arc::new(store)
    }

    #[test]
    fn test_absent_value_is_empty() {
        let favorites = FavoritesStore::load(store_with(None), "favorites", Arc::new(NoOpLogger));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_malformed_value_is_empty_and_logged() {
        let logger = Arc::new(MemoryLogger::new());
        let favorites = FavoritesStore::load(store_with(Some("{oops")), "favorites", logger.clone());

        assert!(favorites.is_empty());
        assert_eq!(logger.at(LogLevel::Warn).len(), 1);
        assert!(logger.at(LogLevel::Error).is_empty());
    }

    #[test]
    fn test_wrong_shape_is_empty() {
        let favorites = FavoritesStore::load(store_with(Some("[1, 2]")), "favorites", Arc::new(NoOpLogger));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_persists_full_set() {
        let store = store_with(None);
        let mut favorites = FavoritesStore::load(store.clone(), "favorites", Arc::new(NoOpLogger));

        assert!(favorites.toggle("b"));
        assert!(favorites.toggle("a"));
        assert!(favorites.is_favorite("a"));
        assert_eq!(store.get("favorites").as_deref(), Some(r#"["b","a"]"#));

        assert!(!favorites.toggle("b"));
        assert!(!favorites.is_favorite("b"));
        assert_eq!(store.get("favorites").as_deref(), Some(r#"["a"]"#));
    }

    #[test]
    fn test_double_toggle_restores_membership_and_stored_value() {
        let store = store_with(Some(r#"["b","a"]"#));
        let mut favorites = FavoritesStore::load(store.clone(), "favorites", Arc::new(NoOpLogger));

        favorites.toggle("c");
        favorites.toggle("c");

        assert!(!favorites.is_favorite("c"));
        assert_eq!(favorites.ids(), &["b".to_string(), "a".to_string()]);
        assert_eq!(store.get("favorites").as_deref(), Some(r#"["b","a"]"#));
    }

    #[test]
    fn test_reload_sees_persisted_value() {
        let store = store_with(None);
        let mut favorites = FavoritesStore::load(store.clone(), "favorites", Arc::new(NoOpLogger));
        favorites.toggle("x");

        let reloaded = FavoritesStore::load(store, "favorites", Arc::new(NoOpLogger));
        assert!(reloaded.is_favorite("x"));
    }

    #[test]
    fn test_duplicate_stored_ids_collapse() {
        let favorites = FavoritesStore::load(store_with(Some(r#"["a","a"]"#)), "favorites", Arc::new(NoOpLogger));
        assert_eq!(favorites.len(), 1);
    }
}
