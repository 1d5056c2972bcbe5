//! Persisted theme preference

use std::sync::Arc;

use crate::log_error;
use crate::logging::SharedLogger;
use crate::storage::KeyValueStore;
use crate::types::Theme;

/// Light/dark preference backed by a key-value store
pub struct ThemeStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    current: Theme,
    logger: SharedLogger,
}

impl ThemeStore {
    /// Load the stored theme; absent or unrecognized values are `Light`
    pub fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>, logger: SharedLogger) -> Self {
        let key = key.into();
        let current = store
            .get(&key)
            .map(|value| Theme::from_stored(&value))
            .unwrap_or_default();
        Self { store, key, current, logger }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(e) = self.store.set(&self.key, theme.as_str()) {
            log_error!(self.logger, "[ThemeStore] Failed to persist theme: {}", e);
        }
    }

    /// Switch to the other theme and return it
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("store", &self.store.name())
            .field("key", &self.key)
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use crate::storage::MemoryKeyValueStore;

    #[test]
    fn test_defaults_to_light() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let theme = ThemeStore::load(store, "theme", Arc::new(NoOpLogger));
        assert_eq!(theme.get(), Theme::Light);
    }

    #[test]
    fn test_unrecognized_value_is_light() {
        let store = Arc::new(MemoryKeyValueStore::with_entries([("theme", "solarized")]));
        let theme = ThemeStore::load(store, "theme", Arc::new(NoOpLogger));
        assert_eq!(theme.get(), Theme::Light);
    }

    #[test]
    fn test_set_is_observable_and_persisted() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let mut theme = ThemeStore::load(store.clone(), "theme", Arc::new(NoOpLogger));

        theme.set(Theme::Dark);
        assert_eq!(theme.get(), Theme::Dark);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));

        assert_eq!(theme.toggle(), Theme::Light);
        assert_eq!(store.get("theme").as_deref(), Some("light"));

        let reloaded = ThemeStore::load(store, "theme", Arc::new(NoOpLogger));
        assert_eq!(reloaded.get(), Theme::Light);
    }
}
