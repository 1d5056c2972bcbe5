//! Application state owned by `App`

use crate::preferences::{FavoritesStore, ThemeStore};
use crate::types::{Catalog, Tool, UiSelection};
use super::banner::BannerSlot;
use super::loading::LoadingIndicator;

/// Everything the render layer reads
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub favorites: FavoritesStore,
    pub theme: ThemeStore,
    pub selection: UiSelection,
    /// Catalog positions of the tools currently shown, in catalog order
    pub visible: Vec<usize>,
    pub loading: LoadingIndicator,
    pub banner: BannerSlot,
}

impl AppState {
    pub fn new(favorites: FavoritesStore, theme: ThemeStore) -> Self {
        Self {
            catalog: Catalog::empty(),
            favorites,
            theme,
            selection: UiSelection::default(),
            visible: Vec::new(),
            loading: LoadingIndicator::new(),
            banner: BannerSlot::new(),
        }
    }

    /// Tools currently shown
    pub fn visible_tools(&self) -> impl Iterator<Item = &Tool> + '_ {
        self.visible.iter().filter_map(|&i| self.catalog.get(i))
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible_tools().map(|t| t.id.as_str()).collect()
    }
}
