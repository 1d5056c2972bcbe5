//! Event wiring and bootstrap
//!
//! `App` owns the state and runs the page state machine:
//!
//! ```text
//!   Search(q) ─────────────► set query ──► recompute (category + query + favorites view)
//!   SelectCategory(c) ─────► set category ──► recompute (category + favorites view)
//!   ToggleFavoritesView ───► flip ──► SelectCategory(current)
//!   ToggleFavorite(id) ────► toggle + persist ──► SelectCategory(current)
//!   ToggleTheme ───────────► flip + persist
//! ```
//!
//! Every event is handled synchronously to completion; rendering reads the
//! resulting state through `App::page`. Loading the catalog is split into
//! `begin_load` / `PendingLoad::fetch` / `finish_load` so the fetch can run
//! without holding the app; `SharedApp` drives that for concurrent hosts.

mod banner;
mod event;
mod loading;
mod shared;
mod state;

pub use banner::{Banner, BannerSlot};
pub use event::Event;
pub use loading::{LoadingGuard, LoadingIndicator};
pub use shared::SharedApp;
pub use state::AppState;

use std::sync::Arc;

use crate::catalog::{source_for, CatalogSource, CatalogStore, LoadResult};
use crate::config::{Labels, Settings};
use crate::filter::{compute_view_indices, ViewQuery};
use crate::logging::SharedLogger;
use crate::{log_debug, log_error};
use crate::preferences::{FavoritesStore, ThemeStore};
use crate::render::RenderBackend;
use crate::storage::{KeyValueStore, StorageResult};
use crate::types::{Catalog, CategoryFilter, Theme};
use crate::view::{build_page, Page};

/// The directory browser
pub struct App {
    state: AppState,
    settings: Settings,
    labels: Labels,
    logger: SharedLogger,
}

impl App {
    /// Create the app, loading favorites and theme from `storage`
    pub fn new(settings: Settings, storage: Arc<dyn KeyValueStore>, logger: SharedLogger) -> Self {
        let favorites = FavoritesStore::load(
            Arc::clone(&storage),
            settings.storage.favorites_key.clone(),
            Arc::clone(&logger),
        );
        let theme = ThemeStore::load(storage, settings.storage.theme_key.clone(), Arc::clone(&logger));

        Self {
            state: AppState::new(favorites, theme),
            labels: settings.labels(),
            settings,
            logger,
        }
    }

    /// Create the app with the storage backend named in `settings`
    pub fn from_settings(settings: Settings, logger: SharedLogger) -> StorageResult<Self> {
        let storage = settings.storage.open()?;
        Ok(Self::new(settings, storage, logger))
    }

    /// Load the catalog from the configured location
    pub async fn init_from_settings(&mut self) {
        let source = source_for(&self.settings.catalog);
        self.init(source).await;
    }

    /// Load the catalog and show the initial view
    ///
    /// A failed load is logged and shown as a transient banner; the app keeps
    /// running with an empty catalog.
    pub async fn init(&mut self, source: Box<dyn CatalogSource>) {
        let loaded = self.begin_load(source).fetch().await;
        self.finish_load(loaded);
    }

    /// Show the loading indicator and prepare a fetch from `source`
    ///
    /// The returned load does not borrow the app. The indicator stays visible
    /// until the fetched result is handed to `finish_load` (or dropped).
    pub fn begin_load(&self, source: Box<dyn CatalogSource>) -> PendingLoad {
        PendingLoad {
            store: CatalogStore::new(source, Arc::clone(&self.logger)),
            loading: self.state.loading.acquire(),
        }
    }

    /// Apply a fetched catalog, then hide the loading indicator
    pub fn finish_load(&mut self, loaded: FetchedCatalog) {
        let FetchedCatalog { result, loading } = loaded;

        match result {
            Ok(catalog) => {
                self.state.catalog = catalog;
                self.select_category(CategoryFilter::All);
            }
            Err(e) => {
                log_error!(self.logger, "[App] Failed to load catalog: {}", e);
                self.state
                    .banner
                    .show(self.labels.load_failed, self.settings.banner_duration());
                self.state.visible.clear();
            }
        }
        drop(loading);
    }

    /// Apply one user event
    pub fn dispatch(&mut self, event: Event) {
        log_debug!(self.logger, "[App] {:?}", event);

        match event {
            Event::Search(query) => {
                self.state.selection.search_query = query;
                self.recompute(true);
            }
            Event::SelectCategory(category) => self.select_category(category),
            Event::ToggleFavoritesView => {
                self.state.selection.showing_favorites = !self.state.selection.showing_favorites;
                self.reselect_category();
            }
            Event::ToggleFavorite(id) => {
                self.state.favorites.toggle(&id);
                self.reselect_category();
            }
            Event::ToggleTheme => {
                let theme = self.state.theme.toggle();
                log_debug!(self.logger, "[App] Theme is now {}", theme);
            }
        }
    }

    fn reselect_category(&mut self) {
        let current = self.state.selection.current_category.clone();
        self.select_category(current);
    }

    fn select_category(&mut self, category: CategoryFilter) {
        self.state.selection.current_category = category;
        self.recompute(self.settings.reapply_search_on_category_change);
    }

    fn recompute(&mut self, with_search: bool) {
        let selection = &self.state.selection;
        let mut query = ViewQuery::new()
            .category(selection.current_category.clone())
            .favorites_only(selection.showing_favorites);
        if with_search {
            query = query.search(&selection.search_query);
        }

        let favorites = &self.state.favorites;
        self.state.visible =
            compute_view_indices(&self.state.catalog, &query, |id| favorites.is_favorite(id));
    }

    /// Project the current state into a page
    pub fn page(&self) -> Page {
        build_page(&self.state, &self.labels)
    }

    /// Render the current state through `backend`
    pub fn render<B: RenderBackend>(&self, backend: &mut B) -> B::Output {
        backend.render(&self.page())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.state.theme.get()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }
}

/// A catalog fetch started by `App::begin_load`
pub struct PendingLoad {
    store: CatalogStore,
    loading: LoadingGuard,
}

impl PendingLoad {
    pub async fn fetch(self) -> FetchedCatalog {
        FetchedCatalog {
            result: self.store.load().await,
            loading: self.loading,
        }
    }
}

impl std::fmt::Debug for PendingLoad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingLoad").field("store", &self.store).finish()
    }
}

/// Outcome of a fetch, still holding the loading indicator
#[derive(Debug)]
pub struct FetchedCatalog {
    result: LoadResult<Catalog>,
    loading: LoadingGuard,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("tools", &self.state.catalog.len())
            .field("selection", &self.state.selection)
            .field("visible", &self.state.visible.len())
            .finish()
    }
}
