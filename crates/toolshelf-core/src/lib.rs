//! Toolshelf Core
//!
//! Runtime-agnostic tool directory browser.
//! This crate holds everything except the host page itself, so it can be
//! driven from any environment (Node.js via napi-rs, tests, a native shell).
//!
//! ## Flow
//!
//! ```text
//!  CatalogSource ──► CatalogStore ──► Catalog ─┐
//!                                              ├─► filter ──► AppState ──► view::Page ──► RenderBackend
//!  KeyValueStore ──► Favorites / Theme ────────┘                 ▲
//!                                                                │
//!                                   host events ──► App::dispatch┘
//! ```
//!
//! ```rust,ignore
//! use toolshelf_core::{App, Event, Settings, ConsoleLogger, HtmlDocument};
//!
//! let mut app = App::from_settings(Settings::default(), Arc::new(ConsoleLogger::new()))?;
//! app.init_from_settings().await;
//!
//! app.dispatch(Event::Search("figma".into()));
//! let mut document = HtmlDocument::new();
//! app.render(&mut document);
//! ```

pub mod types;
pub mod logging;
pub mod config;
pub mod storage;
pub mod preferences;
pub mod catalog;
pub mod filter;
pub mod view;
pub mod render;
pub mod app;

pub use types::{Tool, Catalog, Theme, CategoryFilter, UiSelection};

pub use logging::{Logger, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use config::{Settings, Labels, Locale, CatalogLocation, FileSettingsProvider};

pub use storage::{
    KeyValueStore, StorageError, StorageResult,
    MemoryKeyValueStore, FileKeyValueStore,
    create_key_value_store, list_key_value_stores,
};

pub use preferences::{FavoritesStore, ThemeStore};

pub use catalog::{
    CatalogSource, CatalogStore, LoadError, LoadResult,
    FileCatalogSource, HttpCatalogSource, StaticCatalogSource,
};

pub use filter::{ViewQuery, compute_view, compute_view_indices};

pub use view::{Page, Node, Element};

pub use render::{RenderBackend, HtmlRenderer, HtmlDocument, RenderedPage, Target};

pub use app::{App, AppState, Event, SharedApp};
