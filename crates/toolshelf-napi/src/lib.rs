//! Node.js bindings for Toolshelf via napi-rs
//!
//! The host page forwards DOM events here and paints the returned markup
//! into its regions (`toolsGrid`, `categoryList`, ...).

#![deny(clippy::all)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use napi::bindgen_prelude::*;
use napi_derive::napi;

use toolshelf_core::catalog::import::{convert_file, ColumnMapping as CoreColumnMapping};
use toolshelf_core::catalog::source_for;
use toolshelf_core::config::{CatalogLocation, FileSettingsProvider, Locale};
use toolshelf_core::logging::{ConsoleLogger, SharedLogger};
use toolshelf_core::render::{HtmlRenderer, RenderBackend, RenderedPage as CoreRenderedPage};
use toolshelf_core::storage::list_key_value_stores;
use toolshelf_core::{App, CategoryFilter, Event, Settings, SharedApp};

fn to_napi_error(e: impl std::fmt::Display) -> Error {
    Error::from_reason(e.to_string())
}

// ============================================================================
// Types
// ============================================================================

/// Markup for each region of the host page
#[napi(object)]
pub struct RenderedPage {
    /// Value for the root `data-theme` attribute
    pub theme: String,
    pub theme_toggle: String,
    pub favorites_toggle: String,
    pub header: String,
    pub category_list: String,
    pub tool_grid: String,
    pub loading: String,
    pub banner: String,
}

impl From<CoreRenderedPage> for RenderedPage {
    fn from(page: CoreRenderedPage) -> Self {
        Self {
            theme: page.theme,
            theme_toggle: page.theme_toggle,
            favorites_toggle: page.favorites_toggle,
            header: page.header,
            category_list: page.category_list,
            tool_grid: page.tool_grid,
            loading: page.loading,
            banner: page.banner,
        }
    }
}

/// Overrides applied on top of the settings file
#[napi(object)]
#[derive(Default)]
pub struct DirectoryOptions {
    /// Directory searched for `.config/toolshelf/config.yaml` (default: cwd)
    pub workspace: Option<String>,
    /// Catalog path or http(s) URL (default `data/tools.json`)
    pub catalog: Option<String>,
    /// Storage backend name (`file`, `memory`)
    pub storage_backend: Option<String>,
    /// File path for the `file` backend
    pub storage_path: Option<String>,
    /// `en` or `zh-CN`
    pub locale: Option<String>,
    pub banner_duration_ms: Option<u32>,
    pub reapply_search_on_category_change: Option<bool>,
}

impl DirectoryOptions {
    /// Load the workspace or user settings file, then apply these overrides
    fn into_settings(self) -> Result<Settings> {
        let workspace = match &self.workspace {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir().map_err(to_napi_error)?,
        };
        let settings = FileSettingsProvider::discover(workspace)
            .settings()
            .map_err(to_napi_error)?;
        self.apply(settings)
    }

    fn apply(self, mut settings: Settings) -> Result<Settings> {
        if let Some(catalog) = self.catalog {
            settings.catalog = CatalogLocation::parse(&catalog);
        }
        if let Some(backend) = self.storage_backend {
            settings.storage.backend = backend;
        }
        if let Some(path) = self.storage_path {
            settings.storage.path = Some(PathBuf::from(path));
        }
        if let Some(locale) = self.locale {
            settings.locale = match locale.as_str() {
                "en" => Locale::En,
                "zh-CN" => Locale::ZhCn,
                other => return Err(Error::from_reason(format!("Unsupported locale: {}", other))),
            };
        }
        if let Some(ms) = self.banner_duration_ms {
            settings.banner_duration_ms = u64::from(ms);
        }
        if let Some(reapply) = self.reapply_search_on_category_change {
            settings.reapply_search_on_category_change = reapply;
        }
        Ok(settings)
    }
}

#[napi(object)]
pub struct StorageBackendInfo {
    pub name: String,
    pub description: String,
}

#[napi(object)]
pub struct ColumnMapping {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl From<ColumnMapping> for CoreColumnMapping {
    fn from(mapping: ColumnMapping) -> Self {
        let defaults = CoreColumnMapping::default();
        Self {
            name: mapping.name.unwrap_or(defaults.name),
            url: mapping.url.unwrap_or(defaults.url),
            description: mapping.description.unwrap_or(defaults.description),
            category: mapping.category.unwrap_or(defaults.category),
        }
    }
}

// ============================================================================
// Directory
// ============================================================================

/// The directory browser bound to one host page
#[napi]
pub struct Directory {
    inner: SharedApp,
}

#[napi]
impl Directory {
    #[napi(constructor)]
    pub fn new(options: Option<DirectoryOptions>) -> Result<Self> {
        let settings = options.unwrap_or_default().into_settings()?;
        let logger: SharedLogger = Arc::new(ConsoleLogger::new());
        let app = App::from_settings(settings, logger).map_err(to_napi_error)?;
        Ok(Self {
            inner: SharedApp::new(app),
        })
    }

    /// Load the catalog from `location`, or the configured one
    ///
    /// `render()` calls made while this is pending show the loading indicator.
    #[napi]
    pub async fn init(&self, location: Option<String>) -> Result<RenderedPage> {
        match location {
            Some(location) => self.inner.init(source_for(&CatalogLocation::parse(&location))).await,
            None => self.inner.init_from_settings().await,
        }
        Ok(self.inner.render(&mut HtmlRenderer::new()).await.into())
    }

    /// Whether a catalog load is in flight
    #[napi(getter)]
    pub fn loading(&self) -> bool {
        self.inner.is_loading()
    }

    /// Apply a `data-action` / `data-arg` pair taken from the clicked element
    #[napi]
    pub async fn dispatch(&self, action: String, arg: Option<String>) -> Result<RenderedPage> {
        let event = Event::from_action(&action, arg.as_deref())
            .ok_or_else(|| Error::from_reason(format!("Unknown action: {}", action)))?;
        Ok(self.apply(event).await)
    }

    #[napi]
    pub async fn search(&self, query: String) -> RenderedPage {
        self.apply(Event::Search(query)).await
    }

    /// Select a category; `null` selects all
    #[napi]
    pub async fn select_category(&self, category: Option<String>) -> RenderedPage {
        let filter = category.map(CategoryFilter::Named).unwrap_or_default();
        self.apply(Event::SelectCategory(filter)).await
    }

    #[napi]
    pub async fn toggle_favorites_view(&self) -> RenderedPage {
        self.apply(Event::ToggleFavoritesView).await
    }

    #[napi]
    pub async fn toggle_favorite(&self, id: String) -> RenderedPage {
        self.apply(Event::ToggleFavorite(id)).await
    }

    #[napi]
    pub async fn toggle_theme(&self) -> RenderedPage {
        self.apply(Event::ToggleTheme).await
    }

    /// Render the current state without changing it
    ///
    /// Hosts poll this to pick up the banner's auto-dismissal.
    #[napi]
    pub async fn render(&self) -> RenderedPage {
        self.inner.render(&mut HtmlRenderer::new()).await.into()
    }

    async fn apply(&self, event: Event) -> RenderedPage {
        let mut app = self.inner.lock().await;
        app.dispatch(event);
        HtmlRenderer::new().render(&app.page()).into()
    }
}

// ============================================================================
// Functions
// ============================================================================

#[napi]
pub fn list_storage_backends() -> Vec<StorageBackendInfo> {
    list_key_value_stores()
        .into_iter()
        .map(|(name, description)| StorageBackendInfo { name, description })
        .collect()
}

/// Convert a workbook (or exported JSON rows) into a catalog file; returns the tool count
#[napi]
pub fn import_catalog(input: String, output: String, mapping: Option<ColumnMapping>) -> Result<u32> {
    let mapping = mapping.map(CoreColumnMapping::from).unwrap_or_default();
    let count = convert_file(
        Path::new(&input),
        Path::new(&output),
        &mapping,
        Arc::new(ConsoleLogger::new()),
    )
    .map_err(to_napi_error)?;
    u32::try_from(count).map_err(to_napi_error)
}
