//! `App` shared between concurrent callers

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::catalog::{source_for, CatalogSource};
use crate::render::RenderBackend;
use crate::view::Page;
use super::loading::LoadingIndicator;
use super::{App, Event};

/// Cloneable handle to one `App`
///
/// The app lock is released while the catalog is fetched, so renders issued
/// during the fetch see the loading indicator.
#[derive(Clone)]
pub struct SharedApp {
    inner: Arc<Mutex<App>>,
    loading: LoadingIndicator,
}

impl SharedApp {
    pub fn new(app: App) -> Self {
        let loading = app.state().loading.clone();
        Self {
            inner: Arc::new(Mutex::new(app)),
            loading,
        }
    }

    /// Load the catalog from the configured location
    pub async fn init_from_settings(&self) {
        let pending = {
            let app = self.inner.lock().await;
            app.begin_load(source_for(&app.settings().catalog))
        };
        let loaded = pending.fetch().await;
        self.inner.lock().await.finish_load(loaded);
    }

    /// Load the catalog from `source`
    pub async fn init(&self, source: Box<dyn CatalogSource>) {
        let pending = self.inner.lock().await.begin_load(source);
        let loaded = pending.fetch().await;
        self.inner.lock().await.finish_load(loaded);
    }

    pub async fn dispatch(&self, event: Event) {
        self.inner.lock().await.dispatch(event);
    }

    pub async fn page(&self) -> Page {
        self.inner.lock().await.page()
    }

    pub async fn render<B: RenderBackend>(&self, backend: &mut B) -> B::Output {
        let page = self.page().await;
        backend.render(&page)
    }

    /// Whether a load is in flight; does not wait for the app lock
    pub fn is_loading(&self) -> bool {
        self.loading.is_visible()
    }

    pub async fn lock(&self) -> MutexGuard<'_, App> {
        self.inner.lock().await
    }
}

impl std::fmt::Debug for SharedApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedApp")
            .field("loading", &self.is_loading())
            .finish()
    }
}
