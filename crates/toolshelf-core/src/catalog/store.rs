//! Catalog store: one-shot load of the tool list

use crate::logging::SharedLogger;
use crate::{log_debug, log_info};
use crate::types::{Catalog, Tool};
use super::error::LoadResult;
use super::source::CatalogSource;

/// Parse a JSON array of tools into a catalog
pub fn parse_catalog(payload: &str) -> LoadResult<Catalog> {
    let tools: Vec<Tool> = serde_json::from_str(payload)?;
    Ok(Catalog::from_tools(tools))
}

/// Loads the catalog from its source
///
/// The catalog is read-only once loaded; there is no update or delete.
pub struct CatalogStore {
    source: Box<dyn CatalogSource>,
    logger: SharedLogger,
}

impl CatalogStore {
    pub fn new(source: Box<dyn CatalogSource>, logger: SharedLogger) -> Self {
        Self { source, logger }
    }

    /// Fetch and parse the catalog
    pub async fn load(&self) -> LoadResult<Catalog> {
        log_debug!(self.logger, "[CatalogStore] Loading catalog from {}", self.source.describe());

        let payload = self.source.fetch().await?;
        let catalog = parse_catalog(&payload)?;

        log_info!(
            self.logger,
            "[CatalogStore] Loaded {} tools in {} categories",
            catalog.len(),
            catalog.categories().len()
        );
        Ok(catalog)
    }
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("source", &self.source.describe())
            .finish()
    }
}
