//! Catalog sources: where the raw JSON payload comes from

use std::path::PathBuf;

use async_trait::async_trait;

use crate::config::CatalogLocation;
use super::error::{LoadError, LoadResult};

/// Provider of the raw catalog payload
///
/// Implementations:
/// - `FileCatalogSource`: a file on disk
/// - `HttpCatalogSource`: a plain GET of a URL
/// - `StaticCatalogSource`: an in-memory payload
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Where the payload comes from, for log lines
    fn describe(&self) -> String;

    /// Fetch the raw payload
    async fn fetch(&self) -> LoadResult<String>;
}

/// Reads the catalog from a file
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    async fn fetch(&self) -> LoadResult<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Fetches the catalog over HTTP with no custom headers or auth
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> LoadResult<String> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Serves a payload held in memory
#[derive(Debug, Clone)]
pub struct StaticCatalogSource {
    payload: String,
}

impl StaticCatalogSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    async fn fetch(&self) -> LoadResult<String> {
        Ok(self.payload.clone())
    }
}

/// Build the source for a configured location
pub fn source_for(location: &CatalogLocation) -> Box<dyn CatalogSource> {
    match location {
        CatalogLocation::File(path) => Box::new(FileCatalogSource::new(path.clone())),
        CatalogLocation::Url(url) => Box::new(HttpCatalogSource::new(url.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_source_reads_payload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tools.json");
        std::fs::write(&path, "[]").unwrap();

        let source = FileCatalogSource::new(&path);
        assert_eq!(source.fetch().await.unwrap(), "[]");
        assert!(source.describe().starts_with("file:"));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let source = FileCatalogSource::new(dir.path().join("missing.json"));
        assert!(matches!(source.fetch().await, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_source_for_location() {
        let url = source_for(&CatalogLocation::parse("https://example.com/tools.json"));
        assert_eq!(url.describe(), "https://example.com/tools.json");

        let file = source_for(&CatalogLocation::default());
        assert_eq!(file.describe(), "file:data/tools.json");
    }
}
