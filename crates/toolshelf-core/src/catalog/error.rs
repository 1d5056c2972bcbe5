//! Catalog load errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the catalog
#[derive(Error, Debug)]
pub enum LoadError {
    /// Catalog file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network/HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// Payload is not a JSON array of tools
    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type LoadResult<T> = Result<T, LoadError>;
