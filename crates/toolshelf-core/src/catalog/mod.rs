//! Catalog loading and import
//!
//! The catalog is fetched once at startup from a `CatalogSource` and never
//! mutated afterwards. `import` prepares the catalog file from spreadsheet rows.

mod error;
mod source;
mod store;
pub mod import;

pub use error::{LoadError, LoadResult};
pub use source::{
    CatalogSource, FileCatalogSource, HttpCatalogSource, StaticCatalogSource, source_for,
};
pub use store::{CatalogStore, parse_catalog};
pub use import::{ColumnMapping, ImportError, ImportResult};
