//! Spreadsheet import
//!
//! Converts the first sheet of a workbook (`.xlsx`, `.xls`, `.ods`), or rows
//! already exported as a JSON array of objects keyed by column header, into
//! catalog tools and writes the catalog file.

use std::fs;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::log_info;
use crate::logging::SharedLogger;
use crate::types::Tool;

/// Category given to rows with an empty category cell
pub const UNCATEGORIZED: &str = "未分类";

/// Errors that can occur during import
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Workbook has no sheets")]
    NoSheet,
}

pub type ImportResult<T> = Result<T, ImportError>;

/// Which column header feeds each tool field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub name: String,
    pub url: String,
    pub description: String,
    pub category: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            name: "网站名称".to_string(),
            url: "网址".to_string(),
            description: "备注".to_string(),
            category: "类型".to_string(),
        }
    }
}

fn cell(row: &Map<String, Value>, column: &str) -> Option<String> {
    match row.get(column)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Convert rows to tools; ids are the 1-based row number
///
/// A missing description is written as `""`.
pub fn import_rows(rows: &[Map<String, Value>], mapping: &ColumnMapping) -> Vec<Tool> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let description = Some(cell(row, &mapping.description).unwrap_or_default());
            let category = cell(row, &mapping.category)
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNCATEGORIZED.to_string());
            Tool {
                id: (index + 1).to_string(),
                name: cell(row, &mapping.name).unwrap_or_default(),
                description,
                category,
                url: cell(row, &mapping.url).unwrap_or_default(),
            }
        })
        .collect()
}

/// Parse a JSON array of row objects and convert it
pub fn import_json(payload: &str, mapping: &ColumnMapping) -> ImportResult<Vec<Tool>> {
    let rows: Vec<Map<String, Value>> = serde_json::from_str(payload)?;
    Ok(import_rows(&rows, mapping))
}

fn sheet_value(data: &Data) -> Value {
    match data {
        Data::Empty => Value::Null,
        Data::String(s) if s.is_empty() => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => Value::from(*i),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Value::from(*f as i64),
        Data::Float(f) => Value::from(*f),
        Data::Bool(b) => Value::Bool(*b),
        other => Value::String(other.to_string()),
    }
}

/// Turn a sheet into row objects keyed by the first row's headers
///
/// Blank rows are skipped and do not consume an id.
pub fn sheet_rows(range: &Range<Data>) -> Vec<Map<String, Value>> {
    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|h| h.to_string().trim().to_string()).collect(),
        None => return Vec::new(),
    };

    rows.filter(|row| row.iter().any(|c| !matches!(sheet_value(c), Value::Null)))
        .map(|row| {
            headers
                .iter()
                .zip(row)
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, data)| (header.clone(), sheet_value(data)))
                .collect()
        })
        .collect()
}

/// Read the first sheet of a workbook and convert it
pub fn import_workbook(path: &Path, mapping: &ColumnMapping) -> ImportResult<Vec<Tool>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or(ImportError::NoSheet)??;
    Ok(import_rows(&sheet_rows(&range), mapping))
}

/// Write tools as pretty JSON, creating the parent directory
pub fn write_catalog(path: &Path, tools: &[Tool]) -> ImportResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(tools)?)?;
    Ok(())
}

/// Convert a workbook, or a `.json` rows file, into a catalog file
pub fn convert_file(
    input: &Path,
    output: &Path,
    mapping: &ColumnMapping,
    logger: SharedLogger,
) -> ImportResult<usize> {
    log_info!(logger, "[Import] Reading rows from {}", input.display());
    let is_json = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let tools = if is_json {
        import_json(&fs::read_to_string(input)?, mapping)?
    } else {
        import_workbook(input, mapping)?
    };
    write_catalog(output, &tools)?;
    log_info!(logger, "[Import] Wrote {} tools to {}", tools.len(), output.display());
    Ok(tools.len())
}
