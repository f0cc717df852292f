//! CSV export

use crate::error::{Result, ResultExt};
use crate::response::{lookup_path, ApiResponse};
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Header used when a list of scalars is exported without columns
pub const SCALAR_COLUMN: &str = "value";

/// Column names from the keys of the object items, in first-seen order
///
/// A list holding only scalars gets the single column [`SCALAR_COLUMN`].
pub fn infer_columns(response: &ApiResponse) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    let items: Vec<&Value> = match response.value() {
        Value::Array(items) => items.iter().collect(),
        obj @ Value::Object(_) => vec![obj],
        _ => Vec::new(),
    };
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    if columns.is_empty() && items_are_scalars(response) {
        columns.push(SCALAR_COLUMN.to_string());
    }
    columns
}

fn items_are_scalars(response: &ApiResponse) -> bool {
    match response.value() {
        Value::Array(items) => {
            !items.is_empty() && items.iter().all(|v| !v.is_object() && !v.is_array())
        }
        _ => false,
    }
}

/// Render one cell: strings raw, null empty, anything else as compact JSON
pub fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Write a header row and one row per item
///
/// Columns name a key of each item, or a dot-path into it; an empty column list means
/// [`infer_columns`]. A single object is written as one row. Returns the
/// number of data rows written.
pub fn write_csv<W: Write>(response: &ApiResponse, columns: &[String], writer: W) -> Result<usize> {
    let columns = if columns.is_empty() {
        infer_columns(response)
    } else {
        columns.to_vec()
    };

    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(&columns)?;

    let items: &[Value] = match response.value() {
        Value::Array(items) => items.as_slice(),
        obj @ Value::Object(_) => std::slice::from_ref(obj),
        _ => &[],
    };

    let mut rows = 0;
    for item in items {
        let record: Vec<String> = columns
            .iter()
            .map(|column| match item {
                Value::Object(map) => cell(map.get(column).or_else(|| lookup_path(item, column))),
                scalar => {
                    if columns.len() == 1 {
                        cell(Some(scalar))
                    } else {
                        String::new()
                    }
                }
            })
            .collect();
        wtr.write_record(&record)?;
        rows += 1;
    }

    wtr.flush()?;
    Ok(rows)
}

/// Write the response to a CSV file, replacing it if present
pub fn export_csv(
    response: &ApiResponse,
    columns: &[String],
    path: impl AsRef<Path>,
) -> Result<usize> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("Cannot create {}", path.display()))?;
    let rows = write_csv(response, columns, file)?;
    info!("Wrote {rows} rows to {}", path.display());
    Ok(rows)
}
