//! Output module
//!
//! Tabular export of wrapped responses.
//!
//! # Overview
//!
//! - `write_csv` - header row plus one row per list item, to any writer
//! - `export_csv` - the same, to a file on disk
//! - `infer_columns` - column names from the keys of the items

mod csv;

pub use self::csv::{cell, export_csv, infer_columns, write_csv, SCALAR_COLUMN};
