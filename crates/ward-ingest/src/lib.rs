//! Hospital operations data ingestion.
//!
//! Loads the four source tables (patients, weekly service statistics, staff,
//! staff schedule) from CSV into Polars DataFrames. Every column is loaded as
//! text; typing is done cell by cell with the helpers in [`polars_utils`] so
//! that malformed values surface as errors in the stage that reads them.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ward_ingest::{SourceFiles, load_tables};
//!
//! let sources = SourceFiles::in_dir(Path::new("data"))?;
//! let tables = load_tables(&sources)?;
//! ```

mod discovery;
mod error;
pub mod polars_utils;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{normalize_header, read_csv_table, validate_encoding};

// === Table Discovery ===
pub use discovery::{LoadedTable, SourceFiles, load_table, load_tables};

// === Cell Helpers ===
pub use polars_utils::{
    any_to_f64, any_to_i64, any_to_text, find_column, format_numeric, has_column, parse_f64,
    parse_i64,
};
