//! Locating and loading the four source tables.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::debug;

use ward_model::TableKind;

use crate::error::{IngestError, Result};
use crate::polars_utils::has_column;
use crate::reader::read_csv_table;

/// Where each source table lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFiles {
    paths: BTreeMap<TableKind, PathBuf>,
}

impl SourceFiles {
    /// Default file names inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Result<Self> {
        if !data_dir.is_dir() {
            return Err(IngestError::DirectoryNotFound {
                path: data_dir.to_path_buf(),
            });
        }
        let paths = TableKind::ALL
            .into_iter()
            .map(|table| (table, data_dir.join(table.default_file_name())))
            .collect();
        Ok(Self { paths })
    }

    /// Replace the path for one table. Relative paths are taken as given.
    pub fn with_path(mut self, table: TableKind, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(table, path.into());
        self
    }

    pub fn path(&self, table: TableKind) -> Option<&Path> {
        self.paths.get(&table).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TableKind, &Path)> {
        self.paths.iter().map(|(table, path)| (*table, path.as_path()))
    }
}

/// A source table loaded into memory.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: TableKind,
    pub path: PathBuf,
    pub data: DataFrame,
}

/// Load a single table and check it has the columns the pipeline reads.
pub fn load_table(table: TableKind, path: &Path) -> Result<LoadedTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            table,
            path: path.to_path_buf(),
        });
    }
    let data = read_csv_table(path)?;
    for column in table.required_columns() {
        if !has_column(&data, column) {
            return Err(IngestError::MissingColumn {
                table,
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    debug!(
        table = %table,
        path = %path.display(),
        rows = data.height(),
        columns = data.width(),
        "loaded table"
    );
    Ok(LoadedTable {
        table,
        path: path.to_path_buf(),
        data,
    })
}

/// Load all four tables. Fails on the first missing file or column.
pub fn load_tables(sources: &SourceFiles) -> Result<Vec<LoadedTable>> {
    sources
        .iter()
        .map(|(table, path)| load_table(table, path))
        .collect()
}
