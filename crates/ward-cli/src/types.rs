use std::collections::BTreeMap;
use std::path::PathBuf;

use ward_model::{CleaningSummary, TableKind};
use ward_report::ReportSet;

#[derive(Debug)]
pub struct CleanResult {
    pub data_dir: PathBuf,
    /// File each table was loaded from.
    pub sources: BTreeMap<TableKind, PathBuf>,
    /// `None` on a dry run.
    pub output_dir: Option<PathBuf>,
    pub summary: CleaningSummary,
    pub reports: ReportSet,
    pub outputs: Vec<PathBuf>,
}
