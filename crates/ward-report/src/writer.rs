//! CSV and JSON outputs.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};
use serde::Serialize;
use tracing::info;

use ward_ingest::any_to_text;
use ward_model::{CleaningSummary, TableKind};
use ward_transform::{HospitalStore, RemovalAudit};

use crate::reports::ReportSet;

pub const RECENT_PATIENTS_FILE: &str = "report_recent_patients.csv";
pub const SERVICE_BOTTLENECKS_FILE: &str = "report_service_bottlenecks.csv";
pub const RESOURCE_ALLOCATION_FILE: &str = "report_resource_allocation.csv";
pub const GERIATRIC_OUTCOMES_FILE: &str = "report_geriatric_outcomes.csv";
pub const REMOVED_PATIENTS_FILE: &str = "removed_patients.csv";
pub const RUN_SUMMARY_FILE: &str = "run_summary.json";

/// Write a frame as CSV with a header row. Nulls become empty fields.
pub fn write_frame_csv(path: &Path, data: &DataFrame) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    let columns = data.get_columns();
    writer
        .write_record(columns.iter().map(|column| column.name().as_str()))
        .with_context(|| format!("write {}", path.display()))?;
    for idx in 0..data.height() {
        let record = columns.iter().map(|column| {
            any_to_text(column.get(idx).unwrap_or(AnyValue::Null)).unwrap_or_default()
        });
        writer
            .write_record(record)
            .with_context(|| format!("write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// A report row with a fixed column layout.
///
/// `HEADERS` must list the serialized field names in declaration order.
pub trait ReportRow: Serialize {
    const HEADERS: &'static [&'static str];
}

/// Write typed report rows as CSV. `None` becomes an empty field. The header
/// row is always written, so an empty report still carries its columns.
pub fn write_records_csv<T: ReportRow>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(T::HEADERS)
        .with_context(|| format!("write {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// Write the cleaned tables as `<table>_clean.csv`.
pub fn write_clean_tables(output_dir: &Path, store: &HospitalStore) -> Result<Vec<PathBuf>> {
    let mut outputs = Vec::new();
    for table in TableKind::ALL {
        let path = output_dir.join(table.clean_file_name());
        write_frame_csv(&path, &store.table(table).data)?;
        outputs.push(path);
    }
    Ok(outputs)
}

/// Write the four report files.
pub fn write_reports(output_dir: &Path, reports: &ReportSet) -> Result<Vec<PathBuf>> {
    let recent = output_dir.join(RECENT_PATIENTS_FILE);
    write_records_csv(&recent, &reports.recent_patients)?;
    let bottlenecks = output_dir.join(SERVICE_BOTTLENECKS_FILE);
    write_records_csv(&bottlenecks, &reports.service_bottlenecks)?;
    let allocation = output_dir.join(RESOURCE_ALLOCATION_FILE);
    write_records_csv(&allocation, &reports.resource_allocation)?;
    let geriatric = output_dir.join(GERIATRIC_OUTCOMES_FILE);
    write_records_csv(&geriatric, &reports.geriatric_outcomes)?;
    Ok(vec![recent, bottlenecks, allocation, geriatric])
}

/// Write deleted patient rows. Returns `None` when nothing was removed.
pub fn write_removal_audit(output_dir: &Path, audit: &RemovalAudit) -> Result<Option<PathBuf>> {
    let Some(removed) = audit.removed() else {
        return Ok(None);
    };
    let path = output_dir.join(REMOVED_PATIENTS_FILE);
    write_frame_csv(&path, removed)?;
    Ok(Some(path))
}

pub fn write_run_summary(output_dir: &Path, summary: &CleaningSummary) -> Result<PathBuf> {
    let path = output_dir.join(RUN_SUMMARY_FILE);
    let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(file, summary)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Inputs for [`write_outputs`].
#[derive(Debug, Clone, Copy)]
pub struct OutputBundle<'a> {
    pub store: &'a HospitalStore,
    pub reports: &'a ReportSet,
    pub summary: &'a CleaningSummary,
    pub audit: Option<&'a RemovalAudit>,
}

/// Write every output into `output_dir`, creating it if needed.
pub fn write_outputs(output_dir: &Path, bundle: OutputBundle<'_>) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let mut outputs = write_clean_tables(output_dir, bundle.store)?;
    outputs.extend(write_reports(output_dir, bundle.reports)?);
    if let Some(audit) = bundle.audit
        && let Some(path) = write_removal_audit(output_dir, audit)?
    {
        outputs.push(path);
    }
    outputs.push(write_run_summary(output_dir, bundle.summary)?);

    info!(
        output_dir = %output_dir.display(),
        files = outputs.len(),
        "outputs written"
    );
    Ok(outputs)
}
