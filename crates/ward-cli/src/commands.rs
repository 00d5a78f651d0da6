use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ward_ingest::{SourceFiles, load_tables};
use ward_model::{CleaningOptions, ReportOptions, TableKind};
use ward_report::{OutputBundle, build_reports, write_outputs};
use ward_transform::{CleaningPipeline, HospitalStore};

use crate::cli::CleanArgs;
use crate::summary::print_stage_plan;
use crate::types::CleanResult;

pub fn run_stages() -> Result<()> {
    print_stage_plan();
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let data_dir = &args.data_dir;
    let clean_span = info_span!("clean", data_dir = %data_dir.display());
    let _clean_guard = clean_span.enter();
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| data_dir.join("output"));

    // =========================================================================
    // Load
    // =========================================================================
    let sources = source_files(args)?;
    let load_start = Instant::now();
    let loaded = load_tables(&sources).context("load source tables")?;
    let mut store = HospitalStore::from_loaded(loaded).context("assemble tables")?;
    let table_sources: BTreeMap<TableKind, PathBuf> = store
        .frames()
        .filter_map(|frame| frame.source().map(|path| (frame.table, path.to_path_buf())))
        .collect();
    info!(
        tables = TableKind::ALL.len(),
        rows = store.counts().total(),
        duration_ms = load_start.elapsed().as_millis(),
        "tables loaded"
    );

    // =========================================================================
    // Clean
    // =========================================================================
    let options = CleaningOptions::default().with_removal_audit(!args.no_audit);
    let mut pipeline = CleaningPipeline::new(options);
    let summary = pipeline
        .run_all(&mut store)
        .context("run cleaning pipeline")?;
    info!(
        rows_affected = summary.total_rows_affected(),
        rows_removed = summary.rows_removed(),
        "cleaning complete"
    );

    // =========================================================================
    // Report
    // =========================================================================
    pipeline.ensure_report_ready()?;
    let report_options = ReportOptions::default()
        .with_preview_limit(args.preview_limit)
        .with_geriatric_min_age(args.min_age);
    let reports = build_reports(&store, &report_options)?;

    // =========================================================================
    // Write
    // =========================================================================
    if args.dry_run {
        info!("dry run, no files written");
        return Ok(CleanResult {
            data_dir: data_dir.clone(),
            sources: table_sources,
            output_dir: None,
            summary,
            reports,
            outputs: Vec::new(),
        });
    }
    let outputs = write_outputs(
        &output_dir,
        OutputBundle {
            store: &store,
            reports: &reports,
            summary: &summary,
            audit: (!args.no_audit).then(|| pipeline.audit()),
        },
    )?;

    Ok(CleanResult {
        data_dir: data_dir.clone(),
        sources: table_sources,
        output_dir: Some(output_dir),
        summary,
        reports,
        outputs,
    })
}

fn source_files(args: &CleanArgs) -> Result<SourceFiles> {
    let mut sources = SourceFiles::in_dir(&args.data_dir)
        .with_context(|| format!("open data folder {}", args.data_dir.display()))?;
    let overrides = [
        (TableKind::Patients, &args.patients),
        (TableKind::ServicesWeekly, &args.services_weekly),
        (TableKind::Staff, &args.staff),
        (TableKind::StaffSchedule, &args.staff_schedule),
    ];
    for (table, path) in overrides {
        if let Some(path) = path {
            sources = sources.with_path(table, path);
        }
    }
    Ok(sources)
}
