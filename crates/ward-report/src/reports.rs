//! All four reports computed together.

use anyhow::{Context, Result};
use tracing::debug;

use ward_model::ReportOptions;
use ward_transform::HospitalStore;

use crate::bottleneck::{ServiceBottleneck, service_bottlenecks};
use crate::geriatric::{GeriatricOutcome, geriatric_outcomes};
use crate::preview::{RecentPatient, recent_patients};
use crate::staffing::{ResourceAllocation, resource_allocation};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSet {
    pub recent_patients: Vec<RecentPatient>,
    pub service_bottlenecks: Vec<ServiceBottleneck>,
    pub resource_allocation: Vec<ResourceAllocation>,
    pub geriatric_outcomes: Vec<GeriatricOutcome>,
}

/// Run every report over a cleaned store.
pub fn build_reports(store: &HospitalStore, options: &ReportOptions) -> Result<ReportSet> {
    let reports = ReportSet {
        recent_patients: recent_patients(store, options.preview_limit)
            .context("recent patients report")?,
        service_bottlenecks: service_bottlenecks(store).context("service bottleneck report")?,
        resource_allocation: resource_allocation(store).context("resource allocation report")?,
        geriatric_outcomes: geriatric_outcomes(store, options.geriatric_min_age)
            .context("geriatric outcomes report")?,
    };
    debug!(
        recent = reports.recent_patients.len(),
        services = reports.service_bottlenecks.len(),
        service_weeks = reports.resource_allocation.len(),
        geriatric_groups = reports.geriatric_outcomes.len(),
        "reports built"
    );
    Ok(reports)
}
