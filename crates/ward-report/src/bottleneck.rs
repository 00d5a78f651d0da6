//! Per-service bottleneck report.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;

use ward_model::columns::{PATIENTS_REFUSED, SATISFACTION, STAY_DURATION};
use ward_transform::HospitalStore;
use ward_transform::data_utils::{f64_column, i64_column};

use crate::common::{Mean, service_keys};
use crate::writer::ReportRow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceBottleneck {
    pub service: String,
    pub avg_stay_duration: Option<f64>,
    pub total_refused: i64,
    pub avg_satisfaction: Option<f64>,
}

impl ReportRow for ServiceBottleneck {
    const HEADERS: &'static [&'static str] = &[
        "service",
        "avg_stay_duration",
        "total_refused",
        "avg_satisfaction",
    ];
}

#[derive(Debug, Default)]
struct ServiceTotals {
    stay: Mean,
    satisfaction: Mean,
    refused: i64,
}

/// One row per service seen in patients or weekly stats, worst refusals first.
///
/// Patient averages and weekly refusal totals are aggregated separately and
/// then merged by service, so neither side multiplies the other.
pub fn service_bottlenecks(store: &HospitalStore) -> Result<Vec<ServiceBottleneck>> {
    let mut totals: BTreeMap<String, ServiceTotals> = BTreeMap::new();

    let patients = store.patients();
    let stays = i64_column(patients, STAY_DURATION)?;
    let satisfaction = f64_column(patients, SATISFACTION)?;
    for (idx, service) in service_keys(patients)?.into_iter().enumerate() {
        let Some(service) = service else { continue };
        let entry = totals.entry(service).or_default();
        entry.stay.push(stays[idx].map(|days| days as f64));
        entry.satisfaction.push(satisfaction[idx]);
    }

    let weekly = store.services_weekly();
    let refused = i64_column(weekly, PATIENTS_REFUSED)?;
    for (idx, service) in service_keys(weekly)?.into_iter().enumerate() {
        let Some(service) = service else { continue };
        totals.entry(service).or_default().refused += refused[idx].unwrap_or(0);
    }

    let mut rows: Vec<ServiceBottleneck> = totals
        .into_iter()
        .map(|(service, totals)| ServiceBottleneck {
            service,
            avg_stay_duration: totals.stay.value(),
            total_refused: totals.refused,
            avg_satisfaction: totals.satisfaction.value(),
        })
        .collect();
    // BTreeMap iteration is already by name; a stable sort keeps that as the tie-break.
    rows.sort_by(|a, b| b.total_refused.cmp(&a.total_refused));
    Ok(rows)
}
