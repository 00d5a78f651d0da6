//! Outcomes for older patients.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;

use ward_model::columns::{AGE, SATISFACTION, STAY_DURATION};
use ward_transform::HospitalStore;
use ward_transform::data_utils::{f64_column, i64_column};

use crate::common::{Mean, service_keys};
use crate::writer::ReportRow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeriatricOutcome {
    pub service: String,
    pub patients: usize,
    pub avg_satisfaction: Option<f64>,
    pub avg_stay_duration: Option<f64>,
}

impl ReportRow for GeriatricOutcome {
    const HEADERS: &'static [&'static str] = &[
        "service",
        "patients",
        "avg_satisfaction",
        "avg_stay_duration",
    ];
}

/// Patients aged `min_age` or older, grouped by service. Unknown ages are
/// excluded.
pub fn geriatric_outcomes(store: &HospitalStore, min_age: i64) -> Result<Vec<GeriatricOutcome>> {
    let frame = store.patients();
    let ages = i64_column(frame, AGE)?;
    let satisfaction = f64_column(frame, SATISFACTION)?;
    let stays = i64_column(frame, STAY_DURATION)?;

    let mut groups: BTreeMap<String, (usize, Mean, Mean)> = BTreeMap::new();
    for (idx, service) in service_keys(frame)?.into_iter().enumerate() {
        let Some(service) = service else { continue };
        if !ages[idx].is_some_and(|age| age >= min_age) {
            continue;
        }
        let (count, sat, stay) = groups.entry(service).or_default();
        *count += 1;
        sat.push(satisfaction[idx]);
        stay.push(stays[idx].map(|days| days as f64));
    }

    Ok(groups
        .into_iter()
        .map(|(service, (patients, sat, stay))| GeriatricOutcome {
            service,
            patients,
            avg_satisfaction: sat.value(),
            avg_stay_duration: stay.value(),
        })
        .collect())
}
