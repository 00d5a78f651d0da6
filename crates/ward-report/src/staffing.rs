//! Staffing load per service and week.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::Result;
use serde::Serialize;

use ward_model::columns::{PATIENTS_ADMITTED, PATIENTS_REFUSED, PRESENT, STAFF_MORALE, WEEK};
use ward_transform::HospitalStore;
use ward_transform::data_utils::{f64_column, i64_column};

use crate::common::{Mean, service_keys};
use crate::writer::ReportRow;

/// Admitted patients per present staff member.
///
/// `NoData` stands in for the division when nobody was present, so an
/// unstaffed week never aborts the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "Option<f64>")]
pub enum PatientsPerStaff {
    Ratio(f64),
    NoData,
}

impl PatientsPerStaff {
    pub fn compute(admitted: i64, present_staff: i64) -> Self {
        if present_staff > 0 {
            Self::Ratio(admitted as f64 / present_staff as f64)
        } else {
            Self::NoData
        }
    }

    pub fn ratio(self) -> Option<f64> {
        match self {
            Self::Ratio(value) => Some(value),
            Self::NoData => None,
        }
    }
}

impl From<PatientsPerStaff> for Option<f64> {
    fn from(value: PatientsPerStaff) -> Self {
        value.ratio()
    }
}

impl fmt::Display for PatientsPerStaff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ratio(value) => write!(f, "{value:.2}"),
            Self::NoData => f.write_str("-"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceAllocation {
    pub service: String,
    pub week: i64,
    pub patients_admitted: i64,
    pub present_staff: i64,
    pub patients_per_staff: PatientsPerStaff,
    pub avg_staff_morale: Option<f64>,
    pub total_refused: i64,
}

impl ReportRow for ResourceAllocation {
    const HEADERS: &'static [&'static str] = &[
        "service",
        "week",
        "patients_admitted",
        "present_staff",
        "patients_per_staff",
        "avg_staff_morale",
        "total_refused",
    ];
}

#[derive(Debug, Default)]
struct WeekTotals {
    admitted: i64,
    refused: i64,
    morale: Mean,
}

/// One row per (service, week) in the weekly stats, sorted by service then week.
///
/// Rows without a service or week cannot be matched to a schedule and are
/// skipped.
pub fn resource_allocation(store: &HospitalStore) -> Result<Vec<ResourceAllocation>> {
    let weekly = store.services_weekly();
    let weeks = i64_column(weekly, WEEK)?;
    let admitted = i64_column(weekly, PATIENTS_ADMITTED)?;
    let refused = i64_column(weekly, PATIENTS_REFUSED)?;
    let morale = f64_column(weekly, STAFF_MORALE)?;

    let mut totals: BTreeMap<(String, i64), WeekTotals> = BTreeMap::new();
    for (idx, service) in service_keys(weekly)?.into_iter().enumerate() {
        let (Some(service), Some(week)) = (service, weeks[idx]) else {
            continue;
        };
        let entry = totals.entry((service, week)).or_default();
        entry.admitted += admitted[idx].unwrap_or(0);
        entry.refused += refused[idx].unwrap_or(0);
        entry.morale.push(morale[idx]);
    }

    let schedule = store.staff_schedule();
    let schedule_weeks = i64_column(schedule, WEEK)?;
    let present = i64_column(schedule, PRESENT)?;
    let mut present_staff: BTreeMap<(String, i64), i64> = BTreeMap::new();
    for (idx, service) in service_keys(schedule)?.into_iter().enumerate() {
        let (Some(service), Some(week)) = (service, schedule_weeks[idx]) else {
            continue;
        };
        *present_staff.entry((service, week)).or_default() += present[idx].unwrap_or(0);
    }

    Ok(totals
        .into_iter()
        .map(|(key, totals)| {
            let present = present_staff.get(&key).copied().unwrap_or(0);
            let (service, week) = key;
            ResourceAllocation {
                service,
                week,
                patients_admitted: totals.admitted,
                present_staff: present,
                patients_per_staff: PatientsPerStaff::compute(totals.admitted, present),
                avg_staff_morale: totals.morale.value(),
                total_refused: totals.refused,
            }
        })
        .collect())
}
