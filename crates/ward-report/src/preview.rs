//! Most recent admissions with their computed stay.

use anyhow::Result;
use serde::Serialize;

use ward_ingest::has_column;
use ward_model::columns::{
    ARRIVAL_DATE, DEPARTURE_DATE, PATIENT_ID, PATIENT_NAME, SERVICE, STAY_DURATION,
};
use ward_transform::HospitalStore;
use ward_transform::data_utils::{date_column, i64_column, text_column};

use crate::common::format_date;
use crate::writer::ReportRow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentPatient {
    pub patient_id: Option<String>,
    pub name: Option<String>,
    pub service: Option<String>,
    pub arrival_date: Option<String>,
    pub departure_date: Option<String>,
    pub stay_duration: Option<i64>,
}

impl ReportRow for RecentPatient {
    const HEADERS: &'static [&'static str] = &[
        "patient_id",
        "name",
        "service",
        "arrival_date",
        "departure_date",
        "stay_duration",
    ];
}

/// Patients ordered by arrival, newest first; at most `limit` rows.
///
/// Unknown arrival dates sort last. Ties keep source row order.
pub fn recent_patients(store: &HospitalStore, limit: usize) -> Result<Vec<RecentPatient>> {
    let frame = store.patients();
    let ids = text_column(frame, PATIENT_ID)?;
    let names = if has_column(&frame.data, PATIENT_NAME) {
        text_column(frame, PATIENT_NAME)?
    } else {
        vec![None; frame.record_count()]
    };
    let services = text_column(frame, SERVICE)?;
    let arrivals = date_column(frame, ARRIVAL_DATE)?;
    let departures = date_column(frame, DEPARTURE_DATE)?;
    let durations = i64_column(frame, STAY_DURATION)?;

    let mut order: Vec<usize> = (0..frame.record_count()).collect();
    // `Option` orders None first, so reversing the key puts unknown dates last.
    order.sort_by(|a, b| arrivals[*b].cmp(&arrivals[*a]));

    Ok(order
        .into_iter()
        .take(limit)
        .map(|idx| RecentPatient {
            patient_id: ids[idx].clone(),
            name: names[idx].clone(),
            service: services[idx].clone(),
            arrival_date: format_date(arrivals[idx]),
            departure_date: format_date(departures[idx]),
            stay_duration: durations[idx],
        })
        .collect())
}
