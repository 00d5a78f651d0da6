//! The four cleaning stages.
//!
//! Each function applies one stage to the store it is given and reports what
//! it changed. Ordering is not checked here; [`crate::pipeline`] enforces it.

use tracing::warn;

use ward_model::columns::{ARRIVAL_DATE, DEPARTURE_DATE, EVENT, SERVICE, STAY_DURATION};
use ward_model::{Stage, StageOutcome, TableKind};

use crate::audit::RemovalAudit;
use crate::data_utils::{
    date_column, required_column, set_i64_column, set_text_column, split_rows, text_column,
};
use crate::error::Result;
use crate::frame::{HospitalStore, TableFrame};
use crate::normalization::{
    EventState, classify_event, is_inverted_stay, normalize_join_key, stay_duration_days,
};

/// Trim whitespace from `service` in every table. One outcome per table.
pub fn normalize_service_text(store: &mut HospitalStore) -> Result<Vec<StageOutcome>> {
    TableKind::ALL
        .into_iter()
        .map(|table| normalize_service_column(store.table_mut(table)))
        .collect()
}

fn normalize_service_column(frame: &mut TableFrame) -> Result<StageOutcome> {
    let column = required_column(frame, SERVICE)?;
    let mut values = text_column(frame, &column)?;
    let mut rewritten = 0usize;
    for value in values.iter_mut().flatten() {
        if let Some(trimmed) = normalize_join_key(value) {
            *value = trimmed;
            rewritten += 1;
        }
    }
    if rewritten > 0 {
        set_text_column(&mut frame.data, &column, values)?;
    }
    Ok(StageOutcome::new(
        Stage::NormalizeServiceText,
        frame.table,
        frame.record_count(),
        rewritten,
    ))
}

/// Replace null or empty weekly `event` values with `default_event`.
///
/// Whitespace-only events are left as they are and reported in the outcome
/// notes.
pub fn default_missing_event(store: &mut HospitalStore, default_event: &str) -> Result<StageOutcome> {
    let frame = store.table_mut(TableKind::ServicesWeekly);
    let column = required_column(frame, EVENT)?;
    let mut values = text_column(frame, &column)?;
    let mut filled = 0usize;
    let mut whitespace_only = 0usize;
    for value in &mut values {
        match classify_event(value.as_deref()) {
            EventState::Missing => {
                *value = Some(default_event.to_string());
                filled += 1;
            }
            EventState::WhitespaceOnly => whitespace_only += 1,
            EventState::Recorded => {}
        }
    }
    if filled > 0 {
        set_text_column(&mut frame.data, &column, values)?;
    }
    let mut outcome = StageOutcome::new(
        Stage::DefaultMissingEvent,
        frame.table,
        frame.record_count(),
        filled,
    );
    if whitespace_only > 0 {
        warn!(
            table = %frame.table,
            column = %column,
            whitespace_only,
            "whitespace-only events left unchanged"
        );
        outcome = outcome.with_note(format!(
            "{whitespace_only} whitespace-only {column} value(s) left unchanged"
        ));
    }
    Ok(outcome)
}

/// Delete patient rows whose departure precedes arrival.
///
/// Rows with an unknown date on either side are kept. Deleted rows go to
/// `audit` when one is supplied.
pub fn remove_invalid_stays(
    store: &mut HospitalStore,
    audit: Option<&mut RemovalAudit>,
) -> Result<StageOutcome> {
    let frame = store.table_mut(TableKind::Patients);
    let arrivals = date_column(frame, ARRIVAL_DATE)?;
    let departures = date_column(frame, DEPARTURE_DATE)?;
    let examined = frame.record_count();
    let keep: Vec<bool> = arrivals
        .iter()
        .zip(&departures)
        .map(|(arrival, departure)| !is_inverted_stay(*arrival, *departure))
        .collect();
    let removed_count = keep.iter().filter(|kept| !**kept).count();
    if removed_count > 0 {
        let removed = split_rows(&mut frame.data, &keep)?;
        warn!(
            table = %frame.table,
            removed = removed_count,
            "deleted stays with departure before arrival"
        );
        if let Some(audit) = audit {
            audit.record(removed)?;
        }
    }
    Ok(StageOutcome::new(
        Stage::RemoveInvalidStays,
        frame.table,
        examined,
        removed_count,
    ))
}

/// Add or refresh the `Stay_Duration` column on patients.
///
/// An existing column with the same name (any case) is overwritten in place
/// rather than duplicated. Rows with an unknown date get a null duration.
pub fn compute_stay_duration(store: &mut HospitalStore) -> Result<StageOutcome> {
    let frame = store.table_mut(TableKind::Patients);
    let arrivals = date_column(frame, ARRIVAL_DATE)?;
    let departures = date_column(frame, DEPARTURE_DATE)?;
    let durations: Vec<Option<i64>> = arrivals
        .iter()
        .zip(&departures)
        .map(|(arrival, departure)| match (arrival, departure) {
            (Some(arrival), Some(departure)) => Some(stay_duration_days(*arrival, *departure)),
            _ => None,
        })
        .collect();
    let computed = durations.iter().flatten().count();
    let column = ward_ingest::find_column(&frame.data, STAY_DURATION)
        .unwrap_or_else(|| STAY_DURATION.to_string());
    set_i64_column(&mut frame.data, &column, durations)?;
    Ok(StageOutcome::new(
        Stage::ComputeStayDuration,
        frame.table,
        frame.record_count(),
        computed,
    ))
}
