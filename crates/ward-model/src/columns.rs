//! Canonical column names.
//!
//! Source headers are matched against these case-insensitively, so
//! `Service`, `service` and `SERVICE` all resolve to [`SERVICE`].

pub const SERVICE: &str = "service";
pub const WEEK: &str = "week";

pub const PATIENT_ID: &str = "patient_id";
pub const PATIENT_NAME: &str = "name";
pub const AGE: &str = "age";
pub const ARRIVAL_DATE: &str = "arrival_date";
pub const DEPARTURE_DATE: &str = "departure_date";
pub const SATISFACTION: &str = "satisfaction";

/// Derived by the duration stage; written with its display casing.
pub const STAY_DURATION: &str = "Stay_Duration";

pub const PATIENTS_ADMITTED: &str = "patients_admitted";
pub const PATIENTS_REFUSED: &str = "patients_refused";
pub const PATIENT_SATISFACTION: &str = "patient_satisfaction";
pub const STAFF_MORALE: &str = "staff_morale";
pub const EVENT: &str = "event";

pub const PRESENT: &str = "present";

/// Category assigned to weekly rows without a recorded event.
pub const DEFAULT_EVENT: &str = "Normal";
