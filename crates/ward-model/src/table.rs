//! The four relations the cleaning pipeline operates on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::columns;
use crate::error::ModelError;

/// A hospital operations table.
///
/// Every table carries a `service` column that joins it to the others. The
/// join key is free text and is only trustworthy after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TableKind {
    /// One row per hospital stay.
    Patients,
    /// One row per (service, week).
    ServicesWeekly,
    /// One row per staff member.
    Staff,
    /// One row per (service, week, staff member) with a presence flag.
    StaffSchedule,
}

impl TableKind {
    /// All tables, in load order.
    pub const ALL: [TableKind; 4] = [
        TableKind::Patients,
        TableKind::ServicesWeekly,
        TableKind::Staff,
        TableKind::StaffSchedule,
    ];

    /// Stable identifier used in logs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Patients => "patients",
            TableKind::ServicesWeekly => "services_weekly",
            TableKind::Staff => "staff",
            TableKind::StaffSchedule => "staff_schedule",
        }
    }

    /// Human-readable label for summaries.
    pub fn label(&self) -> &'static str {
        match self {
            TableKind::Patients => "Patient stays",
            TableKind::ServicesWeekly => "Weekly service statistics",
            TableKind::Staff => "Staff",
            TableKind::StaffSchedule => "Staff schedule",
        }
    }

    /// Default source file name inside the data directory.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            TableKind::Patients => "patients.csv",
            TableKind::ServicesWeekly => "services_weekly.csv",
            TableKind::Staff => "staff.csv",
            TableKind::StaffSchedule => "staff_schedule.csv",
        }
    }

    /// File name used when writing the cleaned table.
    pub fn clean_file_name(&self) -> String {
        format!("{}_clean.csv", self.as_str())
    }

    /// Columns the pipeline or the reports read from this table.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            TableKind::Patients => &[
                columns::PATIENT_ID,
                columns::SERVICE,
                columns::ARRIVAL_DATE,
                columns::DEPARTURE_DATE,
                columns::AGE,
                columns::SATISFACTION,
            ],
            TableKind::ServicesWeekly => &[
                columns::WEEK,
                columns::SERVICE,
                columns::PATIENTS_ADMITTED,
                columns::PATIENTS_REFUSED,
                columns::PATIENT_SATISFACTION,
                columns::STAFF_MORALE,
                columns::EVENT,
            ],
            TableKind::Staff => &[columns::SERVICE],
            TableKind::StaffSchedule => &[columns::WEEK, columns::SERVICE, columns::PRESENT],
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "patients" | "patient" => Ok(TableKind::Patients),
            "services_weekly" | "weekly_service_stats" => Ok(TableKind::ServicesWeekly),
            "staff" => Ok(TableKind::Staff),
            "staff_schedule" => Ok(TableKind::StaffSchedule),
            _ => Err(ModelError::UnknownTable(s.to_string())),
        }
    }
}
