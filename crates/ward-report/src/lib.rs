//! Reporting over cleaned hospital operations tables.
//!
//! Four read-only queries run against a [`ward_transform::HospitalStore`]
//! once the cleaning pipeline has normalized services and computed stay
//! durations:
//!
//! - **Recent patients**: latest admissions with their stay length
//! - **Service bottlenecks**: stay, refusals and satisfaction per service
//! - **Resource allocation**: admitted patients per present staff member
//! - **Geriatric outcomes**: satisfaction and stay for older patients
//!
//! The writers persist the cleaned tables, the reports, the removal audit and
//! a JSON run summary as flat files.

mod bottleneck;
mod common;
mod geriatric;
mod preview;
mod reports;
mod staffing;
mod writer;

pub use bottleneck::{ServiceBottleneck, service_bottlenecks};
pub use common::{Mean, REPORT_DATE_FORMAT};
pub use geriatric::{GeriatricOutcome, geriatric_outcomes};
pub use preview::{RecentPatient, recent_patients};
pub use reports::{ReportSet, build_reports};
pub use staffing::{PatientsPerStaff, ResourceAllocation, resource_allocation};
pub use writer::{
    GERIATRIC_OUTCOMES_FILE, OutputBundle, RECENT_PATIENTS_FILE, REMOVED_PATIENTS_FILE,
    RESOURCE_ALLOCATION_FILE, RUN_SUMMARY_FILE, ReportRow, SERVICE_BOTTLENECKS_FILE,
    write_clean_tables, write_frame_csv, write_outputs, write_records_csv, write_removal_audit,
    write_reports, write_run_summary,
};
