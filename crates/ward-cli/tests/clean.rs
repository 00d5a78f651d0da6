//! End-to-end runs of the clean command over a small data folder.

use std::fs;
use std::path::Path;

use clap::Parser;

use ward_cli::cli::{CleanArgs, Cli, Command};
use ward_cli::commands::run_clean;
use ward_model::TableKind;

const PATIENTS: &str = "\
patient_id,name,age,arrival_date,departure_date,service,satisfaction
P1,Ann,70,2024-01-01,2024-01-04, emergency,80
P2,Bob,45,2024-01-10,2024-01-12,ICU,60
P3,Cy,80,2024-02-01,2024-01-20,emergency,10
P4,Di,65,2024-01-15 08:00:00,2024-01-20,surgery,90
";

const SERVICES_WEEKLY: &str = "\
week,month,service,available_beds,patients_request,patients_admitted,patients_refused,patient_satisfaction,staff_morale,event
1,1,emergency,20,14,10,4,75,70,
1,1,surgery,10,12,5,7,85,60,strike
";

const STAFF: &str = "\
staff_id,staff_name,role,service
S1,Al,nurse,emergency
";

const STAFF_SCHEDULE: &str = "\
week,staff_id,staff_name,role,service,present
1,S1,Al,nurse,emergency ,1
";

fn write_data(dir: &Path) {
    fs::write(dir.join("patients.csv"), PATIENTS).unwrap();
    fs::write(dir.join("services_weekly.csv"), SERVICES_WEEKLY).unwrap();
    fs::write(dir.join("staff.csv"), STAFF).unwrap();
    fs::write(dir.join("staff_schedule.csv"), STAFF_SCHEDULE).unwrap();
}

fn clean_args(args: &[&str]) -> CleanArgs {
    let argv = ["ward", "clean"].into_iter().chain(args.iter().copied());
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Clean(args) => args,
        Command::Stages => panic!("expected clean command"),
    }
}

#[test]
fn clean_writes_tables_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    let data_dir = dir.path().to_str().unwrap();

    let result = run_clean(&clean_args(&[data_dir])).unwrap();

    assert_eq!(result.summary.rows_removed(), 1);
    assert_eq!(result.summary.counts_after.patients, 3);
    let output_dir = dir.path().join("output");
    assert_eq!(result.output_dir.as_deref(), Some(output_dir.as_path()));
    assert_eq!(result.outputs.len(), 10);

    let removed = fs::read_to_string(output_dir.join("removed_patients.csv")).unwrap();
    assert!(removed.contains("P3"));

    let weekly = fs::read_to_string(output_dir.join("services_weekly_clean.csv")).unwrap();
    assert!(weekly.contains("Normal"));

    let bottlenecks = &result.reports.service_bottlenecks;
    assert_eq!(bottlenecks[0].service, "surgery");
    assert_eq!(bottlenecks[1].service, "emergency");
    assert_eq!(bottlenecks[1].avg_stay_duration, Some(3.0));

    let allocation = &result.reports.resource_allocation;
    assert_eq!(allocation.len(), 2);
    assert_eq!(allocation[0].present_staff, 1);
    assert_eq!(allocation[0].patients_per_staff.ratio(), Some(10.0));
    assert_eq!(allocation[1].patients_per_staff.ratio(), None);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    let data_dir = dir.path().to_str().unwrap();

    let result = run_clean(&clean_args(&[data_dir, "--dry-run", "--preview-limit", "2"])).unwrap();

    assert!(result.output_dir.is_none());
    assert!(result.outputs.is_empty());
    assert!(!dir.path().join("output").exists());
    assert_eq!(result.reports.recent_patients.len(), 2);
}

#[test]
fn no_audit_skips_removed_file() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    let out = dir.path().join("elsewhere");

    let result = run_clean(&clean_args(&[
        dir.path().to_str().unwrap(),
        "--output-dir",
        out.to_str().unwrap(),
        "--no-audit",
    ]))
    .unwrap();

    assert_eq!(result.outputs.len(), 9);
    assert!(out.join("patients_clean.csv").exists());
    assert!(!out.join("removed_patients.csv").exists());
}

#[test]
fn file_override_is_used() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    let moved = dir.path().join("roster.csv");
    fs::rename(dir.path().join("staff.csv"), &moved).unwrap();

    let result = run_clean(&clean_args(&[
        dir.path().to_str().unwrap(),
        "--staff",
        moved.to_str().unwrap(),
        "--dry-run",
    ]))
    .unwrap();
    assert_eq!(result.summary.counts_after.staff, 1);
    assert_eq!(result.sources.get(&TableKind::Staff), Some(&moved));
    assert_eq!(
        result.sources.get(&TableKind::Patients),
        Some(&dir.path().join("patients.csv"))
    );
}

#[test]
fn missing_table_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    fs::remove_file(dir.path().join("staff_schedule.csv")).unwrap();

    let error = run_clean(&clean_args(&[dir.path().to_str().unwrap()])).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("staff_schedule.csv"), "{message}");
    assert!(!dir.path().join("output").exists());
}

#[test]
fn bad_date_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    let broken = PATIENTS.replace("2024-01-12", "soon");
    fs::write(dir.path().join("patients.csv"), broken).unwrap();

    let error = run_clean(&clean_args(&[dir.path().to_str().unwrap()])).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("soon"), "{message}");
}

#[test]
fn padded_headers_load() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path());
    let padded = STAFF_SCHEDULE.replacen("service,present", " service , present ", 1);
    fs::write(dir.path().join("staff_schedule.csv"), padded).unwrap();

    let result = run_clean(&clean_args(&[dir.path().to_str().unwrap(), "--dry-run"])).unwrap();
    assert_eq!(result.reports.resource_allocation[0].present_staff, 1);
}
