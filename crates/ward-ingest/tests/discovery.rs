//! Tests for source table discovery and loading.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use ward_ingest::{IngestError, SourceFiles, load_table, load_tables};
use ward_model::TableKind;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write file");
}

fn write_all_tables(dir: &Path) {
    write(
        dir,
        "patients.csv",
        "patient_id,name,age,arrival_date,departure_date,service,satisfaction\n\
         P1,Ann,71,2024-01-01,2024-01-05, surgery ,80\n",
    );
    write(
        dir,
        "services_weekly.csv",
        "week,month,service,available_beds,patients_request,patients_admitted,patients_refused,patient_satisfaction,staff_morale,event\n\
         1,1,surgery,30,40,30,10,75,60,\n",
    );
    write(dir, "staff.csv", "staff_id,staff_name,role,service\nS1,Bo,nurse,surgery\n");
    write(
        dir,
        "staff_schedule.csv",
        "week,staff_id,staff_name,role,service,present\n1,S1,Bo,nurse,surgery,1\n",
    );
}

#[test]
fn loads_all_four_tables() {
    let dir = TempDir::new().unwrap();
    write_all_tables(dir.path());

    let sources = SourceFiles::in_dir(dir.path()).unwrap();
    let tables = load_tables(&sources).unwrap();

    let kinds: Vec<TableKind> = tables.iter().map(|loaded| loaded.table).collect();
    assert_eq!(kinds, TableKind::ALL.to_vec());
    assert!(tables.iter().all(|loaded| loaded.data.height() == 1));
}

#[test]
fn missing_directory_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let result = SourceFiles::in_dir(&missing);
    assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
}

#[test]
fn missing_file_names_the_table() {
    let dir = TempDir::new().unwrap();
    write_all_tables(dir.path());
    fs::remove_file(dir.path().join("staff.csv")).unwrap();

    let sources = SourceFiles::in_dir(dir.path()).unwrap();
    let err = load_tables(&sources).unwrap_err();
    assert!(matches!(
        err,
        IngestError::FileNotFound {
            table: TableKind::Staff,
            ..
        }
    ));
}

#[test]
fn override_path_is_used() {
    let dir = TempDir::new().unwrap();
    write_all_tables(dir.path());
    write(
        dir.path(),
        "roster.csv",
        "Staff_ID,Service\nS9,ICU\nS10,ICU\n",
    );

    let sources = SourceFiles::in_dir(dir.path())
        .unwrap()
        .with_path(TableKind::Staff, dir.path().join("roster.csv"));
    let tables = load_tables(&sources).unwrap();
    let staff = tables
        .iter()
        .find(|loaded| loaded.table == TableKind::Staff)
        .unwrap();
    assert_eq!(staff.data.height(), 2);
    assert!(staff.path.ends_with("roster.csv"));
}

#[test]
fn missing_required_column_is_a_schema_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "schedule.csv", "week,service\n1,ICU\n");

    let err = load_table(TableKind::StaffSchedule, &dir.path().join("schedule.csv")).unwrap_err();
    match err {
        IngestError::MissingColumn { table, column, .. } => {
            assert_eq!(table, TableKind::StaffSchedule);
            assert_eq!(column, "present");
        }
        other => panic!("unexpected error: {other}"),
    }
}
