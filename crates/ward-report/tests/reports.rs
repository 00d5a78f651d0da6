mod common;

use common::cleaned_store;
use polars::prelude::{NamedFrom, Series};
use ward_model::TableKind;
use ward_model::ReportOptions;
use ward_report::{
    PatientsPerStaff, build_reports, geriatric_outcomes, recent_patients, resource_allocation,
    service_bottlenecks,
};

#[test]
fn recent_patients_newest_first() {
    let (store, _) = cleaned_store();
    let rows = recent_patients(&store, 3).unwrap();
    let ids: Vec<_> = rows.iter().map(|r| r.patient_id.as_deref()).collect();
    assert_eq!(ids, vec![Some("P5"), Some("P4"), Some("P2")]);

    assert_eq!(rows[0].departure_date, None);
    assert_eq!(rows[0].stay_duration, None);
    assert_eq!(rows[1].arrival_date.as_deref(), Some("2024-01-15"));
    assert_eq!(rows[1].stay_duration, Some(5));
    assert_eq!(rows[2].service.as_deref(), Some("ICU"));
    assert_eq!(rows[2].name.as_deref(), Some("Bob"));
}

#[test]
fn recent_patients_limit_larger_than_table() {
    let (store, _) = cleaned_store();
    assert_eq!(recent_patients(&store, 50).unwrap().len(), 4);
    assert!(recent_patients(&store, 0).unwrap().is_empty());
}

#[test]
fn bottlenecks_sorted_by_refusals() {
    let (store, _) = cleaned_store();
    let rows = service_bottlenecks(&store).unwrap();
    let services: Vec<_> = rows.iter().map(|r| r.service.as_str()).collect();
    assert_eq!(services, vec!["surgery", "emergency", "ICU"]);

    let emergency = &rows[1];
    assert_eq!(emergency.total_refused, 5);
    // P3 was removed and P5 has no stay or satisfaction.
    assert_eq!(emergency.avg_stay_duration, Some(3.0));
    assert_eq!(emergency.avg_satisfaction, Some(80.0));

    assert_eq!(rows[2].total_refused, 0);
    assert_eq!(rows[2].avg_stay_duration, Some(2.0));
}

#[test]
fn bottleneck_totals_do_not_fan_out() {
    let (store, _) = cleaned_store();
    let rows = service_bottlenecks(&store).unwrap();
    let total: i64 = rows.iter().map(|r| r.total_refused).sum();
    assert_eq!(total, 12);
}

#[test]
fn allocation_guards_unstaffed_weeks() {
    let (store, _) = cleaned_store();
    let rows = resource_allocation(&store).unwrap();
    let keys: Vec<_> = rows.iter().map(|r| (r.service.as_str(), r.week)).collect();
    assert_eq!(
        keys,
        vec![("ICU", 1), ("emergency", 1), ("emergency", 2), ("surgery", 1)]
    );

    assert_eq!(rows[0].patients_per_staff, PatientsPerStaff::Ratio(3.0));
    assert_eq!(rows[1].present_staff, 2);
    assert_eq!(rows[1].patients_per_staff, PatientsPerStaff::Ratio(5.0));
    assert_eq!(rows[1].avg_staff_morale, Some(70.0));
    assert_eq!(rows[2].present_staff, 0);
    assert_eq!(rows[2].patients_per_staff, PatientsPerStaff::NoData);
    // No schedule rows at all for surgery.
    assert_eq!(rows[3].patients_per_staff, PatientsPerStaff::NoData);
    assert_eq!(rows[3].total_refused, 7);
}

#[test]
fn geriatric_groups_by_service() {
    let (store, _) = cleaned_store();
    let rows = geriatric_outcomes(&store, 60).unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].service, "emergency");
    assert_eq!(rows[0].patients, 2);
    assert_eq!(rows[0].avg_satisfaction, Some(80.0));
    assert_eq!(rows[0].avg_stay_duration, Some(3.0));

    assert_eq!(rows[1].service, "surgery");
    assert_eq!(rows[1].patients, 1);
    assert_eq!(rows[1].avg_stay_duration, Some(5.0));
}

#[test]
fn geriatric_threshold_is_inclusive() {
    let (store, _) = cleaned_store();
    let rows = geriatric_outcomes(&store, 70).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].patients, 1);
    assert!(geriatric_outcomes(&store, 100).unwrap().is_empty());
}

#[test]
fn build_reports_uses_options() {
    let (store, pipeline) = cleaned_store();
    pipeline.ensure_report_ready().unwrap();
    let options = ReportOptions::default()
        .with_preview_limit(2)
        .with_geriatric_min_age(65);
    let reports = build_reports(&store, &options).unwrap();
    assert_eq!(reports.recent_patients.len(), 2);
    assert_eq!(reports.service_bottlenecks.len(), 3);
    assert_eq!(reports.resource_allocation.len(), 4);
    let geriatric: usize = reports.geriatric_outcomes.iter().map(|r| r.patients).sum();
    assert_eq!(geriatric, 2);
}

#[test]
fn non_numeric_week_is_a_type_error() {
    let (mut store, _) = cleaned_store();
    let weeks = Series::new("week".into(), vec![Some("W1"), Some("2"), Some("1"), Some("1")]);
    store
        .table_mut(TableKind::ServicesWeekly)
        .data
        .with_column(weeks)
        .unwrap();

    let err = resource_allocation(&store).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid number 'W1' in services_weekly.week (row 0)"
    );
}
