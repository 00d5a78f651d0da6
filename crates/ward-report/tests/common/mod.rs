#![allow(dead_code)]

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use ward_model::CleaningOptions;
use ward_transform::{CleaningPipeline, HospitalStore};

fn text_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

/// A small ward: three services, one inverted stay, one unknown departure,
/// and weeks with no staff present.
pub fn raw_store() -> HospitalStore {
    let patients = text_df(vec![
        ("patient_id", vec![Some("P1"), Some("P2"), Some("P3"), Some("P4"), Some("P5")]),
        ("name", vec![Some("Ann"), Some("Bob"), Some("Cy"), Some("Di"), Some("Ed")]),
        ("age", vec![Some("70"), Some("45"), Some("80"), Some("65"), Some("61")]),
        (
            "arrival_date",
            vec![
                Some("2024-01-01"),
                Some("2024-01-10"),
                Some("2024-02-01"),
                Some("2024-01-15"),
                Some("2024-01-20"),
            ],
        ),
        (
            "departure_date",
            vec![
                Some("2024-01-04"),
                Some("2024-01-12"),
                Some("2024-01-20"),
                Some("2024-01-20"),
                None,
            ],
        ),
        (
            "service",
            vec![Some("emergency"), Some(" ICU"), Some("emergency "), Some("surgery"), Some("emergency")],
        ),
        ("satisfaction", vec![Some("80"), Some("60"), Some("10"), Some("90"), None]),
    ]);
    let weekly = text_df(vec![
        ("week", vec![Some("1"), Some("2"), Some("1"), Some("1")]),
        ("service", vec![Some("emergency"), Some("emergency"), Some("ICU "), Some("surgery")]),
        ("patients_admitted", vec![Some("10"), Some("6"), Some("3"), Some("5")]),
        ("patients_refused", vec![Some("4"), Some("1"), Some("0"), Some("7")]),
        ("patient_satisfaction", vec![Some("75"), Some("70"), Some("80"), Some("85")]),
        ("staff_morale", vec![Some("70"), Some("50"), Some("80"), Some("60")]),
        ("event", vec![Some(""), Some("flu"), None, Some("strike")]),
    ]);
    let staff = text_df(vec![
        ("staff_id", vec![Some("S1"), Some("S2"), Some("S3")]),
        ("service", vec![Some("emergency"), Some("emergency"), Some("ICU")]),
    ]);
    let schedule = text_df(vec![
        ("week", vec![Some("1"), Some("1"), Some("1"), Some("2"), Some("1")]),
        (
            "service",
            vec![Some("emergency"), Some(" emergency"), Some("emergency"), Some("emergency"), Some("ICU")],
        ),
        ("present", vec![Some("1"), Some("1"), Some("0"), Some("0"), Some("1")]),
    ]);
    HospitalStore::new(patients, weekly, staff, schedule)
}

pub fn cleaned_store() -> (HospitalStore, CleaningPipeline) {
    let mut store = raw_store();
    let mut pipeline = CleaningPipeline::new(CleaningOptions::default());
    pipeline.run_all(&mut store).unwrap();
    (store, pipeline)
}
