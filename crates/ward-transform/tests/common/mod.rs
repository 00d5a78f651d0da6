#![allow(dead_code)]

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use ward_transform::HospitalStore;

pub fn text_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

pub fn patients(rows: &[(&str, &str, &str, &str)]) -> DataFrame {
    text_df(vec![
        ("patient_id", rows.iter().map(|r| Some(r.0)).collect()),
        ("service", rows.iter().map(|r| Some(r.1)).collect()),
        ("arrival_date", rows.iter().map(|r| Some(r.2)).collect()),
        ("departure_date", rows.iter().map(|r| Some(r.3)).collect()),
        ("age", rows.iter().map(|_| Some("50")).collect()),
        ("satisfaction", rows.iter().map(|_| Some("80")).collect()),
    ])
}

pub fn weekly(rows: &[(&str, Option<&str>)]) -> DataFrame {
    text_df(vec![
        ("week", (1..=rows.len()).map(|_| Some("1")).collect()),
        ("service", rows.iter().map(|r| Some(r.0)).collect()),
        ("patients_admitted", rows.iter().map(|_| Some("10")).collect()),
        ("patients_refused", rows.iter().map(|_| Some("2")).collect()),
        ("patient_satisfaction", rows.iter().map(|_| Some("70")).collect()),
        ("staff_morale", rows.iter().map(|_| Some("60")).collect()),
        ("event", rows.iter().map(|r| r.1).collect()),
    ])
}

pub fn staff(services: &[&str]) -> DataFrame {
    text_df(vec![
        ("staff_id", services.iter().map(|_| Some("S1")).collect()),
        ("service", services.iter().map(|s| Some(*s)).collect()),
    ])
}

pub fn schedule(services: &[&str]) -> DataFrame {
    text_df(vec![
        ("week", services.iter().map(|_| Some("1")).collect()),
        ("service", services.iter().map(|s| Some(*s)).collect()),
        ("present", services.iter().map(|_| Some("1")).collect()),
    ])
}

pub fn store(
    patient_rows: &[(&str, &str, &str, &str)],
    weekly_rows: &[(&str, Option<&str>)],
) -> HospitalStore {
    HospitalStore::new(
        patients(patient_rows),
        weekly(weekly_rows),
        staff(&[" emergency", "ICU "]),
        schedule(&["\temergency"]),
    )
}

pub fn strings(df: &DataFrame, column: &str) -> Vec<Option<String>> {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect()
}

pub fn ints(df: &DataFrame, column: &str) -> Vec<Option<i64>> {
    df.column(column).unwrap().i64().unwrap().into_iter().collect()
}
