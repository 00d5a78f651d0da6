//! Column extraction and replacement helpers.
//!
//! Columns are resolved case-insensitively and read cell by cell through the
//! ingest conversions, so a frame built from CSV text and one built with
//! native numeric types behave the same.

use chrono::NaiveDate;
use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};

use ward_ingest::{any_to_f64, any_to_i64, any_to_text, find_column};

use crate::error::{Result, TransformError};
use crate::frame::TableFrame;
use crate::normalization::datetime::parse_date;

/// Resolve a column on a table, failing with a schema error if absent.
pub fn required_column(frame: &TableFrame, name: &str) -> Result<String> {
    find_column(&frame.data, name).ok_or_else(|| TransformError::MissingColumn {
        table: frame.table,
        column: name.to_string(),
    })
}

/// Raw text values of a column; null cells are `None`.
pub fn text_column(frame: &TableFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = required_column(frame, name)?;
    let series = frame.data.column(&column)?;
    let mut values = Vec::with_capacity(frame.data.height());
    for idx in 0..frame.data.height() {
        values.push(any_to_text(series.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Numeric values of a column. Blank cells are `None`; anything else that is
/// not a number is a type error.
pub fn f64_column(frame: &TableFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = required_column(frame, name)?;
    let series = frame.data.column(&column)?;
    let mut values = Vec::with_capacity(frame.data.height());
    for idx in 0..frame.data.height() {
        let value = any_to_f64(series.get(idx).unwrap_or(AnyValue::Null)).map_err(|raw| {
            TransformError::InvalidNumber {
                table: frame.table,
                column: column.clone(),
                row: idx,
                value: raw,
            }
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Integer values of a column, with the same missing/invalid rules as
/// [`f64_column`].
pub fn i64_column(frame: &TableFrame, name: &str) -> Result<Vec<Option<i64>>> {
    let column = required_column(frame, name)?;
    let series = frame.data.column(&column)?;
    let mut values = Vec::with_capacity(frame.data.height());
    for idx in 0..frame.data.height() {
        let value = any_to_i64(series.get(idx).unwrap_or(AnyValue::Null)).map_err(|raw| {
            TransformError::InvalidNumber {
                table: frame.table,
                column: column.clone(),
                row: idx,
                value: raw,
            }
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Date values of a column. Null or blank cells are unknown (`None`);
/// unparseable text is a type error.
pub fn date_column(frame: &TableFrame, name: &str) -> Result<Vec<Option<NaiveDate>>> {
    let column = required_column(frame, name)?;
    let raw = text_column(frame, &column)?;
    raw.into_iter()
        .enumerate()
        .map(|(row, value)| match value {
            None => Ok(None),
            Some(text) if text.trim().is_empty() => Ok(None),
            Some(text) => parse_date(&text)
                .map(Some)
                .ok_or_else(|| TransformError::InvalidDate {
                    table: frame.table,
                    column: column.clone(),
                    row,
                    value: text,
                }),
        })
        .collect()
}

/// Replace (or add) a nullable text column.
pub fn set_text_column(df: &mut DataFrame, name: &str, values: Vec<Option<String>>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

/// Replace (or add) a nullable integer column.
pub fn set_i64_column(df: &mut DataFrame, name: &str, values: Vec<Option<i64>>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

/// Keep rows where `keep` is true; returns the rows that were dropped.
pub fn split_rows(df: &mut DataFrame, keep: &[bool]) -> Result<DataFrame> {
    let keep_mask = BooleanChunked::from_slice("keep".into(), keep);
    let drop: Vec<bool> = keep.iter().map(|value| !*value).collect();
    let drop_mask = BooleanChunked::from_slice("drop".into(), &drop);
    let dropped = df.filter(&drop_mask)?;
    *df = df.filter(&keep_mask)?;
    Ok(dropped)
}
