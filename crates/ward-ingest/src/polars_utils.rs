//! Polars `AnyValue` and column helpers.
//!
//! Source tables are loaded with every column as text, so typing happens
//! here, one cell at a time. Null and blank cells are "missing"; anything
//! else that fails to parse is reported back to the caller as the raw text
//! so it can surface as a type error.

use polars::prelude::{AnyValue, DataFrame};

/// Resolve a column by name, ignoring ASCII case.
///
/// Returns the column's actual spelling in the frame.
pub fn find_column(df: &DataFrame, name: &str) -> Option<String> {
    df.get_column_names()
        .into_iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(name))
        .map(|candidate| candidate.to_string())
}

/// Returns true if the frame has a column matching `name`, ignoring case.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    find_column(df, name).is_some()
}

/// Converts a cell to text. Returns `None` for null.
///
/// Booleans become `1`/`0`, matching integer-encoded flags such as `present`.
pub fn any_to_text(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(v.to_string()),
        AnyValue::Int16(v) => Some(v.to_string()),
        AnyValue::Int32(v) => Some(v.to_string()),
        AnyValue::Int64(v) => Some(v.to_string()),
        AnyValue::UInt8(v) => Some(v.to_string()),
        AnyValue::UInt16(v) => Some(v.to_string()),
        AnyValue::UInt32(v) => Some(v.to_string()),
        AnyValue::UInt64(v) => Some(v.to_string()),
        AnyValue::Float32(v) => Some(format_numeric(f64::from(v))),
        AnyValue::Float64(v) => Some(format_numeric(v)),
        AnyValue::String(s) => Some(s.to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        AnyValue::Boolean(b) => Some(if b { "1" } else { "0" }.to_string()),
        other => Some(other.to_string()),
    }
}

/// Formats a floating-point number without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Converts a cell to f64.
///
/// `Ok(None)` for null or blank cells, `Err(raw)` for text that is not a number.
pub fn any_to_f64(value: AnyValue<'_>) -> Result<Option<f64>, String> {
    match value {
        AnyValue::Null => Ok(None),
        AnyValue::Int8(v) => Ok(Some(f64::from(v))),
        AnyValue::Int16(v) => Ok(Some(f64::from(v))),
        AnyValue::Int32(v) => Ok(Some(f64::from(v))),
        AnyValue::Int64(v) => Ok(Some(v as f64)),
        AnyValue::UInt8(v) => Ok(Some(f64::from(v))),
        AnyValue::UInt16(v) => Ok(Some(f64::from(v))),
        AnyValue::UInt32(v) => Ok(Some(f64::from(v))),
        AnyValue::UInt64(v) => Ok(Some(v as f64)),
        AnyValue::Float32(v) => Ok(Some(f64::from(v))),
        AnyValue::Float64(v) => Ok(Some(v)),
        AnyValue::Boolean(b) => Ok(Some(if b { 1.0 } else { 0.0 })),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        other => Err(other.to_string()),
    }
}

/// Converts a cell to i64.
///
/// Integral floats (`3.0`) are accepted; fractional values are not.
pub fn any_to_i64(value: AnyValue<'_>) -> Result<Option<i64>, String> {
    match value {
        AnyValue::Null => Ok(None),
        AnyValue::Int8(v) => Ok(Some(i64::from(v))),
        AnyValue::Int16(v) => Ok(Some(i64::from(v))),
        AnyValue::Int32(v) => Ok(Some(i64::from(v))),
        AnyValue::Int64(v) => Ok(Some(v)),
        AnyValue::UInt8(v) => Ok(Some(i64::from(v))),
        AnyValue::UInt16(v) => Ok(Some(i64::from(v))),
        AnyValue::UInt32(v) => Ok(Some(i64::from(v))),
        AnyValue::UInt64(v) => i64::try_from(v).map(Some).map_err(|_| v.to_string()),
        AnyValue::Float32(v) => integral_f64(f64::from(v)),
        AnyValue::Float64(v) => integral_f64(v),
        AnyValue::Boolean(b) => Ok(Some(i64::from(b))),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(&s),
        other => Err(other.to_string()),
    }
}

fn integral_f64(v: f64) -> Result<Option<i64>, String> {
    if v.is_finite() && v.fract() == 0.0 {
        Ok(Some(v as i64))
    } else {
        Err(format_numeric(v))
    }
}

/// Parses a string as f64. Blank strings are missing.
pub fn parse_f64(value: &str) -> Result<Option<f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| value.to_string())
}

/// Parses a string as i64. Blank strings are missing.
pub fn parse_i64(value: &str) -> Result<Option<i64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Ok(Some(parsed));
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) => integral_f64(parsed).map_err(|_| value.to_string()),
        Err(_) => Err(value.to_string()),
    }
}
