//! Shared aggregation helpers for the reporting queries.

use anyhow::Result;
use chrono::NaiveDate;

use ward_model::columns::SERVICE;
use ward_transform::TableFrame;
use ward_transform::data_utils::text_column;

/// Date format used in report rows.
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Running average that ignores missing values, like SQL `AVG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    pub fn push(&mut self, value: Option<f64>) {
        if let Some(value) = value {
            self.sum += value;
            self.count += 1;
        }
    }

    /// `None` over an empty set.
    pub fn value(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Service keys for each row. Rows with a null service have no key and are
/// left out of every service-grouped report.
pub fn service_keys(frame: &TableFrame) -> Result<Vec<Option<String>>> {
    Ok(text_column(frame, SERVICE)?)
}

pub fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(REPORT_DATE_FORMAT).to_string())
}
