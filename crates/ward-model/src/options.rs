//! Configuration options for cleaning and reporting.

use serde::{Deserialize, Serialize};

use crate::columns::DEFAULT_EVENT;

/// Options controlling the cleaning run.
///
/// The cleaning sequence itself is fixed; these only govern bookkeeping
/// around it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningOptions {
    /// Category written into weekly rows without an event.
    pub default_event: String,

    /// Keep removed patient rows in an audit frame instead of discarding them.
    pub keep_removal_audit: bool,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            default_event: DEFAULT_EVENT.to_string(),
            keep_removal_audit: true,
        }
    }
}

impl CleaningOptions {
    pub fn with_removal_audit(mut self, enable: bool) -> Self {
        self.keep_removal_audit = enable;
        self
    }
}

/// Presentation parameters for the reporting queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Number of most recent patients in the preview report.
    pub preview_limit: usize,

    /// Minimum age (inclusive) for the geriatric report.
    pub geriatric_min_age: i64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            preview_limit: 10,
            geriatric_min_age: 60,
        }
    }
}

impl ReportOptions {
    pub fn with_preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }

    pub fn with_geriatric_min_age(mut self, age: i64) -> Self {
        self.geriatric_min_age = age;
        self
    }
}
