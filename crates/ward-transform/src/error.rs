//! Error types for the cleaning pipeline.

use thiserror::Error;

use ward_model::{Stage, TableKind};

/// Errors raised while transforming the hospital store.
///
/// Schema and type errors are fatal for the stage that hits them. Data-quality
/// issues (inverted stays, missing events) are never errors; the stages
/// correct them by policy.
#[derive(Debug, Error)]
pub enum TransformError {
    // === Schema Errors ===
    /// A table was not supplied to the store.
    #[error("table '{table}' is not loaded")]
    MissingTable { table: TableKind },

    /// A column referenced by a stage or report is absent.
    #[error("table '{table}' has no column '{column}'")]
    MissingColumn { table: TableKind, column: String },

    // === Type Errors ===
    /// A non-empty date cell that is not a recognizable date.
    #[error("invalid date '{value}' in {table}.{column} (row {row})")]
    InvalidDate {
        table: TableKind,
        column: String,
        row: usize,
        value: String,
    },

    /// A non-empty numeric cell that is not a number.
    #[error("invalid number '{value}' in {table}.{column} (row {row})")]
    InvalidNumber {
        table: TableKind,
        column: String,
        row: usize,
        value: String,
    },

    // === Ordering Errors ===
    /// A stage was run before one of its preconditions.
    #[error("stage '{stage}' requires '{missing}' to run first")]
    StageOrder { stage: Stage, missing: Stage },

    /// A report was requested before the store was cleaned.
    #[error("reports require stage '{missing}' to run first")]
    NotReportReady { missing: Stage },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
