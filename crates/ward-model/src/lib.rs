pub mod columns;
pub mod error;
pub mod options;
pub mod processing;
pub mod stage;
pub mod table;

pub use error::{ModelError, Result};
pub use options::{CleaningOptions, ReportOptions};
pub use processing::{CleaningSummary, StageOutcome, TableCounts};
pub use stage::Stage;
pub use table::TableKind;
