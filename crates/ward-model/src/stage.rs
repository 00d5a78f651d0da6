//! Named stages of the cleaning and enrichment pipeline.
//!
//! Stages run in the fixed order of [`Stage::ALL`]. Each stage names the
//! stages that must already have been applied before it may run; the
//! pipeline executor refuses to run a stage whose preconditions are unmet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::table::TableKind;

/// A single in-place transformation of the hospital store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Strip leading/trailing whitespace from `service` in all four tables.
    NormalizeServiceText,
    /// Replace null or empty `event` values with the default category.
    DefaultMissingEvent,
    /// Delete patient rows whose departure precedes arrival.
    RemoveInvalidStays,
    /// Add (or refresh) the `Stay_Duration` column on patients.
    ComputeStayDuration,
}

impl Stage {
    /// Pipeline order.
    pub const ALL: [Stage; 4] = [
        Stage::NormalizeServiceText,
        Stage::DefaultMissingEvent,
        Stage::RemoveInvalidStays,
        Stage::ComputeStayDuration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::NormalizeServiceText => "normalize-service-text",
            Stage::DefaultMissingEvent => "default-missing-event",
            Stage::RemoveInvalidStays => "remove-invalid-stays",
            Stage::ComputeStayDuration => "compute-stay-duration",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Stage::NormalizeServiceText => "Trim whitespace from the service join key",
            Stage::DefaultMissingEvent => "Default null/empty events to \"Normal\"",
            Stage::RemoveInvalidStays => "Delete stays with departure before arrival",
            Stage::ComputeStayDuration => "Compute Stay_Duration in whole days",
        }
    }

    /// Tables mutated by this stage.
    pub fn tables(&self) -> &'static [TableKind] {
        match self {
            Stage::NormalizeServiceText => &TableKind::ALL,
            Stage::DefaultMissingEvent => &[TableKind::ServicesWeekly],
            Stage::RemoveInvalidStays | Stage::ComputeStayDuration => &[TableKind::Patients],
        }
    }

    /// Stages that must have completed before this one runs.
    pub fn requires(&self) -> &'static [Stage] {
        match self {
            Stage::NormalizeServiceText | Stage::DefaultMissingEvent => &[],
            Stage::RemoveInvalidStays => &[],
            // Duration on an inverted range is negative and would skew every average.
            Stage::ComputeStayDuration => &[Stage::RemoveInvalidStays],
        }
    }

    /// Stages the reporting queries depend on.
    pub fn required_for_reports() -> &'static [Stage] {
        &[Stage::NormalizeServiceText, Stage::ComputeStayDuration]
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownStage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prerequisites_precede_dependents() {
        for (position, stage) in Stage::ALL.iter().enumerate() {
            for required in stage.requires() {
                let required_position = Stage::ALL
                    .iter()
                    .position(|candidate| candidate == required)
                    .unwrap();
                assert!(required_position < position, "{required} must run before {stage}");
            }
        }
    }

    #[test]
    fn parses_identifiers() {
        assert_eq!(
            "compute_stay_duration".parse::<Stage>(),
            Ok(Stage::ComputeStayDuration)
        );
        assert_eq!(
            "Remove-Invalid-Stays".parse::<Stage>(),
            Ok(Stage::RemoveInvalidStays)
        );
        assert_eq!(
            "vacuum".parse::<Stage>(),
            Err(ModelError::UnknownStage("vacuum".to_string()))
        );
    }

    #[test]
    fn normalization_touches_every_table() {
        assert_eq!(Stage::NormalizeServiceText.tables().len(), 4);
        assert_eq!(
            Stage::DefaultMissingEvent.tables(),
            &[TableKind::ServicesWeekly]
        );
    }
}
