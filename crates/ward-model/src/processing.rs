use serde::{Deserialize, Serialize};

use crate::stage::Stage;
use crate::table::TableKind;

/// Result of applying one stage to one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageOutcome {
    pub stage: Stage,
    pub table: TableKind,
    pub rows_examined: usize,
    pub rows_affected: usize,
    /// Data-quality observations that were flagged but not corrected.
    pub notes: Vec<String>,
}

impl StageOutcome {
    pub fn new(stage: Stage, table: TableKind, rows_examined: usize, rows_affected: usize) -> Self {
        Self {
            stage,
            table,
            rows_examined,
            rows_affected,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// Row counts of the four tables at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCounts {
    pub patients: usize,
    pub services_weekly: usize,
    pub staff: usize,
    pub staff_schedule: usize,
}

impl TableCounts {
    pub fn get(&self, table: TableKind) -> usize {
        match table {
            TableKind::Patients => self.patients,
            TableKind::ServicesWeekly => self.services_weekly,
            TableKind::Staff => self.staff,
            TableKind::StaffSchedule => self.staff_schedule,
        }
    }

    pub fn set(&mut self, table: TableKind, count: usize) {
        match table {
            TableKind::Patients => self.patients = count,
            TableKind::ServicesWeekly => self.services_weekly = count,
            TableKind::Staff => self.staff = count,
            TableKind::StaffSchedule => self.staff_schedule = count,
        }
    }

    pub fn total(&self) -> usize {
        self.patients + self.services_weekly + self.staff + self.staff_schedule
    }
}

/// Everything a full cleaning run did, in stage order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningSummary {
    pub outcomes: Vec<StageOutcome>,
    pub counts_before: TableCounts,
    pub counts_after: TableCounts,
}

impl CleaningSummary {
    pub fn total_rows_affected(&self) -> usize {
        self.outcomes.iter().map(|outcome| outcome.rows_affected).sum()
    }

    /// Patient rows deleted by the invalid-stay stage.
    pub fn rows_removed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.stage == Stage::RemoveInvalidStays)
            .map(|outcome| outcome.rows_affected)
            .sum()
    }

    pub fn notes(&self) -> impl Iterator<Item = (&StageOutcome, &str)> {
        self.outcomes
            .iter()
            .flat_map(|outcome| outcome.notes.iter().map(move |note| (outcome, note.as_str())))
    }
}
