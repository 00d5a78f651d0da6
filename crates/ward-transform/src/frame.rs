//! Table frames and the hospital store.
//!
//! The four relations are held explicitly in a [`HospitalStore`] that is
//! passed to every stage and report. Nothing is ambient: a stage sees exactly
//! the store it is handed and leaves its changes there.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;

use ward_ingest::LoadedTable;
use ward_model::{TableCounts, TableKind};

use crate::error::{Result, TransformError};

/// One hospital table with its provenance.
#[derive(Debug, Clone)]
pub struct TableFrame {
    /// Which relation this is.
    pub table: TableKind,
    /// The table contents.
    pub data: DataFrame,
    /// The CSV file the rows were loaded from, when known.
    pub source: Option<PathBuf>,
}

impl TableFrame {
    pub fn new(table: TableKind, data: DataFrame) -> Self {
        Self {
            table,
            data,
            source: None,
        }
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Returns the number of records in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl From<LoadedTable> for TableFrame {
    fn from(loaded: LoadedTable) -> Self {
        TableFrame::new(loaded.table, loaded.data).with_source(loaded.path)
    }
}

/// The four relations the pipeline mutates in place.
#[derive(Debug, Clone)]
pub struct HospitalStore {
    patients: TableFrame,
    services_weekly: TableFrame,
    staff: TableFrame,
    staff_schedule: TableFrame,
}

impl HospitalStore {
    pub fn new(
        patients: DataFrame,
        services_weekly: DataFrame,
        staff: DataFrame,
        staff_schedule: DataFrame,
    ) -> Self {
        Self {
            patients: TableFrame::new(TableKind::Patients, patients),
            services_weekly: TableFrame::new(TableKind::ServicesWeekly, services_weekly),
            staff: TableFrame::new(TableKind::Staff, staff),
            staff_schedule: TableFrame::new(TableKind::StaffSchedule, staff_schedule),
        }
    }

    /// Build a store from loaded tables. Every kind must be present once.
    pub fn from_loaded(tables: Vec<LoadedTable>) -> Result<Self> {
        let mut patients = None;
        let mut services_weekly = None;
        let mut staff = None;
        let mut staff_schedule = None;
        for loaded in tables {
            let slot = match loaded.table {
                TableKind::Patients => &mut patients,
                TableKind::ServicesWeekly => &mut services_weekly,
                TableKind::Staff => &mut staff,
                TableKind::StaffSchedule => &mut staff_schedule,
            };
            *slot = Some(TableFrame::from(loaded));
        }
        let require = |frame: Option<TableFrame>, table| {
            frame.ok_or(TransformError::MissingTable { table })
        };
        Ok(Self {
            patients: require(patients, TableKind::Patients)?,
            services_weekly: require(services_weekly, TableKind::ServicesWeekly)?,
            staff: require(staff, TableKind::Staff)?,
            staff_schedule: require(staff_schedule, TableKind::StaffSchedule)?,
        })
    }

    pub fn table(&self, table: TableKind) -> &TableFrame {
        match table {
            TableKind::Patients => &self.patients,
            TableKind::ServicesWeekly => &self.services_weekly,
            TableKind::Staff => &self.staff,
            TableKind::StaffSchedule => &self.staff_schedule,
        }
    }

    pub fn table_mut(&mut self, table: TableKind) -> &mut TableFrame {
        match table {
            TableKind::Patients => &mut self.patients,
            TableKind::ServicesWeekly => &mut self.services_weekly,
            TableKind::Staff => &mut self.staff,
            TableKind::StaffSchedule => &mut self.staff_schedule,
        }
    }

    pub fn patients(&self) -> &TableFrame {
        &self.patients
    }

    pub fn services_weekly(&self) -> &TableFrame {
        &self.services_weekly
    }

    pub fn staff(&self) -> &TableFrame {
        &self.staff
    }

    pub fn staff_schedule(&self) -> &TableFrame {
        &self.staff_schedule
    }

    pub fn frames(&self) -> impl Iterator<Item = &TableFrame> {
        TableKind::ALL.into_iter().map(|table| self.table(table))
    }

    pub fn counts(&self) -> TableCounts {
        let mut counts = TableCounts::default();
        for frame in self.frames() {
            counts.set(frame.table, frame.record_count());
        }
        counts
    }
}
