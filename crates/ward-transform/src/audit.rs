//! Audit trail of deleted patient rows.
//!
//! The removal stage deletes inverted stays from the store for good; when
//! auditing is enabled the deleted rows are kept here so they can be written
//! out alongside the cleaned tables.

use polars::prelude::DataFrame;

use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct RemovalAudit {
    removed: Option<DataFrame>,
}

impl RemovalAudit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append deleted rows. Empty frames are ignored.
    pub fn record(&mut self, rows: DataFrame) -> Result<()> {
        if rows.height() == 0 {
            return Ok(());
        }
        match self.removed.as_mut() {
            Some(existing) => {
                existing.vstack_mut(&rows)?;
            }
            None => self.removed = Some(rows),
        }
        Ok(())
    }

    pub fn removed(&self) -> Option<&DataFrame> {
        self.removed.as_ref()
    }

    pub fn len(&self) -> usize {
        self.removed.as_ref().map_or(0, DataFrame::height)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn rows(ids: &[&str]) -> DataFrame {
        DataFrame::new(vec![
            Series::new("patient_id".into(), ids.to_vec()).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn accumulates_removed_rows() {
        let mut audit = RemovalAudit::new();
        assert!(audit.is_empty());

        audit.record(rows(&["P1"])).unwrap();
        audit.record(rows(&[])).unwrap();
        audit.record(rows(&["P7", "P9"])).unwrap();

        assert_eq!(audit.len(), 3);
        let ids = audit.removed().unwrap().column("patient_id").unwrap().str().unwrap();
        assert_eq!(ids.get(2), Some("P9"));
    }
}
