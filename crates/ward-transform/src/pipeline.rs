//! Ordered execution of the cleaning stages.
//!
//! The pipeline is an explicit sequence of named [`Stage`]s. Before a stage
//! runs, every stage it [requires](Stage::requires) must already have
//! completed on this pipeline; otherwise the stage is refused with
//! [`TransformError::StageOrder`] and the store is left untouched.
//!
//! There is no transaction around a run: when a stage fails, the stages that
//! completed before it stay applied.
//!
//! # Example
//!
//! ```ignore
//! use ward_transform::{CleaningPipeline, HospitalStore};
//!
//! let mut pipeline = CleaningPipeline::new(CleaningOptions::default());
//! let summary = pipeline.run_all(&mut store)?;
//! ```

use std::collections::BTreeSet;
use std::time::Instant;

use tracing::{info, info_span};

use ward_model::{CleaningOptions, CleaningSummary, Stage, StageOutcome};

use crate::audit::RemovalAudit;
use crate::error::{Result, TransformError};
use crate::frame::HospitalStore;
use crate::stages::{
    compute_stay_duration, default_missing_event, normalize_service_text, remove_invalid_stays,
};

/// Runs stages against a store while tracking which have completed.
#[derive(Debug, Clone, Default)]
pub struct CleaningPipeline {
    options: CleaningOptions,
    completed: BTreeSet<Stage>,
    audit: RemovalAudit,
}

impl CleaningPipeline {
    pub fn new(options: CleaningOptions) -> Self {
        Self {
            options,
            completed: BTreeSet::new(),
            audit: RemovalAudit::new(),
        }
    }

    /// Stages applied so far.
    pub fn completed(&self) -> &BTreeSet<Stage> {
        &self.completed
    }

    pub fn is_completed(&self, stage: Stage) -> bool {
        self.completed.contains(&stage)
    }

    /// Rows deleted by the removal stage, when auditing is enabled.
    pub fn audit(&self) -> &RemovalAudit {
        &self.audit
    }

    /// Check that `stage` may run now.
    pub fn check_preconditions(&self, stage: Stage) -> Result<()> {
        match stage.requires().iter().find(|required| !self.is_completed(**required)) {
            Some(missing) => Err(TransformError::StageOrder {
                stage,
                missing: *missing,
            }),
            None => Ok(()),
        }
    }

    /// Check that the store is clean enough for the reporting queries.
    pub fn ensure_report_ready(&self) -> Result<()> {
        for required in Stage::required_for_reports() {
            if !self.is_completed(*required) {
                return Err(TransformError::NotReportReady { missing: *required });
            }
        }
        Ok(())
    }

    /// Apply a single stage. Returns one outcome per table touched.
    pub fn run_stage(
        &mut self,
        stage: Stage,
        store: &mut HospitalStore,
    ) -> Result<Vec<StageOutcome>> {
        self.check_preconditions(stage)?;
        let span = info_span!("stage", stage = %stage);
        let _guard = span.enter();
        let start = Instant::now();

        let outcomes = match stage {
            Stage::NormalizeServiceText => normalize_service_text(store)?,
            Stage::DefaultMissingEvent => {
                vec![default_missing_event(store, &self.options.default_event)?]
            }
            Stage::RemoveInvalidStays => {
                let audit = self
                    .options
                    .keep_removal_audit
                    .then_some(&mut self.audit);
                vec![remove_invalid_stays(store, audit)?]
            }
            Stage::ComputeStayDuration => vec![compute_stay_duration(store)?],
        };

        for outcome in &outcomes {
            info!(
                table = %outcome.table,
                rows_examined = outcome.rows_examined,
                rows_affected = outcome.rows_affected,
                duration_ms = start.elapsed().as_millis(),
                "stage applied"
            );
        }
        self.completed.insert(stage);
        Ok(outcomes)
    }

    /// Apply every stage in pipeline order. Halts on the first failure.
    pub fn run_all(&mut self, store: &mut HospitalStore) -> Result<CleaningSummary> {
        let counts_before = store.counts();
        let mut outcomes = Vec::new();
        for stage in Stage::ALL {
            outcomes.extend(self.run_stage(stage, store)?);
        }
        Ok(CleaningSummary {
            outcomes,
            counts_before,
            counts_after: store.counts(),
        })
    }
}
