//! Runs a whole edit file inside one transaction.

use lcms_core::entities::EditRow;
use lcms_db::service::IonService;
use serde::Serialize;

use crate::error::ReconcileError;
use crate::reconcile::Reconciler;
use crate::store::{BatchStore, Validator};

/// Whether a successful batch is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchMode {
    #[default]
    Commit,
    /// Run every row, then roll back.
    DryRun,
}

/// A curated ion created by the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedOverride {
    pub line: u64,
    pub result_id: i64,
    pub curated_ion_id: i64,
    /// The manual pick this override replaced, if there was one.
    pub previous: Option<String>,
    pub value: String,
}

/// Per-outcome tally of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub applied: Vec<AppliedOverride>,
    pub unchanged: usize,
    pub unset: usize,
    /// `false` for a dry run.
    pub committed: bool,
}

impl BatchReport {
    #[must_use]
    pub fn rows(&self) -> usize {
        self.applied.len() + self.unchanged + self.unset
    }
}

/// Apply `rows` all-or-nothing in a new transaction on `service`.
///
/// # Errors
///
/// Returns the first row's `ReconcileError`, or `Persistence` if the
/// transaction cannot be started or committed.
pub async fn run_batch<V: Validator>(
    service: &IonService,
    reconciler: &Reconciler<'_, V>,
    rows: &[EditRow],
    mode: BatchMode,
) -> Result<BatchReport, ReconcileError> {
    let tx = service
        .begin_batch()
        .await
        .map_err(ReconcileError::persistence("begin batch"))?;
    apply_in_batch(tx, reconciler, rows, mode).await
}

/// Apply `rows` inside `batch`, then commit or roll back.
///
/// On the first failing row the batch is rolled back and that row's error
/// is returned; nothing from the batch is visible afterwards. If the
/// rollback itself fails it is logged and the row error is still returned.
///
/// # Errors
///
/// Returns the first row's `ReconcileError`, or `Persistence` if the batch
/// cannot be committed (or, for a dry run, rolled back).
pub async fn apply_in_batch<B: BatchStore, V: Validator>(
    batch: B,
    reconciler: &Reconciler<'_, V>,
    rows: &[EditRow],
    mode: BatchMode,
) -> Result<BatchReport, ReconcileError> {
    let mut report = match reconciler.apply_rows(&batch, rows).await {
        Ok(report) => report,
        Err(error) => {
            tracing::debug!(kind = error.kind(), "row failed, rolling back batch");
            if let Err(rollback_error) = batch.rollback().await {
                tracing::warn!(error = %rollback_error, "rollback after failed row did not complete");
            }
            return Err(error);
        }
    };

    match mode {
        BatchMode::Commit => {
            batch
                .commit()
                .await
                .map_err(ReconcileError::persistence("commit batch"))?;
            report.committed = true;
        }
        BatchMode::DryRun => {
            batch
                .rollback()
                .await
                .map_err(ReconcileError::persistence("roll back dry run"))?;
        }
    }

    tracing::info!(
        author = reconciler.author(),
        rows = report.rows(),
        applied = report.applied.len(),
        unchanged = report.unchanged,
        unset = report.unset,
        committed = report.committed,
        "curation batch finished"
    );
    Ok(report)
}
