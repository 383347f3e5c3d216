//! Per-row reconciliation of manual best-ion picks.
//!
//! For one edit row:
//! 1. parse the result id
//! 2. load the result
//! 3. follow its override reference to get the current manual pick
//! 4. skip if the row's pick is the unset token
//! 5. skip if the row's pick equals the current one
//! 6. otherwise validate, append a curated ion, and repoint the result
//!
//! Which curated ion is current is decided only by the result's
//! `manual_override_id`, never by timestamps.

use chrono::Utc;
use lcms_core::columns::{NULL_VALUE, STANDARD_ION_RESULT_ID};
use lcms_core::entities::{EditRow, StandardIonResult};
use lcms_core::vocabulary::Vocabulary;
use lcms_db::error::DatabaseError;

use crate::batch::{AppliedOverride, BatchReport};
use crate::error::ReconcileError;
use crate::store::{CurationStore, NewCuration, ResultStore, Validator};

/// What happened to one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// The manual pick cell held the unset token.
    Unset,
    /// The manual pick equals the current override.
    Unchanged,
    /// A new curated ion was appended and made current.
    Applied(AppliedOverride),
}

/// Applies edit rows on behalf of one author.
///
/// Holds only borrowed, immutable configuration, so one `Reconciler` can be
/// reused for every row of a run.
pub struct Reconciler<'a, V: Validator = Vocabulary> {
    validator: &'a V,
    author: &'a str,
    null_value: &'a str,
}

impl<'a, V: Validator> Reconciler<'a, V> {
    #[must_use]
    pub const fn new(validator: &'a V, author: &'a str) -> Self {
        Self {
            validator,
            author,
            null_value: NULL_VALUE,
        }
    }

    /// Use a different unset token than `NULL`.
    #[must_use]
    pub const fn with_null_value(mut self, null_value: &'a str) -> Self {
        self.null_value = null_value;
        self
    }

    #[must_use]
    pub const fn author(&self) -> &str {
        self.author
    }

    /// Apply rows in order, stopping at the first error.
    ///
    /// Earlier rows' writes are NOT undone here; the caller owns the
    /// transaction and must roll it back on `Err`.
    ///
    /// # Errors
    ///
    /// Returns the first `ReconcileError` raised by any row.
    pub async fn apply_rows<S>(
        &self,
        store: &S,
        rows: &[EditRow],
    ) -> Result<BatchReport, ReconcileError>
    where
        S: ResultStore + CurationStore,
    {
        let mut report = BatchReport::default();
        for row in rows {
            match self.apply_row(store, row).await? {
                RowOutcome::Unset => report.unset += 1,
                RowOutcome::Unchanged => report.unchanged += 1,
                RowOutcome::Applied(applied) => report.applied.push(applied),
            }
        }
        Ok(report)
    }

    /// Apply a single row.
    ///
    /// # Errors
    ///
    /// - `MalformedInput` if the result id is missing or not an integer
    /// - `NotFound` if the result does not exist
    /// - `InvalidValue` if a changed pick is outside the vocabulary
    /// - `Persistence` if the store fails a read or write
    pub async fn apply_row<S>(&self, store: &S, row: &EditRow) -> Result<RowOutcome, ReconcileError>
    where
        S: ResultStore + CurationStore,
    {
        let line = row.line;
        let result_id = row
            .parsed_result_id()
            .ok_or_else(|| ReconcileError::MalformedInput {
                line,
                reason: format!(
                    "{STANDARD_ION_RESULT_ID} must be an integer, got '{}'",
                    row.result_id
                ),
            })?;
        tracing::debug!(line, result_id, manual_pick = %row.manual_pick, "reconciling row");

        let result = store
            .get_result_by_id(result_id)
            .await
            .map_err(ReconcileError::persistence(format!(
                "line {line}: load standard ion result {result_id}"
            )))?
            .ok_or(ReconcileError::NotFound { line, result_id })?;

        let current = current_pick(store, &result, line).await?;

        let proposed = row.manual_pick.as_str();
        if proposed == self.null_value {
            return Ok(RowOutcome::Unset);
        }
        if current.as_deref() == Some(proposed) {
            return Ok(RowOutcome::Unchanged);
        }

        if !self.validator.is_permitted(proposed) {
            return Err(ReconcileError::InvalidValue {
                line,
                value: proposed.to_string(),
            });
        }

        let curated = store
            .insert_curation(NewCuration {
                created_at: Utc::now(),
                author: self.author,
                best_metlin_ion: proposed,
                note: row.note.as_deref(),
                standard_ion_result_id: result_id,
            })
            .await
            .map_err(ReconcileError::persistence(format!(
                "line {line}: insert curated ion for result {result_id}"
            )))?;

        let mut updated = result;
        updated.manual_override_id = Some(curated.id);
        store
            .update_result(&updated)
            .await
            .map_err(ReconcileError::persistence(format!(
                "line {line}: set manual override of result {result_id}"
            )))?;

        tracing::info!(
            line,
            result_id,
            curated_ion_id = curated.id,
            previous = current.as_deref().unwrap_or(self.null_value),
            value = proposed,
            "manual override applied"
        );

        Ok(RowOutcome::Applied(AppliedOverride {
            line,
            result_id,
            curated_ion_id: curated.id,
            previous: current,
            value: curated.best_metlin_ion,
        }))
    }
}

/// The pick the result's override reference resolves to, or `None`.
async fn current_pick<S: CurationStore>(
    store: &S,
    result: &StandardIonResult,
    line: u64,
) -> Result<Option<String>, ReconcileError> {
    let Some(override_id) = result.manual_override_id else {
        return Ok(None);
    };
    let context = || {
        format!(
            "line {line}: resolve manual override {override_id} of result {}",
            result.id
        )
    };
    let curated = store
        .get_curation_by_id(override_id)
        .await
        .map_err(ReconcileError::persistence(context()))?
        .ok_or_else(|| ReconcileError::Persistence {
            context: context(),
            source: DatabaseError::InvalidState(format!(
                "curated ion {override_id} does not exist"
            )),
        })?;
    Ok(Some(curated.best_metlin_ion))
}
