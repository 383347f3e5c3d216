//! The seams the reconciler works through.
//!
//! `ResultStore`, `CurationStore` and `BatchStore` are implemented for
//! [`lcms_db::batch::BatchTx`], so every read and write of a load happens
//! inside its transaction. `Validator` is implemented for [`Vocabulary`].
//! Tests substitute in-memory versions of all three.
#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use lcms_core::entities::{CuratedIon, StandardIonResult};
use lcms_core::vocabulary::Vocabulary;
use lcms_db::batch::BatchTx;
use lcms_db::error::DatabaseError;

/// Read and write access to standard ion results.
pub trait ResultStore {
    /// `Ok(None)` when no result has this id.
    async fn get_result_by_id(&self, id: i64)
    -> Result<Option<StandardIonResult>, DatabaseError>;

    /// Fails if the row could not be written (e.g., it no longer exists).
    async fn update_result(&self, result: &StandardIonResult) -> Result<(), DatabaseError>;
}

/// Append-only access to curated ions.
pub trait CurationStore {
    /// `Ok(None)` when no curated ion has this id.
    async fn get_curation_by_id(&self, id: i64) -> Result<Option<CuratedIon>, DatabaseError>;

    async fn insert_curation(&self, new: NewCuration<'_>) -> Result<CuratedIon, DatabaseError>;
}

/// A store scoped to one transaction, consumed by commit or rollback.
pub trait BatchStore: ResultStore + CurationStore + Sized {
    async fn commit(self) -> Result<(), DatabaseError>;

    async fn rollback(self) -> Result<(), DatabaseError>;
}

/// Fields of a curated ion before the store assigns its id.
#[derive(Debug, Clone, Copy)]
pub struct NewCuration<'a> {
    pub created_at: DateTime<Utc>,
    pub author: &'a str,
    pub best_metlin_ion: &'a str,
    pub note: Option<&'a str>,
    pub standard_ion_result_id: i64,
}

/// Membership test against the permitted override values.
pub trait Validator {
    fn is_permitted(&self, value: &str) -> bool;
}

impl Validator for Vocabulary {
    fn is_permitted(&self, value: &str) -> bool {
        self.contains(value)
    }
}

impl ResultStore for BatchTx {
    async fn get_result_by_id(
        &self,
        id: i64,
    ) -> Result<Option<StandardIonResult>, DatabaseError> {
        self.find_result(id).await
    }

    async fn update_result(&self, result: &StandardIonResult) -> Result<(), DatabaseError> {
        Self::update_result(self, result).await
    }
}

impl CurationStore for BatchTx {
    async fn get_curation_by_id(&self, id: i64) -> Result<Option<CuratedIon>, DatabaseError> {
        self.find_curated_ion(id).await
    }

    async fn insert_curation(&self, new: NewCuration<'_>) -> Result<CuratedIon, DatabaseError> {
        self.insert_curated_ion(
            new.created_at,
            new.author,
            new.best_metlin_ion,
            new.note,
            new.standard_ion_result_id,
        )
        .await
    }
}

impl BatchStore for BatchTx {
    async fn commit(self) -> Result<(), DatabaseError> {
        Self::commit(self).await
    }

    async fn rollback(self) -> Result<(), DatabaseError> {
        Self::rollback(self).await
    }
}
