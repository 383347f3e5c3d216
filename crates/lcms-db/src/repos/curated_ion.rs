//! Curated ion repository.
//!
//! Append-only: rows are inserted and read, never updated or deleted (the
//! schema enforces this with triggers).

use chrono::{DateTime, Utc};

use lcms_core::entities::CuratedIon;

use crate::batch::BatchTx;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, parse_datetime};
use crate::service::IonService;

fn row_to_curated_ion(row: &libsql::Row) -> Result<CuratedIon, DatabaseError> {
    Ok(CuratedIon {
        id: row.get::<i64>(0)?,
        created_at: parse_datetime(&row.get::<String>(1)?)?,
        author: row.get::<String>(2)?,
        best_metlin_ion: row.get::<String>(3)?,
        note: get_opt_string(row, 4)?,
        standard_ion_result_id: row.get::<i64>(5)?,
    })
}

async fn find_curated_ion(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Option<CuratedIon>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id, created_at, author, best_metlin_ion, note, standard_ion_result_id
             FROM curated_standard_metlin_ions WHERE id = ?1",
            libsql::params![id],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_curated_ion(&row)?)),
        None => Ok(None),
    }
}

impl IonService {
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_curated_ion(&self, id: i64) -> Result<Option<CuratedIon>, DatabaseError> {
        find_curated_ion(self.db().conn(), id).await
    }

    /// Every curated ion recorded for a result, oldest first.
    ///
    /// Ties on `created_at` fall back to insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_curated_ions_for_result(
        &self,
        standard_ion_result_id: i64,
    ) -> Result<Vec<CuratedIon>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, created_at, author, best_metlin_ion, note, standard_ion_result_id
                 FROM curated_standard_metlin_ions
                 WHERE standard_ion_result_id = ?1
                 ORDER BY created_at, id",
                libsql::params![standard_ion_result_id],
            )
            .await?;

        let mut ions = Vec::new();
        while let Some(row) = rows.next().await? {
            ions.push(row_to_curated_ion(&row)?);
        }
        Ok(ions)
    }

    /// Total number of curated ions in the store.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_curated_ions(&self) -> Result<i64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM curated_standard_metlin_ions", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }
}

impl BatchTx {
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_curated_ion(&self, id: i64) -> Result<Option<CuratedIon>, DatabaseError> {
        find_curated_ion(self.conn(), id).await
    }

    /// Append a curated ion and return it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the store returns no id, or
    /// `DatabaseError` if the INSERT fails (e.g., unknown result id).
    pub async fn insert_curated_ion(
        &self,
        created_at: DateTime<Utc>,
        author: &str,
        best_metlin_ion: &str,
        note: Option<&str>,
        standard_ion_result_id: i64,
    ) -> Result<CuratedIon, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "INSERT INTO curated_standard_metlin_ions
                     (created_at, author, best_metlin_ion, note, standard_ion_result_id)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id, created_at, author, best_metlin_ion, note, standard_ion_result_id",
                libsql::params![
                    format_datetime(&created_at),
                    author,
                    best_metlin_ion,
                    note,
                    standard_ion_result_id
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_curated_ion(&row)
    }
}
