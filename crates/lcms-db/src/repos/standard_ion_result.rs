//! Standard ion result repository.
//!
//! Results are created upstream; curation only ever repoints
//! `manual_override_id`.

use lcms_core::entities::StandardIonResult;

use crate::batch::BatchTx;
use crate::error::DatabaseError;
use crate::helpers::get_opt_string;
use crate::service::IonService;

const TABLE: &str = "standard_ion_results";

fn row_to_result(row: &libsql::Row) -> Result<StandardIonResult, DatabaseError> {
    Ok(StandardIonResult {
        id: row.get::<i64>(0)?,
        chemical: row.get::<String>(1)?,
        best_metlin_ion: get_opt_string(row, 2)?,
        manual_override_id: row.get::<Option<i64>>(3)?,
    })
}

async fn find_result(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Option<StandardIonResult>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id, chemical, best_metlin_ion, manual_override_id
             FROM standard_ion_results WHERE id = ?1",
            libsql::params![id],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_result(&row)?)),
        None => Ok(None),
    }
}

async fn update_result(
    conn: &libsql::Connection,
    result: &StandardIonResult,
) -> Result<(), DatabaseError> {
    let changed = conn
        .execute(
            "UPDATE standard_ion_results
             SET chemical = ?2, best_metlin_ion = ?3, manual_override_id = ?4
             WHERE id = ?1",
            libsql::params![
                result.id,
                result.chemical.as_str(),
                result.best_metlin_ion.as_deref(),
                result.manual_override_id
            ],
        )
        .await?;
    if changed == 0 {
        return Err(DatabaseError::NoRowsAffected {
            table: TABLE,
            id: result.id,
        });
    }
    Ok(())
}

impl IonService {
    /// Insert a result row as the upstream analysis would.
    ///
    /// `id` is assigned by the store when `None`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn insert_result(
        &self,
        id: Option<i64>,
        chemical: &str,
        best_metlin_ion: Option<&str>,
    ) -> Result<StandardIonResult, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "INSERT INTO standard_ion_results (id, chemical, best_metlin_ion)
                 VALUES (?1, ?2, ?3) RETURNING id",
                libsql::params![id, chemical, best_metlin_ion],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(StandardIonResult {
            id: row.get::<i64>(0)?,
            chemical: chemical.to_string(),
            best_metlin_ion: best_metlin_ion.map(String::from),
            manual_override_id: None,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no result has this id.
    pub async fn get_result(&self, id: i64) -> Result<StandardIonResult, DatabaseError> {
        find_result(self.db().conn(), id)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_result(&self, id: i64) -> Result<Option<StandardIonResult>, DatabaseError> {
        find_result(self.db().conn(), id).await
    }

    /// All results ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_results(&self) -> Result<Vec<StandardIonResult>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, chemical, best_metlin_ion, manual_override_id
                 FROM standard_ion_results ORDER BY id",
                (),
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_result(&row)?);
        }
        Ok(results)
    }
}

impl BatchTx {
    /// Look up a result inside the batch. `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_result(&self, id: i64) -> Result<Option<StandardIonResult>, DatabaseError> {
        find_result(self.conn(), id).await
    }

    /// Write a result back, including its override reference.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoRowsAffected` if the row is gone, or
    /// `DatabaseError` if the UPDATE fails.
    pub async fn update_result(&self, result: &StandardIonResult) -> Result<(), DatabaseError> {
        update_result(self.conn(), result).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{seed_result, test_service};

    use super::*;

    #[tokio::test]
    async fn insert_and_get_result() {
        let svc = test_service().await;

        let inserted = svc
            .insert_result(Some(42), "caffeine", Some("M+H"))
            .await
            .unwrap();
        assert_eq!(inserted.id, 42);

        let fetched = svc.get_result(42).await.unwrap();
        assert_eq!(fetched, inserted);
        assert!(fetched.manual_override_id.is_none());
    }

    #[tokio::test]
    async fn insert_result_assigns_id() {
        let svc = test_service().await;
        let a = svc.insert_result(None, "caffeine", None).await.unwrap();
        let b = svc.insert_result(None, "theobromine", None).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(svc.get_result(b.id).await.unwrap().best_metlin_ion.is_none());
    }

    #[tokio::test]
    async fn get_missing_result_is_no_result() {
        let svc = test_service().await;
        assert!(matches!(
            svc.get_result(7).await,
            Err(DatabaseError::NoResult)
        ));
        assert!(svc.find_result(7).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_results_orders_by_id() {
        let svc = test_service().await;
        seed_result(&svc, 3, "c").await;
        seed_result(&svc, 1, "a").await;
        seed_result(&svc, 2, "b").await;

        let ids: Vec<i64> = svc
            .list_results()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn update_missing_result_reports_no_rows() {
        let svc = test_service().await;
        let tx = svc.begin_batch().await.unwrap();

        let ghost = StandardIonResult {
            id: 404,
            chemical: "ghost".into(),
            best_metlin_ion: None,
            manual_override_id: None,
        };
        let result = tx.update_result(&ghost).await;
        assert!(matches!(
            result,
            Err(DatabaseError::NoRowsAffected { id: 404, .. })
        ));
        tx.rollback().await.unwrap();
    }
}
