//! Read-side service and entry point for batch transactions.
//!
//! `IonService` owns the `IonDb` handle for a run. Read helpers (lookups,
//! listings, history) are `impl IonService` blocks in the repo modules.
//! Writes made by a curation load go through [`IonService::begin_batch`].

use crate::IonDb;
use crate::batch::BatchTx;
use crate::error::DatabaseError;

pub struct IonService {
    db: IonDb,
}

impl IonService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = IonDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service over a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = IonDb::open_remote(url, auth_token).await?;
        Ok(Self { db })
    }

    /// Create from an existing `IonDb` (for testing).
    #[must_use]
    pub const fn from_db(db: IonDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &IonDb {
        &self.db
    }

    /// Begin the transaction that a whole curation load runs inside.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if `BEGIN` fails.
    pub async fn begin_batch(&self) -> Result<BatchTx, DatabaseError> {
        let tx = self.db.conn().transaction().await?;
        tracing::debug!("batch transaction started");
        Ok(BatchTx::new(tx))
    }
}
