//! The transaction a curation load runs inside.
//!
//! A `BatchTx` is consumed by exactly one of [`BatchTx::commit`] or
//! [`BatchTx::rollback`]. Write helpers are `impl BatchTx` blocks in the
//! repo modules, so nothing can write outside the transaction.

use crate::error::DatabaseError;

pub struct BatchTx {
    tx: libsql::Transaction,
}

impl BatchTx {
    pub(crate) const fn new(tx: libsql::Transaction) -> Self {
        Self { tx }
    }

    /// The connection scoped to this transaction.
    #[must_use]
    pub fn conn(&self) -> &libsql::Connection {
        &self.tx
    }

    /// Make every write in the batch durable.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if `COMMIT` fails; nothing is applied then.
    pub async fn commit(self) -> Result<(), DatabaseError> {
        self.tx.commit().await?;
        tracing::debug!("batch transaction committed");
        Ok(())
    }

    /// Discard every write in the batch.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if `ROLLBACK` fails.
    pub async fn rollback(self) -> Result<(), DatabaseError> {
        self.tx.rollback().await?;
        tracing::debug!("batch transaction rolled back");
        Ok(())
    }
}
