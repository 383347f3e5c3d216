//! # lcms-curate
//!
//! Applies operator edits of an exported standard ion table back to the
//! store.
//!
//! For every edited row the [`reconcile::Reconciler`] decides whether the
//! manual pick is a real change, checks it against the permitted
//! vocabulary, appends a curated ion and repoints the result at it.
//! [`batch::run_batch`] runs every row inside one transaction and commits
//! only if all of them succeed.
//!
//! [`export`] writes the table that operators edit, and [`history`] reads
//! back the full override history of one result.

pub mod batch;
pub mod error;
pub mod export;
pub mod history;
pub mod reconcile;
pub mod source;
pub mod store;

pub use batch::{AppliedOverride, BatchMode, BatchReport, apply_in_batch, run_batch};
pub use error::{ExportError, ReconcileError};
pub use reconcile::{Reconciler, RowOutcome};
