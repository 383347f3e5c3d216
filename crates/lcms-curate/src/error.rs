//! Error types for loading and exporting curation edits.

use lcms_db::error::DatabaseError;
use thiserror::Error;

/// Why a load was aborted. Any of these rolls back the whole batch.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The input could not be read at all.
    #[error("cannot read {path}: {reason}")]
    Unreadable { path: String, reason: String },

    /// A row (or the header) does not have the required shape.
    #[error("line {line}: malformed input: {reason}")]
    MalformedInput { line: u64, reason: String },

    /// The row names a standard ion result the store does not have.
    #[error("line {line}: standard ion result {result_id} does not exist")]
    NotFound { line: u64, result_id: i64 },

    /// The proposed manual pick is not a recognised chemical ion name.
    #[error("line {line}: found invalid chemical ion name: {value}")]
    InvalidValue { line: u64, value: String },

    /// The store rejected a read or a write.
    #[error("{context}: {source}")]
    Persistence {
        context: String,
        #[source]
        source: DatabaseError,
    },
}

impl ReconcileError {
    /// Wrap a store error with what was being attempted.
    pub fn persistence(context: impl Into<String>) -> impl FnOnce(DatabaseError) -> Self {
        let context = context.into();
        move |source| Self::Persistence { context, source }
    }

    /// Short machine-friendly name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unreadable { .. } => "unreadable",
            Self::MalformedInput { .. } => "malformed_input",
            Self::NotFound { .. } => "not_found",
            Self::InvalidValue { .. } => "invalid_value",
            Self::Persistence { .. } => "persistence",
        }
    }
}

/// Errors while writing the current state out as an editable table.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("failed to write export: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    /// A result points at a curated ion that is not in the store.
    #[error("standard ion result {result_id} references missing curated ion {curated_ion_id}")]
    DanglingOverride { result_id: i64, curated_ion_id: i64 },

    /// A field holds a tab or line break and cannot be written unquoted.
    #[error("standard ion result {result_id}: {column} contains a tab or line break")]
    UnexportableField {
        result_id: i64,
        column: &'static str,
    },
}
