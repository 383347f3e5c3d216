//! Reading edited exports.
//!
//! The file is tab-delimited with a header row. Columns are looked up by
//! name, so their order does not matter and extra columns are ignored.
//! Quote characters have no special meaning.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use lcms_core::columns::{MANUAL_PICK, NOTE, STANDARD_ION_RESULT_ID};
use lcms_core::entities::EditRow;

use crate::error::ReconcileError;

/// Read every data row of the edited export at `path`.
///
/// # Errors
///
/// Returns `Unreadable` if the file cannot be opened or read, and
/// `MalformedInput` if the header or a row has the wrong shape.
pub fn read_edit_rows(path: &Path) -> Result<Vec<EditRow>, ReconcileError> {
    let file = File::open(path).map_err(|e| ReconcileError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let rows = parse_edit_rows(file).map_err(|e| match e {
        ReconcileError::Unreadable { reason, .. } => ReconcileError::Unreadable {
            path: path.display().to_string(),
            reason,
        },
        other => other,
    })?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "read edit rows");
    Ok(rows)
}

/// Parse edit rows from any reader.
///
/// # Errors
///
/// See [`read_edit_rows`]. `Unreadable` errors carry `<input>` as the path.
pub fn parse_edit_rows<R: Read>(reader: R) -> Result<Vec<EditRow>, ReconcileError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(&e, 1))?
        .iter()
        .map(ToString::to_string)
        .collect();

    let idx = |name: &str| headers.iter().position(|h| h == name);
    let required = |name: &str| {
        idx(name).ok_or_else(|| ReconcileError::MalformedInput {
            line: 1,
            reason: format!("missing required column {name}"),
        })
    };
    let id_idx = required(STANDARD_ION_RESULT_ID)?;
    let pick_idx = required(MANUAL_PICK)?;
    let note_idx = idx(NOTE);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            let line = e.position().map_or(0, csv::Position::line);
            csv_error(&e, line)
        })?;
        let line = record.position().map_or(0, csv::Position::line);
        let field = |i: usize| record.get(i).unwrap_or_default().to_string();

        rows.push(EditRow {
            line,
            result_id: field(id_idx),
            manual_pick: field(pick_idx),
            note: note_idx.map(field).filter(|note| !note.is_empty()),
        });
    }
    Ok(rows)
}

fn csv_error(error: &csv::Error, line: u64) -> ReconcileError {
    match error.kind() {
        csv::ErrorKind::Io(io) => ReconcileError::Unreadable {
            path: "<input>".to_string(),
            reason: io.to_string(),
        },
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => ReconcileError::MalformedInput {
            line,
            reason: format!("expected {expected_len} fields, found {len}"),
        },
        _ => ReconcileError::MalformedInput {
            line,
            reason: error.to_string(),
        },
    }
}
