use serde::{Deserialize, Serialize};

/// One data line of an edited export, as read from disk.
///
/// The result id stays raw text so that a bad id is reported by the
/// reconciler against its line instead of failing the whole read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditRow {
    /// 1-based line number in the source file (header is line 1).
    pub line: u64,
    pub result_id: String,
    pub manual_pick: String,
    pub note: Option<String>,
}

impl EditRow {
    /// Parse the target result id.
    ///
    /// Returns `None` when the field is empty or not an integer.
    #[must_use]
    pub fn parsed_result_id(&self) -> Option<i64> {
        self.result_id.trim().parse().ok()
    }
}
