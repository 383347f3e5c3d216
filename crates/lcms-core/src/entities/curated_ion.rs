use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable, timestamped manual pick of the best ion for one result.
///
/// Rows are append-only. The history of a result is every `CuratedIon`
/// whose `standard_ion_result_id` points at it, ordered by `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CuratedIon {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub best_metlin_ion: String,
    pub note: Option<String>,
    pub standard_ion_result_id: i64,
}
