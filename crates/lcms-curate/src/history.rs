//! Override history of a single result.

use lcms_core::entities::{CuratedIon, StandardIonResult};
use lcms_db::error::DatabaseError;
use lcms_db::service::IonService;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub ion: CuratedIon,
    /// Whether the result currently references this curated ion.
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultHistory {
    pub result: StandardIonResult,
    /// Oldest first.
    pub entries: Vec<HistoryEntry>,
}

impl ResultHistory {
    /// The curated ion the result references, if any.
    #[must_use]
    pub fn current(&self) -> Option<&CuratedIon> {
        self.entries.iter().find(|e| e.current).map(|e| &e.ion)
    }
}

/// Load a result together with every curated ion recorded for it.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` if the result does not exist, or
/// `DatabaseError` if a query fails.
pub async fn load_history(
    service: &IonService,
    result_id: i64,
) -> Result<ResultHistory, DatabaseError> {
    let result = service.get_result(result_id).await?;
    let entries = service
        .list_curated_ions_for_result(result_id)
        .await?
        .into_iter()
        .map(|ion| HistoryEntry {
            current: result.manual_override_id == Some(ion.id),
            ion,
        })
        .collect();
    Ok(ResultHistory { result, entries })
}
