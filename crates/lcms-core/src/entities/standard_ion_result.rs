use serde::{Deserialize, Serialize};

/// One analytical measurement whose best ion may carry a manual override.
///
/// `manual_override_id` is the only thing that decides which `CuratedIon`
/// is current. `None` means no manual override has been made yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandardIonResult {
    pub id: i64,
    pub chemical: String,
    pub best_metlin_ion: Option<String>,
    pub manual_override_id: Option<i64>,
}
