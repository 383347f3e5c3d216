//! Entity structs for the curation domain.
//!
//! `StandardIonResult` and `CuratedIon` map to tables in the libSQL store.
//! `EditRow` is ephemeral and only lives for the duration of a load.

mod curated_ion;
mod edit_row;
mod standard_ion_result;

pub use curated_ion::CuratedIon;
pub use edit_row::EditRow;
pub use standard_ion_result::StandardIonResult;
