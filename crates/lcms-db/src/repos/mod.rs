//! Repository modules for the two curation tables.
//!
//! Each module holds connection-level query functions plus `impl IonService`
//! (read side) and `impl BatchTx` (inside a load) blocks that call them.

pub mod curated_ion;
pub mod standard_ion_result;
