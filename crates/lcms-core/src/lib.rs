//! # lcms-core
//!
//! Core types shared across the standard ion curation crates:
//! - Entity structs for standard ion results and their curated overrides
//! - The edit row read back from an operator-edited export
//! - The permitted ion vocabulary
//! - Export column names and the unset sentinel
//! - Cross-cutting error types

pub mod columns;
pub mod entities;
pub mod errors;
pub mod vocabulary;
