//! Column names of the exported standard ion table.
//!
//! The loader reads the same names back, so the export and the load path
//! must agree on every constant here.

/// Token written for "no value" and recognised on load as "leave unchanged".
pub const NULL_VALUE: &str = "NULL";

pub const STANDARD_ION_RESULT_ID: &str = "STANDARD_ION_RESULT_ID";
pub const CHEMICAL: &str = "CHEMICAL";
pub const BEST_ION_FROM_ALGO: &str = "BEST_ION_FROM_ALGO";
pub const MANUAL_PICK: &str = "MANUAL_PICK";
pub const AUTHOR: &str = "AUTHOR";
pub const NOTE: &str = "NOTE";

/// Export header, in file order.
pub const EXPORT_HEADER: [&str; 6] = [
    STANDARD_ION_RESULT_ID,
    CHEMICAL,
    BEST_ION_FROM_ALGO,
    MANUAL_PICK,
    AUTHOR,
    NOTE,
];
