//! Matrix table parsing
//!
//! This module turns the hand-maintained markdown matrix into typed row
//! records. Parsing is permissive: malformed or in-progress rows are excluded,
//! never reported as errors.

mod parser;
mod types;

// Re-export public types
pub use parser::{parse_int, parse_table_rows};
pub use types::Row;
