//! matrix-summary library - smoke-test matrix report tool
//!
//! This library exposes the core functionality of matrix-summary for testing purposes.

pub mod error;
pub mod input;
pub mod matrix;
pub mod report;
pub mod summary;

// Re-export commonly used types for convenience
pub use error::MatrixError;
pub use matrix::{Row, parse_table_rows};
pub use summary::{Summary, summarize};
