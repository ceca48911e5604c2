//! Aggregate statistics over executed matrix rows
//!
//! Consumes the parsed row sequence and produces accuracy ratios, confidence
//! means, and a ranked list of recurring note tokens.

mod aggregate;
mod tokens;
mod types;

// Re-export public types
pub use aggregate::{is_ok, mean, summarize};
pub use tokens::top_note_tokens;
pub use types::Summary;
