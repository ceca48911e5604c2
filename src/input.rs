//! Matrix document loading
//!
//! One blocking UTF-8 read of the source document. A missing path is reported
//! before the parser is ever invoked.

use std::fs;
use std::path::Path;

use crate::error::MatrixError;

/// Read the matrix document as UTF-8 text.
///
/// # Arguments
/// * `path` - Path to the markdown matrix file
///
/// # Returns
/// * `Ok(String)` - Full document contents
/// * `Err(MatrixError::NotFound)` - If the path does not exist
/// * `Err(MatrixError::Io)` - If the file cannot be read
pub fn read_matrix(path: &Path) -> Result<String, MatrixError> {
    if !path.exists() {
        return Err(MatrixError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}
