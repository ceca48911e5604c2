use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("Matrix not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
