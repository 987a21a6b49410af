//! Error types for journal core operations.
//!
//! Write-path failures always escalate because there is no safe
//! default; read-path corruption self-heals through the directory-scan
//! fallback and never reaches this taxonomy. Nothing here is fatal to
//! the process.

use thiserror::Error;

/// Result type alias for journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Core error type for journal operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Filesystem write or create failed; the operation was aborted.
    #[error("Write failure: {0}")]
    WriteFailure(String),

    /// Delete/update target absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Background export failed
    #[error("Export failure: {0}")]
    ExportFailure(String),
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        JournalError::WriteFailure(err.to_string())
    }
}
