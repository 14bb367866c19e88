//! Error types

use thiserror::Error;

/// Failure reading or writing persisted data.
///
/// Callers log these and carry on with defaults; nothing here is fatal.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
