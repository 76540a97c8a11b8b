//! Error handling for todoey-store
//!
//! Maps driver and I/O failures onto the core taxonomy

use thiserror::Error;
use todoey_core::errors::TodoeyError;

/// Result type alias using TodoeyError
pub type Result<T> = std::result::Result<T, TodoeyError>;

/// Failure while bootstrapping the embedded schema
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Migration {migration_id} failed: {reason}")]
    Failed {
        migration_id: String,
        reason: String,
    },

    #[error("Checksum mismatch for migration {migration_id}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        migration_id: String,
        expected: String,
        actual: String,
    },

    #[error("Schema bookkeeping failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// The store at `path` cannot be opened or bootstrapped
pub fn storage_unavailable(path: &str, cause: impl ToString) -> TodoeyError {
    TodoeyError::StorageUnavailable {
        path: path.to_string(),
        cause: cause.to_string(),
    }
}

/// A read failed; callers get no partial result
pub fn from_rusqlite_read(op: &str, err: rusqlite::Error) -> TodoeyError {
    TodoeyError::QueryFailed {
        op: op.to_string(),
        cause: err.to_string(),
    }
}

/// A write or commit failed; the transaction is rolled back
pub fn from_rusqlite_write(op: &str, err: rusqlite::Error) -> TodoeyError {
    TodoeyError::WriteFailed {
        op: op.to_string(),
        cause: err.to_string(),
    }
}

/// A file write failed
pub fn io_write_error(op: &str, err: std::io::Error) -> TodoeyError {
    TodoeyError::WriteFailed {
        op: op.to_string(),
        cause: err.to_string(),
    }
}
