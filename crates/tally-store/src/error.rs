//! # Store Error Types
//!
//! Error types for file storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error          CoreError (rules)         │
//! │       │                                           │                     │
//! │       ▼                                           ▼                     │
//! │  StoreError (this module) ← Adds the file path for context             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in server) ← Status code + {code, message} body             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};

use tally_core::CoreError;
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A data file could not be read or written.
    ///
    /// ## When This Occurs
    /// - File missing (inventory or sales)
    /// - Permission denied
    /// - Disk full during the temp-file write
    /// - Rename over the target failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A data file was read but is not valid JSON for its schema.
    #[error("Malformed JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded as JSON.
    #[error("Failed to serialize data: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The task running a ledger write panicked or was aborted.
    #[error("Storage task failed: {0}")]
    Task(#[source] tokio::task::JoinError),

    /// A business rule rejected the operation.
    #[error(transparent)]
    Domain(#[from] CoreError),
}

impl StoreError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        StoreError::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True if the underlying file simply does not exist.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, StoreError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_includes_path() {
        let err = StoreError::io(
            "data/estoque.json",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("data/estoque.json"));
        assert!(err.is_missing_file());
    }

    #[test]
    fn test_domain_error_is_transparent() {
        let err: StoreError = CoreError::ProductNotFound(7).into();
        assert_eq!(err.to_string(), "Product not found: 7");
        assert!(!err.is_missing_file());
    }
}
