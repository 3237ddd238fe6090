//! Error types for the store
//!
//! Every variant carries the path it concerns so the binary can abort with
//! a single self-explanatory line.

use std::path::PathBuf;

/// Errors reading or writing annotation files
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Example source file does not exist
    #[error("input not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// Annotation log does not exist
    #[error("annotation log not found: {}", path.display())]
    LogNotFound { path: PathBuf },

    /// IO error on a file
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Undecodable JSON line
    #[error("malformed JSON in {} at line {line}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Progress state file is not a valid progress object
    #[error("malformed progress state in {}: {source}", path.display())]
    Progress {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization failed
    #[error("encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create parse error for a 1-based line of a file
    pub fn parse_error(path: impl Into<PathBuf>, line: usize, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            source,
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
