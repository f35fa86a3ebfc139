//! Error handling types and utilities.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized Result type for docdex operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when reading a document from the content tree fails.
///
/// This is the only fallible boundary of the crate: metadata extraction,
/// scoring, tagging, and index queries are all total over their input domain
/// and degrade to empty values instead of failing.
#[derive(Debug, Error)]
pub enum ReadError {
    /// No document exists at the resolved path.
    #[error("document not found at {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The document exists but could not be read or decoded.
    #[error("failed to read document at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    /// Classify an I/O error for the document at `path`.
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path, source }
        } else {
            Self::Io { path, source }
        }
    }

    /// The path the failed read was attempted against.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path, .. } | Self::Io { path, .. } => path,
        }
    }
}
