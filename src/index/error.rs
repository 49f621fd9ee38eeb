//! IndexError type.

use crate::domain::ParseNoteError;
use crate::infra::FsError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during index operations.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The note's header lines are malformed.
    #[error("failed to parse note at {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: ParseNoteError,
    },

    /// The note (or the notes directory) could not be read.
    #[error(transparent)]
    Fs(FsError),

    /// Moving the note to its canonical path failed.
    #[error("failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Another file already occupies the canonical path for this name.
    #[error("note name '{name}' conflicts with existing file {path}")]
    NameConflict { name: String, path: PathBuf },
}

impl IndexError {
    /// Returns true if the note content was malformed (as opposed to an
    /// I/O problem).
    pub fn is_format(&self) -> bool {
        matches!(self, IndexError::Format { .. })
    }

    /// Returns the path involved in the error, if there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            IndexError::Format { path, .. } => Some(path),
            IndexError::Rename { from, .. } => Some(from),
            IndexError::NameConflict { path, .. } => Some(path),
            IndexError::Fs(FsError::NotFound { path })
            | IndexError::Fs(FsError::PermissionDenied { path })
            | IndexError::Fs(FsError::Io { path, .. })
            | IndexError::Fs(FsError::Parse { path, .. })
            | IndexError::Fs(FsError::AlreadyExists { path })
            | IndexError::Fs(FsError::NotADirectory { path })
            | IndexError::Fs(FsError::InvalidEncoding { path }) => Some(path),
        }
    }
}

impl From<FsError> for IndexError {
    fn from(error: FsError) -> Self {
        match error {
            FsError::Parse { path, source } => IndexError::Format { path, source },
            other => IndexError::Fs(other),
        }
    }
}

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;
