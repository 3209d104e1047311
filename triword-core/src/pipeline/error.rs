use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Source;

/// Errors that stop one source from being read.
///
/// None of these abort a run; the pipeline records them and moves on.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {origin}: {source}")]
    Read {
        origin: Source,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// Classifies an I/O error raised while opening or reading `origin`.
    pub fn from_io(origin: Source, err: io::Error) -> Self {
        match origin {
            Source::File(path) if err.kind() == io::ErrorKind::NotFound => {
                SourceError::NotFound { path }
            }
            origin => SourceError::Read {
                origin,
                source: err,
            },
        }
    }

    /// Path of the failed file, if the source was a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SourceError::NotFound { path } => Some(path.as_path()),
            SourceError::Read {
                origin: Source::File(path),
                ..
            } => Some(path.as_path()),
            SourceError::Read { .. } => None,
        }
    }

    /// Returns true for a missing file.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound { .. })
    }
}
