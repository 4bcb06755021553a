//! Error type shared by the file-level operations.

use std::path::{Path, PathBuf};

/// Failure of a filter, dedupe or pipeline run.
///
/// `NotFound` is always raised before any output file is opened. `Io` can
/// happen mid-stream, in which case the output file may be left truncated.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("input file does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ListError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ListError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            ListError::NotFound { path } | ListError::Io { path, .. } => path,
        }
    }
}
