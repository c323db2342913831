//! Error types for listing, writing and the end-to-end operation.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A directory along the walk could not be listed.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("{}: No such file or directory", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: Not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("{}: Permission denied", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("failed to read dir '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListingError {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => ListingError::NotFound { path },
            io::ErrorKind::PermissionDenied => ListingError::PermissionDenied { path },
            _ => ListingError::Io { path, source: err },
        }
    }

    /// Path of the directory that failed to list.
    pub fn path(&self) -> &Path {
        match self {
            ListingError::NotFound { path }
            | ListingError::NotADirectory { path }
            | ListingError::PermissionDenied { path }
            | ListingError::Io { path, .. } => path,
        }
    }
}

/// The output sink refused the rendered tree.
#[derive(Debug, Error)]
#[error("failed to write tree to the output: {source}")]
pub struct WriteError {
    #[from]
    source: io::Error,
}

/// Any failure of [`crate::dir_tree`].
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error(transparent)]
    Write(#[from] WriteError),
}
