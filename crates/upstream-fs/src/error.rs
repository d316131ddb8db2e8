//! Error types for upstream-fs

use std::path::PathBuf;

/// Result type for upstream-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in upstream-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Could not determine the user home directory")]
    HomeNotFound,
}

impl Error {
    /// Map an I/O error to the matching variant, keeping the path.
    ///
    /// `NotFound` and `PermissionDenied` kinds get their own variants so
    /// callers can react to them without inspecting `io::ErrorKind`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }
}
