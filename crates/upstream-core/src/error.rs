//! Error types for upstream-core

use std::path::PathBuf;

/// Result type for upstream-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in upstream-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Create on a path that already holds a file
    #[error("File already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// Add of a (host, port) pair already present in the block
    #[error("Server {host}:{port} is already configured")]
    DuplicateEntry { host: String, port: String },

    /// Remove of a (host, port) pair not present in the block
    #[error("Server {host}:{port} is not configured")]
    EntryNotFound { host: String, port: String },

    /// Reload command could not be started (binary missing or
    /// insufficient privilege to execute it)
    #[error("Reload command `{program}` could not be started: {source}")]
    ReloadUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Reload command started but exited with non-zero status
    #[error("Reload command `{program}` exited with non-zero status (exit code: {code:?}): {stderr}")]
    ReloadFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Parse/render error from upstream-blocks
    #[error(transparent)]
    Blocks(#[from] upstream_blocks::Error),

    /// Filesystem error from upstream-fs
    #[error(transparent)]
    Fs(#[from] upstream_fs::Error),
}
