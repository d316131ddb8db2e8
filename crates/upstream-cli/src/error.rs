//! Error types for upstream-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from upstream-core
    #[error(transparent)]
    Core(#[from] upstream_core::Error),

    /// Error from upstream-fs
    #[error(transparent)]
    Fs(#[from] upstream_fs::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    ///
    /// A failed reload propagates the external command's exit status;
    /// everything else exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Core(upstream_core::Error::ReloadFailed { code, .. }) => code.unwrap_or(1),
            _ => 1,
        }
    }
}
