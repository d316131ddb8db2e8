//! Error types for upstream-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] upstream_fs::Error),

    #[error("Malformed upstream file: {message}")]
    Malformed { message: String },
}

impl Error {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}
