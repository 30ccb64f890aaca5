//! Error types for the hush crate.

use thiserror::Error;

/// Errors produced while building lexicons or validating configuration.
///
/// Matching itself is infallible: degenerate inputs (empty words, empty
/// lexicons) resolve to "not foul" instead of erroring.
#[derive(Debug, Error)]
pub enum HushError {
    /// I/O failure while consuming a word-list reader.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An argument outside the accepted domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration value that cannot be honored.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl HushError {
    /// Create an invalid argument error.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        HushError::InvalidArgument(message.into())
    }

    /// Create an invalid configuration error.
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        HushError::InvalidConfig(message.into())
    }
}

/// Result type alias for hush operations.
pub type Result<T> = std::result::Result<T, HushError>;
