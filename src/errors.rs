//! Error types for tpepmap operations

use thiserror::Error;

/// Main error type for tpepmap operations
#[derive(Debug, Error)]
pub enum TpepError {
    /// The analyzed integer is outside the domain of the analysis (n < 1)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A ratio whose denominator is zero
    #[error("Division undefined: {0}")]
    DivisionUndefined(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TpepError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a division undefined error
    pub fn division_undefined(message: impl Into<String>) -> Self {
        Self::DivisionUndefined(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, TpepError>;
