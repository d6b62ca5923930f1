//! Error types for glass card construction and configuration

use thiserror::Error;

/// Main error type for glass card operations
///
/// Unrecognized tier/variant/size values are never reported here; they fall
/// back to defaults inside [`crate::style`].
#[derive(Error, Debug)]
pub enum CardError {
    /// Identity has no usable accessible label
    #[error("Accessible label is required and must not be blank")]
    MissingLabel,

    /// A card was constructed without child content
    #[error("{card} requires child content")]
    MissingContent { card: &'static str },

    /// A required content field was omitted or blank
    #[error("{card} requires a non-empty `{field}`")]
    MissingField {
        card: &'static str,
        field: &'static str,
    },

    /// Configuration document could not be decoded
    #[error("Configuration error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CardError {
    fn from(err: serde_json::Error) -> Self {
        CardError::Config(err.to_string())
    }
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
