//! Error types for card validation and rendering

use thiserror::Error;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Structured failure produced by [`crate::validate::validate`].
///
/// Paths use dotted keys with `[i]` indices, e.g. `items[2].bulletPoints[0]`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A `type` discriminant outside the closed set of known tags
    #[error("Unknown variant '{tag}' at {path}")]
    UnknownVariant { path: String, tag: String },

    /// A field is missing or holds the wrong kind of value
    #[error("Schema violation at {path}: expected {expected}, found {actual}")]
    SchemaViolation {
        path: String,
        expected: String,
        actual: String,
    },

    /// Input text was not JSON at all
    #[error("Malformed JSON: {0}")]
    Malformed(String),
}

impl ValidationError {
    /// Path of the offending field, if the error carries one
    pub fn path(&self) -> Option<&str> {
        match self {
            ValidationError::UnknownVariant { path, .. } => Some(path),
            ValidationError::SchemaViolation { path, .. } => Some(path),
            ValidationError::Malformed(_) => None,
        }
    }
}

/// Errors that can occur while generating, validating or rendering cards
#[derive(Error, Debug)]
pub enum Error {
    /// The card document did not pass validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A carousel index outside the current item bounds
    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// A card type tag that is not one of the eight known tags
    #[error("Unknown card type: {0}")]
    UnknownCardType(String),

    /// A carousel cannot be built over zero items
    #[error("Carousel requires at least one item")]
    EmptyCarousel,

    /// The model answered but the answer was unusable
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Transport-level failure talking to the model endpoint
    #[error("Network error: {0}")]
    Network(String),

    /// The injected key/value store failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// A preview link could not be built or parsed
    #[error("Invalid preview link: {0}")]
    Preview(String),

    /// Failed to serialize a card or view
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Preview(err.to_string())
    }
}
