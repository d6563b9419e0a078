//! Error types for the Transcribe data contracts.

use thiserror::Error;

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while building, validating, or (de)serializing records.
///
/// Remote failures reported by the service are modeled separately by
/// [`crate::ServiceError`].
#[derive(Error, Debug)]
pub enum ModelError {
    /// A keyed mapping already holds the given key.
    #[error("Duplicated key ({key}) provided for {field}")]
    DuplicateKey { field: &'static str, key: String },

    /// A string does not name any value of a closed enumeration.
    #[error("Unknown {type_name} value: {value}")]
    UnknownVariant {
        type_name: &'static str,
        value: String,
    },

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A record violates its declared constraints.
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl ModelError {
    /// Check if this error was caused by a caller-supplied argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::DuplicateKey { .. } | Self::UnknownVariant { .. } | Self::Validation(_)
        )
    }
}
