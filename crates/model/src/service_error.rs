//! Error responses reported by the service.
//!
//! Responsibilities:
//! - Classify JSON 1.1 error bodies into typed variants.
//! - Tell a transport which failures are worth retrying.
//!
//! Does NOT handle:
//! - HTTP status handling or retry scheduling (owned by the transport).
//!
//! Invariants:
//! - Parsing never fails: unreadable bodies become [`ServiceError::Unknown`].
//! - Messages are carried as the server sent them; they are never logged here.

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// A failure reported by the service in an error response body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Request parameters were invalid or the resource is in a conflicting state.
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// A resource with the same name already exists.
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// The named resource does not exist.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Too many requests or too many resources.
    #[error("Limit exceeded: {message}")]
    LimitExceeded { message: String },

    /// The service hit an internal error.
    #[error("Internal failure: {message}")]
    InternalFailure { message: String },

    /// An error code this client does not recognize.
    #[error("Service error ({code}): {message}")]
    Unknown { code: String, message: String },
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type", default)]
    error_type: Option<String>,
    #[serde(alias = "Message", default)]
    message: Option<String>,
}

/// Strip a `namespace#` prefix and a `:url` suffix from an error type.
fn error_code(raw: &str) -> &str {
    let code = raw.rsplit_once('#').map_or(raw, |(_, code)| code);
    code.split_once(':').map_or(code, |(code, _)| code)
}

impl ServiceError {
    /// Parse an error response body.
    ///
    /// Accepts `__type` values such as `BadRequestException`,
    /// `com.amazonaws.transcribe#NotFoundException`, or codes with a trailing
    /// `:http://...` qualifier.
    pub fn from_body(body: &[u8]) -> Self {
        let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
        let message = parsed.message.unwrap_or_default();
        let code = parsed.error_type.as_deref().map(error_code).unwrap_or("");
        Self::from_code(code, message)
    }

    /// Build an error from a bare code, as found in an `x-amzn-errortype` header.
    pub fn from_code(code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match error_code(code) {
            "BadRequestException" => Self::BadRequest { message },
            "ConflictException" => Self::Conflict { message },
            "NotFoundException" => Self::NotFound { message },
            "LimitExceededException" => Self::LimitExceeded { message },
            "InternalFailureException" => Self::InternalFailure { message },
            other => {
                warn!(code = other, "Unrecognized service error code");
                Self::Unknown {
                    code: other.to_string(),
                    message,
                }
            }
        }
    }

    /// Wire code of this error.
    pub fn code(&self) -> &str {
        match self {
            Self::BadRequest { .. } => "BadRequestException",
            Self::Conflict { .. } => "ConflictException",
            Self::NotFound { .. } => "NotFoundException",
            Self::LimitExceeded { .. } => "LimitExceededException",
            Self::InternalFailure { .. } => "InternalFailureException",
            Self::Unknown { code, .. } => code,
        }
    }

    /// Server-supplied message.
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message }
            | Self::Conflict { message }
            | Self::NotFound { message }
            | Self::LimitExceeded { message }
            | Self::InternalFailure { message }
            | Self::Unknown { message, .. } => message,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LimitExceeded { .. } | Self::InternalFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_plain_code() {
        let err = ServiceError::from_body(
            br#"{"__type":"NotFoundException","message":"The requested job couldn't be found."}"#,
        );
        assert_eq!(
            err,
            ServiceError::NotFound {
                message: "The requested job couldn't be found.".to_string()
            }
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_from_body_namespaced_code_and_capitalized_message() {
        let err = ServiceError::from_body(
            br#"{"__type":"com.amazonaws.transcribe#LimitExceededException","Message":"slow down"}"#,
        );
        assert_eq!(err.code(), "LimitExceededException");
        assert_eq!(err.message(), "slow down");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_from_body_code_with_suffix() {
        let err = ServiceError::from_body(
            br#"{"__type":"ConflictException:http://internal.amazon.com/coral/","message":"exists"}"#,
        );
        assert!(matches!(err, ServiceError::Conflict { .. }));
    }

    #[test]
    fn test_from_body_unknown_code() {
        let err = ServiceError::from_body(br#"{"__type":"ThrottlingException","message":"x"}"#);
        assert_eq!(
            err,
            ServiceError::Unknown {
                code: "ThrottlingException".to_string(),
                message: "x".to_string()
            }
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_from_body_unreadable() {
        let err = ServiceError::from_body(b"<html>gateway error</html>");
        assert!(matches!(err, ServiceError::Unknown { ref code, .. } if code.is_empty()));
    }

    #[test]
    fn test_internal_failure_display() {
        let err = ServiceError::from_code("InternalFailureException", "boom");
        assert_eq!(err.to_string(), "Internal failure: boom");
        assert!(err.is_retryable());
    }
}
