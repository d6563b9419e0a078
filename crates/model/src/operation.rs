//! JSON 1.1 wire codec for service operations.
//!
//! Responsibilities:
//! - Bind each request record to its response record and operation name.
//! - Serialize requests and deserialize responses as JSON bytes.
//!
//! Does NOT handle:
//! - HTTP transport, request signing, retries, or pagination. Callers send
//!   the encoded body with `Content-Type: CONTENT_TYPE` and
//!   `X-Amz-Target: Operation::target()` through their own stack.
//! - Error bodies (see [`crate::service_error`]).
//!
//! Invariants:
//! - Encoding never validates implicitly; use [`encode_validated`] for that.
//! - Log events carry the operation name and body size, never body contents.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use crate::error::Result;
use crate::shape::Shape;

/// Service prefix of the `X-Amz-Target` header.
pub const TARGET_PREFIX: &str = "Transcribe";

/// Content type of every request and response body.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Header carrying the operation selector.
pub const TARGET_HEADER: &str = "X-Amz-Target";

/// A request record that names a service operation.
pub trait Operation: Shape + Serialize + Validate {
    /// Operation name as the service spells it, e.g. `StartTranscriptionJob`.
    const NAME: &'static str;

    /// Response record returned on success.
    type Output: Shape + DeserializeOwned + Default;

    /// Value of the `X-Amz-Target` header for this operation.
    fn target() -> String {
        format!("{TARGET_PREFIX}.{}", Self::NAME)
    }
}

/// Implement [`Operation`] for a request/response pair.
///
/// # Usage
/// ```ignore
/// operation!(GetTranscriptionJobRequest => GetTranscriptionJobResponse, "GetTranscriptionJob");
/// ```
macro_rules! operation {
    ($request:ty => $response:ty, $name:literal) => {
        impl $crate::operation::Operation for $request {
            const NAME: &'static str = $name;
            type Output = $response;
        }
    };
}

pub(crate) use operation;

/// Serialize a request body.
pub fn encode_request<O: Operation>(request: &O) -> Result<Vec<u8>> {
    let body = serde_json::to_vec(request)?;
    debug!(operation = O::NAME, bytes = body.len(), "Encoded request");
    Ok(body)
}

/// Validate a request against its declared constraints, then serialize it.
///
/// # Errors
///
/// Returns [`crate::ModelError::Validation`] without encoding anything when a
/// constraint is violated.
pub fn encode_validated<O: Operation>(request: &O) -> Result<Vec<u8>> {
    if let Err(errors) = request.validate() {
        debug!(operation = O::NAME, "Request failed validation");
        return Err(errors.into());
    }
    encode_request(request)
}

/// Deserialize a successful response body.
///
/// Operations whose response carries no fields may return an empty body;
/// that decodes to the default (empty) response.
pub fn decode_response<O: Operation>(body: &[u8]) -> Result<O::Output> {
    if body.iter().all(u8::is_ascii_whitespace) {
        debug!(operation = O::NAME, "Decoded empty response");
        return Ok(O::Output::default());
    }
    let output = serde_json::from_slice(body)?;
    debug!(operation = O::NAME, bytes = body.len(), "Decoded response");
    Ok(output)
}
