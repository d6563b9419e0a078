//! Data contracts for the Amazon Transcribe batch API.
//!
//! This crate provides typed request, response, and settings records that
//! mirror the service's JSON wire protocol field for field. It carries no
//! transport: callers serialize requests with [`operation::encode_request`],
//! send them with their own HTTP stack, and decode responses with
//! [`operation::decode_response`].

mod shape;

pub mod defaults;
pub mod error;
pub mod models;
pub mod operation;
mod serde_helpers;
pub mod service_error;
pub mod validation;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use error::{ModelError, Result};
pub use models::{
    CallAnalyticsJob, CallAnalyticsJobSettings, CallAnalyticsJobStatus, ContentRedaction,
    LanguageCode, LanguageIdSettings, Media, MediaFormat, Settings, StartCallAnalyticsJobRequest,
    StartTranscriptionJobRequest, Tag, Transcript, TranscriptionJob, TranscriptionJobStatus,
};
pub use operation::{Operation, decode_response, encode_request, encode_validated};
pub use service_error::ServiceError;
pub use shape::{Score, Shape, WireEnum};
pub use validator::Validate;
