//! Request, response, and settings records for the Transcribe API.
//!
//! Responsibilities:
//! - Mirror the service's JSON shapes field for field, with wire names.
//! - Declare field constraints for on-demand checking with `validate()`.
//! - Provide keyed-mapping helpers that reject duplicate keys.
//!
//! Does NOT handle:
//! - Encoding or transport (see [`crate::operation`]).
//!
//! Invariants:
//! - No constraint is enforced at construction time.

pub mod call_analytics;
pub mod common;
pub mod language;
pub mod redaction;
pub mod settings;
pub mod tags;
pub mod transcription_jobs;
pub mod vocabularies;
pub mod vocabulary_filters;

pub use call_analytics::{
    CallAnalyticsFeature, CallAnalyticsJob, CallAnalyticsJobDetails, CallAnalyticsJobSettings,
    CallAnalyticsJobStatus, CallAnalyticsJobSummary, CallAnalyticsSkippedFeature,
    CallAnalyticsSkippedReasonCode, ChannelDefinition, DeleteCallAnalyticsJobRequest,
    DeleteCallAnalyticsJobResponse, GetCallAnalyticsJobRequest, GetCallAnalyticsJobResponse,
    ListCallAnalyticsJobsRequest, ListCallAnalyticsJobsResponse, ParticipantRole,
    StartCallAnalyticsJobRequest, StartCallAnalyticsJobResponse, Summarization,
};
pub use common::{Media, MediaFormat, OutputLocationType, Tag, Transcript};
pub use language::{LanguageCode, LanguageCodeItem, LanguageIdSettings};
pub use redaction::{ContentRedaction, PiiEntityType, RedactionOutput, RedactionType};
pub use settings::{
    JobExecutionSettings, ModelSettings, Settings, SubtitleFormat, Subtitles, SubtitlesOutput,
    ToxicityCategory, ToxicityDetectionSettings, VocabularyFilterMethod,
};
pub use tags::{
    ListTagsForResourceRequest, ListTagsForResourceResponse, TagResourceRequest,
    TagResourceResponse, UntagResourceRequest, UntagResourceResponse,
};
pub use transcription_jobs::{
    DeleteTranscriptionJobRequest, DeleteTranscriptionJobResponse, GetTranscriptionJobRequest,
    GetTranscriptionJobResponse, ListTranscriptionJobsRequest, ListTranscriptionJobsResponse,
    StartTranscriptionJobRequest, StartTranscriptionJobResponse, TranscriptionJob,
    TranscriptionJobStatus, TranscriptionJobSummary,
};
pub use vocabularies::{
    CreateVocabularyRequest, CreateVocabularyResponse, DeleteVocabularyRequest,
    DeleteVocabularyResponse, GetVocabularyRequest, GetVocabularyResponse, ListVocabulariesRequest,
    ListVocabulariesResponse, UpdateVocabularyRequest, UpdateVocabularyResponse, VocabularyInfo,
    VocabularyState,
};
pub use vocabulary_filters::{
    CreateVocabularyFilterRequest, CreateVocabularyFilterResponse, DeleteVocabularyFilterRequest,
    DeleteVocabularyFilterResponse, GetVocabularyFilterRequest, GetVocabularyFilterResponse,
    ListVocabularyFiltersRequest, ListVocabularyFiltersResponse, UpdateVocabularyFilterRequest,
    UpdateVocabularyFilterResponse, VocabularyFilterInfo,
};
