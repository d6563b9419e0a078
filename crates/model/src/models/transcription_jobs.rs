//! Batch transcription jobs.
//!
//! Responsibilities:
//! - Start, get, list, and delete request/response records.
//! - The `TranscriptionJob` result record and its list summary.
//! - Keyed-mapping helpers for language overrides and the KMS encryption context.
//!
//! Does NOT handle:
//! - Polling for completion or fetching the transcript file.
//!
//! Invariants:
//! - Cross-field rules are checked by `validate()` only, never by builders.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};

use crate::models::common::{Media, MediaFormat, OutputLocationType, Tag, Transcript};
use crate::models::language::{
    LanguageCode, LanguageCodeItem, LanguageIdSettings, check_language_id_settings,
    check_language_selection,
};
use crate::models::redaction::ContentRedaction;
use crate::models::settings::{
    JobExecutionSettings, ModelSettings, Settings, Subtitles, SubtitlesOutput,
    ToxicityDetectionSettings,
};
use crate::operation::operation;
use crate::shape::{Score, insert_unique, shape, string_enum};
use crate::validation::invalid;

/// Largest number of entries in a KMS encryption context.
pub const MAX_ENCRYPTION_CONTEXT_ENTRIES: usize = 10;

/// Longest key or value in a KMS encryption context.
pub const MAX_ENCRYPTION_CONTEXT_LEN: usize = 2000;

string_enum! {
    /// Processing state of a transcription job.
    pub enum TranscriptionJobStatus {
        Queued => "QUEUED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        Completed => "COMPLETED",
    }
}

impl TranscriptionJobStatus {
    /// Check if the job has stopped processing.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed | Self::Completed)
    }
}

shape! {
    /// Starts transcribing one media file.
    #[validate(schema(function = "check_start_request", skip_on_field_errors = false))]
    pub struct StartTranscriptionJobRequest {
        #[validate(required, length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        transcription_job_name / with_transcription_job_name: String => "TranscriptionJobName",
        #[validate(custom(function = "crate::validation::known_value"))]
        language_code / with_language_code: LanguageCode => "LanguageCode",
        #[validate(range(min = 8000, max = 48000))]
        media_sample_rate_hertz / with_media_sample_rate_hertz: i32 => "MediaSampleRateHertz",
        #[validate(custom(function = "crate::validation::known_value"))]
        media_format / with_media_format: MediaFormat => "MediaFormat",
        #[validate(required, nested)]
        media / with_media: Media => "Media",
        #[validate(custom(function = "crate::validation::bucket_name"))]
        output_bucket_name / with_output_bucket_name: String => "OutputBucketName",
        #[validate(length(min = 1, max = 1024), custom(function = "crate::validation::output_key"))]
        output_key / with_output_key: String => "OutputKey",
        #[validate(length(min = 1, max = 2048), custom(function = "crate::validation::kms_key_id"))]
        output_encryption_kms_key_id / with_output_encryption_kms_key_id: String => "OutputEncryptionKMSKeyId",
        kms_encryption_context / with_kms_encryption_context: BTreeMap<String, String> => "KMSEncryptionContext",
        #[validate(nested)]
        settings / with_settings: Settings => "Settings",
        #[validate(nested)]
        model_settings / with_model_settings: ModelSettings => "ModelSettings",
        #[validate(nested)]
        job_execution_settings / with_job_execution_settings: JobExecutionSettings => "JobExecutionSettings",
        #[validate(nested)]
        content_redaction / with_content_redaction: ContentRedaction => "ContentRedaction",
        identify_language / with_identify_language: bool => "IdentifyLanguage",
        identify_multiple_languages / with_identify_multiple_languages: bool => "IdentifyMultipleLanguages",
        #[validate(length(min = 1), custom(function = "crate::validation::known_value"))]
        language_options / with_language_options: Vec<LanguageCode> => "LanguageOptions",
        #[validate(nested)]
        subtitles / with_subtitles: Subtitles => "Subtitles",
        #[validate(length(min = 1, max = 200), nested)]
        tags / with_tags: Vec<Tag> => "Tags",
        language_id_settings / with_language_id_settings: BTreeMap<LanguageCode, LanguageIdSettings> => "LanguageIdSettings",
        #[validate(length(min = 1, max = 1), nested)]
        toxicity_detection / with_toxicity_detection: Vec<ToxicityDetectionSettings> => "ToxicityDetection",
    }
}

impl StartTranscriptionJobRequest {
    /// Add an override for one identified language.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ModelError::DuplicateKey`] if `language` already has one.
    pub fn add_language_id_settings_entry(
        mut self,
        language: LanguageCode,
        settings: LanguageIdSettings,
    ) -> crate::Result<Self> {
        insert_unique(
            &mut self.language_id_settings,
            "LanguageIdSettings",
            language,
            settings,
        )?;
        Ok(self)
    }

    /// Remove every language override.
    pub fn clear_language_id_settings_entries(mut self) -> Self {
        self.language_id_settings = None;
        self
    }

    /// Add one entry to the KMS encryption context.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ModelError::DuplicateKey`] if `key` is already present.
    pub fn add_kms_encryption_context_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> crate::Result<Self> {
        insert_unique(
            &mut self.kms_encryption_context,
            "KMSEncryptionContext",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    /// Remove every KMS encryption context entry.
    pub fn clear_kms_encryption_context_entries(mut self) -> Self {
        self.kms_encryption_context = None;
        self
    }
}

fn check_start_request(request: &StartTranscriptionJobRequest) -> Result<(), ValidationError> {
    let identify = request.identify_language == Some(true);
    let identify_multiple = request.identify_multiple_languages == Some(true);
    check_language_selection(request.language_code.is_some(), identify, identify_multiple)?;

    if !(identify || identify_multiple)
        && (request.language_options.is_some() || request.language_id_settings.is_some())
    {
        return Err(invalid(
            "language_options",
            "LanguageOptions and LanguageIdSettings require language identification",
        ));
    }
    check_language_id_settings(request.language_id_settings.as_ref())?;
    check_encryption_context(request.kms_encryption_context.as_ref())?;

    if request.output_key.is_some() && request.output_bucket_name.is_none() {
        return Err(invalid("output_key", "OutputKey requires OutputBucketName"));
    }
    Ok(())
}

fn check_encryption_context(
    context: Option<&BTreeMap<String, String>>,
) -> Result<(), ValidationError> {
    let Some(context) = context else {
        return Ok(());
    };
    if context.is_empty() || context.len() > MAX_ENCRYPTION_CONTEXT_ENTRIES {
        return Err(invalid(
            "kms_encryption_context",
            "KMSEncryptionContext must hold between 1 and 10 entries",
        ));
    }
    let within = |s: &String| (1..=MAX_ENCRYPTION_CONTEXT_LEN).contains(&s.chars().count());
    if !context.iter().all(|(k, v)| within(k) && within(v)) {
        return Err(invalid(
            "kms_encryption_context",
            "KMSEncryptionContext keys and values must be 1 to 2000 characters",
        ));
    }
    Ok(())
}

shape! {
    /// Job accepted by `StartTranscriptionJob`.
    pub struct StartTranscriptionJobResponse {
        transcription_job / with_transcription_job: TranscriptionJob => "TranscriptionJob",
    }
}

shape! {
    /// Everything known about a transcription job: the submitted request plus
    /// status, timing, and results filled in by the service.
    pub struct TranscriptionJob {
        transcription_job_name / with_transcription_job_name: String => "TranscriptionJobName",
        transcription_job_status / with_transcription_job_status: TranscriptionJobStatus => "TranscriptionJobStatus",
        language_code / with_language_code: LanguageCode => "LanguageCode",
        media_sample_rate_hertz / with_media_sample_rate_hertz: i32 => "MediaSampleRateHertz",
        media_format / with_media_format: MediaFormat => "MediaFormat",
        media / with_media: Media => "Media",
        transcript / with_transcript: Transcript => "Transcript",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        start_time / with_start_time: DateTime<Utc> => "StartTime",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        creation_time / with_creation_time: DateTime<Utc> => "CreationTime",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        completion_time / with_completion_time: DateTime<Utc> => "CompletionTime",
        failure_reason / with_failure_reason: String => "FailureReason",
        settings / with_settings: Settings => "Settings",
        model_settings / with_model_settings: ModelSettings => "ModelSettings",
        job_execution_settings / with_job_execution_settings: JobExecutionSettings => "JobExecutionSettings",
        content_redaction / with_content_redaction: ContentRedaction => "ContentRedaction",
        identify_language / with_identify_language: bool => "IdentifyLanguage",
        identify_multiple_languages / with_identify_multiple_languages: bool => "IdentifyMultipleLanguages",
        language_options / with_language_options: Vec<LanguageCode> => "LanguageOptions",
        identified_language_score / with_identified_language_score: Score => "IdentifiedLanguageScore",
        language_codes / with_language_codes: Vec<LanguageCodeItem> => "LanguageCodes",
        tags / with_tags: Vec<Tag> => "Tags",
        subtitles / with_subtitles: SubtitlesOutput => "Subtitles",
        language_id_settings / with_language_id_settings: BTreeMap<LanguageCode, LanguageIdSettings> => "LanguageIdSettings",
        toxicity_detection / with_toxicity_detection: Vec<ToxicityDetectionSettings> => "ToxicityDetection",
    }
}

impl TranscriptionJob {
    /// Add an override for one identified language.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ModelError::DuplicateKey`] if `language` already has one.
    pub fn add_language_id_settings_entry(
        mut self,
        language: LanguageCode,
        settings: LanguageIdSettings,
    ) -> crate::Result<Self> {
        insert_unique(
            &mut self.language_id_settings,
            "LanguageIdSettings",
            language,
            settings,
        )?;
        Ok(self)
    }

    /// Remove every language override.
    pub fn clear_language_id_settings_entries(mut self) -> Self {
        self.language_id_settings = None;
        self
    }

    /// Check if the job has stopped processing.
    pub fn is_finished(&self) -> bool {
        self.transcription_job_status
            .as_ref()
            .is_some_and(TranscriptionJobStatus::is_terminal)
    }
}

shape! {
    /// Looks up one transcription job by name.
    pub struct GetTranscriptionJobRequest {
        #[validate(required, length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        transcription_job_name / with_transcription_job_name: String => "TranscriptionJobName",
    }
}

shape! {
    /// Current state of the requested job.
    pub struct GetTranscriptionJobResponse {
        transcription_job / with_transcription_job: TranscriptionJob => "TranscriptionJob",
    }
}

shape! {
    /// Lists transcription jobs, optionally filtered by status and name.
    pub struct ListTranscriptionJobsRequest {
        #[validate(custom(function = "crate::validation::known_value"))]
        status / with_status: TranscriptionJobStatus => "Status",
        #[validate(length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        job_name_contains / with_job_name_contains: String => "JobNameContains",
        #[validate(length(max = 8192))]
        next_token / with_next_token: String => "NextToken",
        #[validate(range(min = 1, max = 100))]
        max_results / with_max_results: i32 => "MaxResults",
    }
}

shape! {
    /// One page of job summaries.
    pub struct ListTranscriptionJobsResponse {
        status / with_status: TranscriptionJobStatus => "Status",
        next_token / with_next_token: String => "NextToken",
        transcription_job_summaries / with_transcription_job_summaries: Vec<TranscriptionJobSummary> => "TranscriptionJobSummaries",
    }
}

shape! {
    /// Condensed view of a transcription job as returned by listings.
    pub struct TranscriptionJobSummary {
        transcription_job_name / with_transcription_job_name: String => "TranscriptionJobName",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        creation_time / with_creation_time: DateTime<Utc> => "CreationTime",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        start_time / with_start_time: DateTime<Utc> => "StartTime",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        completion_time / with_completion_time: DateTime<Utc> => "CompletionTime",
        language_code / with_language_code: LanguageCode => "LanguageCode",
        transcription_job_status / with_transcription_job_status: TranscriptionJobStatus => "TranscriptionJobStatus",
        failure_reason / with_failure_reason: String => "FailureReason",
        output_location_type / with_output_location_type: OutputLocationType => "OutputLocationType",
        content_redaction / with_content_redaction: ContentRedaction => "ContentRedaction",
        model_settings / with_model_settings: ModelSettings => "ModelSettings",
        identify_language / with_identify_language: bool => "IdentifyLanguage",
        identify_multiple_languages / with_identify_multiple_languages: bool => "IdentifyMultipleLanguages",
        identified_language_score / with_identified_language_score: Score => "IdentifiedLanguageScore",
        language_codes / with_language_codes: Vec<LanguageCodeItem> => "LanguageCodes",
        toxicity_detection / with_toxicity_detection: Vec<ToxicityDetectionSettings> => "ToxicityDetection",
    }
}

shape! {
    /// Deletes a transcription job and its stored transcript.
    pub struct DeleteTranscriptionJobRequest {
        #[validate(required, length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        transcription_job_name / with_transcription_job_name: String => "TranscriptionJobName",
    }
}

shape! {
    /// Empty acknowledgement of a deletion.
    pub struct DeleteTranscriptionJobResponse {}
}

operation!(StartTranscriptionJobRequest => StartTranscriptionJobResponse, "StartTranscriptionJob");
operation!(GetTranscriptionJobRequest => GetTranscriptionJobResponse, "GetTranscriptionJob");
operation!(ListTranscriptionJobsRequest => ListTranscriptionJobsResponse, "ListTranscriptionJobs");
operation!(DeleteTranscriptionJobRequest => DeleteTranscriptionJobResponse, "DeleteTranscriptionJob");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ModelError, Validate};

    fn minimal_request() -> StartTranscriptionJobRequest {
        StartTranscriptionJobRequest::new()
            .with_transcription_job_name("meeting-2024-01-01")
            .with_language_code(LanguageCode::EnUs)
            .with_media(Media::new().with_media_file_uri("s3://bucket/meeting.wav"))
    }

    #[test]
    fn test_minimal_request_is_valid() {
        assert!(minimal_request().validate().is_ok());
    }

    #[test]
    fn test_request_requires_name_and_media() {
        let request = StartTranscriptionJobRequest::new().with_language_code(LanguageCode::EnUs);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_language_selection_is_exclusive() {
        let request = minimal_request().with_identify_language(true);
        assert!(request.validate().is_err());

        let mut request = minimal_request().with_identify_language(true);
        request.language_code = None;
        assert!(request.validate().is_ok());

        let request = request.with_identify_multiple_languages(true);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_language_selection_false_flag_does_not_count() {
        let request = minimal_request().with_identify_multiple_languages(false);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_language_options_need_identification() {
        let request = minimal_request().with_language_options(vec![LanguageCode::EnUs]);
        assert!(request.validate().is_err());

        let mut request = request.with_identify_language(true);
        request.language_code = None;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_sample_rate_bounds() {
        assert!(minimal_request().with_media_sample_rate_hertz(8000).validate().is_ok());
        assert!(minimal_request().with_media_sample_rate_hertz(48000).validate().is_ok());
        assert!(minimal_request().with_media_sample_rate_hertz(7999).validate().is_err());
        assert!(minimal_request().with_media_sample_rate_hertz(96000).validate().is_err());
    }

    #[test]
    fn test_output_location_constraints() {
        let request = minimal_request()
            .with_output_bucket_name("transcripts-bucket")
            .with_output_key("meetings/2024/");
        assert!(request.validate().is_ok());

        assert!(minimal_request().with_output_bucket_name("Bad_Bucket").validate().is_err());
        assert!(minimal_request().with_output_key("orphan.json").validate().is_err());
    }

    #[test]
    fn test_kms_encryption_context_duplicate_key() {
        let request = minimal_request()
            .add_kms_encryption_context_entry("department", "legal")
            .unwrap();
        let err = request
            .clone()
            .add_kms_encryption_context_entry("department", "sales")
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::DuplicateKey {
                field: "KMSEncryptionContext",
                ..
            }
        ));
        assert!(err.is_invalid_argument());
        assert_eq!(
            request
                .kms_encryption_context
                .as_ref()
                .and_then(|m| m.get("department")),
            Some(&"legal".to_string())
        );
    }

    #[test]
    fn test_kms_encryption_context_limits() {
        let mut request = minimal_request();
        for i in 0..=MAX_ENCRYPTION_CONTEXT_ENTRIES {
            request = request
                .add_kms_encryption_context_entry(format!("k{i}"), "v")
                .unwrap();
        }
        assert!(request.validate().is_err());

        let request = minimal_request()
            .add_kms_encryption_context_entry("k", "")
            .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_clear_kms_encryption_context_entries() {
        let request = minimal_request()
            .add_kms_encryption_context_entry("a", "b")
            .unwrap()
            .clear_kms_encryption_context_entries();
        assert!(request.kms_encryption_context.is_none());
        assert_eq!(request, minimal_request());
    }

    #[test]
    fn test_language_id_settings_duplicate_key() {
        let request = minimal_request()
            .add_language_id_settings_entry(
                LanguageCode::EnUs,
                LanguageIdSettings::new().with_vocabulary_name("en-terms"),
            )
            .unwrap();
        let err = request
            .add_language_id_settings_entry(LanguageCode::EnUs, LanguageIdSettings::new())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Duplicated key (en-US) provided for LanguageIdSettings"
        );
    }

    #[test]
    fn test_language_id_settings_serialize_as_object() {
        let request = StartTranscriptionJobRequest::new()
            .add_language_id_settings_entry(
                LanguageCode::FrFr,
                LanguageIdSettings::new().with_vocabulary_name("fr-terms"),
            )
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "LanguageIdSettings": {"fr-FR": {"VocabularyName": "fr-terms"}}
            })
        );
    }

    #[test]
    fn test_tags_nested_validation() {
        let request = minimal_request().with_tags(vec![Tag::pair("team", "speech")]);
        assert!(request.validate().is_ok());
        let request = minimal_request().with_tags(vec![Tag::new().with_value("orphan")]);
        assert!(request.validate().is_err());
        let request = minimal_request().with_tags(Vec::new());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_nested_settings_errors_surface() {
        let request = minimal_request().with_settings(Settings::new().with_show_alternatives(true));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_render_omits_unset_fields() {
        let rendered = minimal_request().to_string();
        assert_eq!(
            rendered,
            "{TranscriptionJobName: meeting-2024-01-01,LanguageCode: en-US,Media: {MediaFileUri: s3://bucket/meeting.wav}}"
        );
        assert!(!rendered.contains("OutputBucketName"));
    }

    #[test]
    fn test_job_status_terminal() {
        assert!(TranscriptionJobStatus::Completed.is_terminal());
        assert!(TranscriptionJobStatus::Failed.is_terminal());
        assert!(!TranscriptionJobStatus::Queued.is_terminal());
        assert!(!TranscriptionJobStatus::Unknown("ARCHIVED".to_string()).is_terminal());

        let job = TranscriptionJob::new().with_transcription_job_status(TranscriptionJobStatus::InProgress);
        assert!(!job.is_finished());
        assert!(!TranscriptionJob::new().is_finished());
    }

    #[test]
    fn test_job_timestamps_render_rfc3339() {
        let job: TranscriptionJob = serde_json::from_str(
            r#"{"TranscriptionJobName":"j","CreationTime":1700000000.123}"#,
        )
        .unwrap();
        assert_eq!(
            job.to_string(),
            "{TranscriptionJobName: j,CreationTime: 2023-11-14T22:13:20.123Z}"
        );
    }
}
