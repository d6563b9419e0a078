//! Call analytics jobs: two-channel call recordings with per-participant
//! transcription and generative summaries.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};

use crate::models::common::{Media, MediaFormat, Transcript};
use crate::models::language::{LanguageCode, LanguageIdSettings, check_language_id_settings};
use crate::models::redaction::ContentRedaction;
use crate::models::settings::VocabularyFilterMethod;
use crate::operation::operation;
use crate::shape::{Score, insert_unique, shape, string_enum};
use crate::validation::invalid;

/// Number of channels a call analytics recording carries.
pub const CALL_CHANNELS: usize = 2;

string_enum! {
    /// Processing state of a call analytics job.
    pub enum CallAnalyticsJobStatus {
        Queued => "QUEUED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        Completed => "COMPLETED",
    }
}

string_enum! {
    /// Who is speaking on a channel.
    pub enum ParticipantRole {
        Agent => "AGENT",
        Customer => "CUSTOMER",
    }
}

string_enum! {
    /// Analytics feature that can be skipped for a job.
    pub enum CallAnalyticsFeature {
        GenerativeSummarization => "GENERATIVE_SUMMARIZATION",
    }
}

string_enum! {
    /// Why an analytics feature was skipped.
    pub enum CallAnalyticsSkippedReasonCode {
        InsufficientConversationContent => "INSUFFICIENT_CONVERSATION_CONTENT",
        FailedSafetyGuidelines => "FAILED_SAFETY_GUIDELINES",
    }
}

shape! {
    /// Generative call summarization.
    pub struct Summarization {
        #[validate(required)]
        generate_abstractive_summary / with_generate_abstractive_summary: bool => "GenerateAbstractiveSummary",
    }
}

shape! {
    /// Assigns a participant role to one audio channel.
    pub struct ChannelDefinition {
        #[validate(range(min = 0, max = 1))]
        channel_id / with_channel_id: i32 => "ChannelId",
        #[validate(custom(function = "crate::validation::known_value"))]
        participant_role / with_participant_role: ParticipantRole => "ParticipantRole",
    }
}

shape! {
    /// An analytics feature the service did not run, and why.
    pub struct CallAnalyticsSkippedFeature {
        feature / with_feature: CallAnalyticsFeature => "Feature",
        reason_code / with_reason_code: CallAnalyticsSkippedReasonCode => "ReasonCode",
        message / with_message: String => "Message",
    }
}

shape! {
    /// Details on partially completed analytics.
    pub struct CallAnalyticsJobDetails {
        skipped / with_skipped: Vec<CallAnalyticsSkippedFeature> => "Skipped",
    }
}

shape! {
    /// Optional settings for a call analytics job.
    #[validate(schema(function = "check_job_settings", skip_on_field_errors = false))]
    pub struct CallAnalyticsJobSettings {
        #[validate(length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        vocabulary_name / with_vocabulary_name: String => "VocabularyName",
        #[validate(length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        vocabulary_filter_name / with_vocabulary_filter_name: String => "VocabularyFilterName",
        #[validate(custom(function = "crate::validation::known_value"))]
        vocabulary_filter_method / with_vocabulary_filter_method: VocabularyFilterMethod => "VocabularyFilterMethod",
        #[validate(length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        language_model_name / with_language_model_name: String => "LanguageModelName",
        #[validate(nested)]
        content_redaction / with_content_redaction: ContentRedaction => "ContentRedaction",
        #[validate(length(min = 1), custom(function = "crate::validation::known_value"))]
        language_options / with_language_options: Vec<LanguageCode> => "LanguageOptions",
        language_id_settings / with_language_id_settings: BTreeMap<LanguageCode, LanguageIdSettings> => "LanguageIdSettings",
        #[validate(nested)]
        summarization / with_summarization: Summarization => "Summarization",
    }
}

impl CallAnalyticsJobSettings {
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
}

fn check_job_settings(settings: &CallAnalyticsJobSettings) -> Result<(), ValidationError> {
    if settings.vocabulary_filter_method.is_some() && settings.vocabulary_filter_name.is_none() {
        return Err(invalid(
            "vocabulary_filter",
            "VocabularyFilterMethod requires VocabularyFilterName",
        ));
    }
    if settings.language_id_settings.is_some() && settings.language_options.is_none() {
        return Err(invalid(
            "language_id_settings",
            "LanguageIdSettings requires LanguageOptions",
        ));
    }
    check_language_id_settings(settings.language_id_settings.as_ref())
}

shape! {
    /// Starts analyzing one call recording.
    #[validate(schema(function = "check_start_request", skip_on_field_errors = false))]
    pub struct StartCallAnalyticsJobRequest {
        #[validate(required, length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        call_analytics_job_name / with_call_analytics_job_name: String => "CallAnalyticsJobName",
        #[validate(required, nested)]
        media / with_media: Media => "Media",
        #[validate(length(min = 1, max = 2000), custom(function = "crate::validation::media_uri"))]
        output_location / with_output_location: String => "OutputLocation",
        #[validate(length(min = 1, max = 2048), custom(function = "crate::validation::kms_key_id"))]
        output_encryption_kms_key_id / with_output_encryption_kms_key_id: String => "OutputEncryptionKMSKeyId",
        #[validate(length(min = 20, max = 2048), custom(function = "crate::validation::role_arn"))]
        data_access_role_arn / with_data_access_role_arn: String => "DataAccessRoleArn",
        #[validate(nested)]
        settings / with_settings: CallAnalyticsJobSettings => "Settings",
        #[validate(length(min = 2, max = 2), nested)]
        channel_definitions / with_channel_definitions: Vec<ChannelDefinition> => "ChannelDefinitions",
    }
}

fn check_start_request(request: &StartCallAnalyticsJobRequest) -> Result<(), ValidationError> {
    check_channel_definitions(request.channel_definitions.as_deref())
}

/// The two channel definitions must name different channels.
fn check_channel_definitions(
    definitions: Option<&[ChannelDefinition]>,
) -> Result<(), ValidationError> {
    let Some(definitions) = definitions else {
        return Ok(());
    };
    if let [first, second] = definitions
        && first.channel_id.is_some()
        && first.channel_id == second.channel_id
    {
        return Err(invalid(
            "channel_definitions",
            "ChannelDefinitions must describe two different channels",
        ));
    }
    Ok(())
}

shape! {
    /// Call analytics job accepted by `StartCallAnalyticsJob`.
    pub struct StartCallAnalyticsJobResponse {
        call_analytics_job / with_call_analytics_job: CallAnalyticsJob => "CallAnalyticsJob",
    }
}

shape! {
    /// Everything known about a call analytics job.
    pub struct CallAnalyticsJob {
        call_analytics_job_name / with_call_analytics_job_name: String => "CallAnalyticsJobName",
        call_analytics_job_status / with_call_analytics_job_status: CallAnalyticsJobStatus => "CallAnalyticsJobStatus",
        call_analytics_job_details / with_call_analytics_job_details: CallAnalyticsJobDetails => "CallAnalyticsJobDetails",
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
        data_access_role_arn / with_data_access_role_arn: String => "DataAccessRoleArn",
        identified_language_score / with_identified_language_score: Score => "IdentifiedLanguageScore",
        settings / with_settings: CallAnalyticsJobSettings => "Settings",
        channel_definitions / with_channel_definitions: Vec<ChannelDefinition> => "ChannelDefinitions",
    }
}

shape! {
    /// Looks up one call analytics job by name.
    pub struct GetCallAnalyticsJobRequest {
        #[validate(required, length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        call_analytics_job_name / with_call_analytics_job_name: String => "CallAnalyticsJobName",
    }
}

shape! {
    /// Current state of the requested call analytics job.
    pub struct GetCallAnalyticsJobResponse {
        call_analytics_job / with_call_analytics_job: CallAnalyticsJob => "CallAnalyticsJob",
    }
}

shape! {
    /// Lists call analytics jobs.
    pub struct ListCallAnalyticsJobsRequest {
        #[validate(custom(function = "crate::validation::known_value"))]
        status / with_status: CallAnalyticsJobStatus => "Status",
        #[validate(length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        job_name_contains / with_job_name_contains: String => "JobNameContains",
        #[validate(length(max = 8192))]
        next_token / with_next_token: String => "NextToken",
        #[validate(range(min = 1, max = 100))]
        max_results / with_max_results: i32 => "MaxResults",
    }
}

shape! {
    /// One page of call analytics job summaries.
    pub struct ListCallAnalyticsJobsResponse {
        status / with_status: CallAnalyticsJobStatus => "Status",
        next_token / with_next_token: String => "NextToken",
        call_analytics_job_summaries / with_call_analytics_job_summaries: Vec<CallAnalyticsJobSummary> => "CallAnalyticsJobSummaries",
    }
}

shape! {
    /// Condensed view of a call analytics job.
    pub struct CallAnalyticsJobSummary {
        call_analytics_job_name / with_call_analytics_job_name: String => "CallAnalyticsJobName",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        creation_time / with_creation_time: DateTime<Utc> => "CreationTime",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        start_time / with_start_time: DateTime<Utc> => "StartTime",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        completion_time / with_completion_time: DateTime<Utc> => "CompletionTime",
        language_code / with_language_code: LanguageCode => "LanguageCode",
        call_analytics_job_status / with_call_analytics_job_status: CallAnalyticsJobStatus => "CallAnalyticsJobStatus",
        call_analytics_job_details / with_call_analytics_job_details: CallAnalyticsJobDetails => "CallAnalyticsJobDetails",
        failure_reason / with_failure_reason: String => "FailureReason",
    }
}

shape! {
    /// Deletes a call analytics job.
    pub struct DeleteCallAnalyticsJobRequest {
        #[validate(required, length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        call_analytics_job_name / with_call_analytics_job_name: String => "CallAnalyticsJobName",
    }
}

shape! {
    /// Empty acknowledgement of a deletion.
    pub struct DeleteCallAnalyticsJobResponse {}
}

operation!(StartCallAnalyticsJobRequest => StartCallAnalyticsJobResponse, "StartCallAnalyticsJob");
operation!(GetCallAnalyticsJobRequest => GetCallAnalyticsJobResponse, "GetCallAnalyticsJob");
operation!(ListCallAnalyticsJobsRequest => ListCallAnalyticsJobsResponse, "ListCallAnalyticsJobs");
operation!(DeleteCallAnalyticsJobRequest => DeleteCallAnalyticsJobResponse, "DeleteCallAnalyticsJob");
