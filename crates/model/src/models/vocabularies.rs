//! Custom vocabularies.

use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};

use crate::models::common::Tag;
use crate::models::language::LanguageCode;
use crate::operation::operation;
use crate::shape::{shape, string_enum};
use crate::validation::{count_selected, invalid};

string_enum! {
    /// Processing state of a custom vocabulary.
    pub enum VocabularyState {
        Pending => "PENDING",
        Ready => "READY",
        Failed => "FAILED",
    }
}

shape! {
    /// Summary of one custom vocabulary.
    pub struct VocabularyInfo {
        vocabulary_name / with_vocabulary_name: String => "VocabularyName",
        language_code / with_language_code: LanguageCode => "LanguageCode",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        last_modified_time / with_last_modified_time: DateTime<Utc> => "LastModifiedTime",
        vocabulary_state / with_vocabulary_state: VocabularyState => "VocabularyState",
    }
}

/// Terms come either inline or from a file, never both.
fn check_source(phrases: bool, file_uri: bool) -> Result<(), ValidationError> {
    if count_selected(&[phrases, file_uri]) == 1 {
        Ok(())
    } else {
        Err(invalid(
            "vocabulary_source",
            "exactly one of Phrases or VocabularyFileUri is required",
        ))
    }
}

shape! {
    /// Creates a custom vocabulary from inline phrases or a word-list file.
    #[validate(schema(function = "check_create", skip_on_field_errors = false))]
    pub struct CreateVocabularyRequest {
        #[validate(required, length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        vocabulary_name / with_vocabulary_name: String => "VocabularyName",
        #[validate(required, custom(function = "crate::validation::known_value"))]
        language_code / with_language_code: LanguageCode => "LanguageCode",
        phrases / with_phrases: Vec<String> => "Phrases",
        #[validate(length(min = 1, max = 2000), custom(function = "crate::validation::media_uri"))]
        vocabulary_file_uri / with_vocabulary_file_uri: String => "VocabularyFileUri",
        #[validate(length(min = 1, max = 200), nested)]
        tags / with_tags: Vec<Tag> => "Tags",
        #[validate(length(min = 20, max = 2048), custom(function = "crate::validation::role_arn"))]
        data_access_role_arn / with_data_access_role_arn: String => "DataAccessRoleArn",
    }
}

fn check_create(request: &CreateVocabularyRequest) -> Result<(), ValidationError> {
    check_source(
        request.phrases.is_some(),
        request.vocabulary_file_uri.is_some(),
    )
}

shape! {
    /// Vocabulary accepted for processing.
    pub struct CreateVocabularyResponse {
        vocabulary_name / with_vocabulary_name: String => "VocabularyName",
        language_code / with_language_code: LanguageCode => "LanguageCode",
        vocabulary_state / with_vocabulary_state: VocabularyState => "VocabularyState",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        last_modified_time / with_last_modified_time: DateTime<Utc> => "LastModifiedTime",
        failure_reason / with_failure_reason: String => "FailureReason",
    }
}

shape! {
    /// Looks up one custom vocabulary.
    pub struct GetVocabularyRequest {
        #[validate(required, length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        vocabulary_name / with_vocabulary_name: String => "VocabularyName",
    }
}

shape! {
    /// Vocabulary state plus a time-limited download link.
    pub struct GetVocabularyResponse {
        vocabulary_name / with_vocabulary_name: String => "VocabularyName",
        language_code / with_language_code: LanguageCode => "LanguageCode",
        vocabulary_state / with_vocabulary_state: VocabularyState => "VocabularyState",
        failure_reason / with_failure_reason: String => "FailureReason",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        last_modified_time / with_last_modified_time: DateTime<Utc> => "LastModifiedTime",
        download_uri / with_download_uri: String => "DownloadUri",
    }
}

shape! {
    /// Lists custom vocabularies.
    pub struct ListVocabulariesRequest {
        #[validate(length(max = 8192))]
        next_token / with_next_token: String => "NextToken",
        #[validate(range(min = 1, max = 100))]
        max_results / with_max_results: i32 => "MaxResults",
        #[validate(custom(function = "crate::validation::known_value"))]
        state_equals / with_state_equals: VocabularyState => "StateEquals",
        #[validate(length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        name_contains / with_name_contains: String => "NameContains",
    }
}

shape! {
    /// One page of vocabulary summaries.
    pub struct ListVocabulariesResponse {
        status / with_status: VocabularyState => "Status",
        next_token / with_next_token: String => "NextToken",
        vocabularies / with_vocabularies: Vec<VocabularyInfo> => "Vocabularies",
    }
}

shape! {
    /// Replaces the terms of an existing vocabulary.
    #[validate(schema(function = "check_update", skip_on_field_errors = false))]
    pub struct UpdateVocabularyRequest {
        #[validate(required, length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        vocabulary_name / with_vocabulary_name: String => "VocabularyName",
        #[validate(required, custom(function = "crate::validation::known_value"))]
        language_code / with_language_code: LanguageCode => "LanguageCode",
        phrases / with_phrases: Vec<String> => "Phrases",
        #[validate(length(min = 1, max = 2000), custom(function = "crate::validation::media_uri"))]
        vocabulary_file_uri / with_vocabulary_file_uri: String => "VocabularyFileUri",
        #[validate(length(min = 20, max = 2048), custom(function = "crate::validation::role_arn"))]
        data_access_role_arn / with_data_access_role_arn: String => "DataAccessRoleArn",
    }
}

fn check_update(request: &UpdateVocabularyRequest) -> Result<(), ValidationError> {
    check_source(
        request.phrases.is_some(),
        request.vocabulary_file_uri.is_some(),
    )
}

shape! {
    /// Vocabulary queued for reprocessing.
    pub struct UpdateVocabularyResponse {
        vocabulary_name / with_vocabulary_name: String => "VocabularyName",
        language_code / with_language_code: LanguageCode => "LanguageCode",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        last_modified_time / with_last_modified_time: DateTime<Utc> => "LastModifiedTime",
        vocabulary_state / with_vocabulary_state: VocabularyState => "VocabularyState",
    }
}

shape! {
    /// Deletes a custom vocabulary.
    pub struct DeleteVocabularyRequest {
        #[validate(required, length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        vocabulary_name / with_vocabulary_name: String => "VocabularyName",
    }
}

shape! {
    /// Empty acknowledgement of a deletion.
    pub struct DeleteVocabularyResponse {}
}

operation!(CreateVocabularyRequest => CreateVocabularyResponse, "CreateVocabulary");
operation!(GetVocabularyRequest => GetVocabularyResponse, "GetVocabulary");
operation!(ListVocabulariesRequest => ListVocabulariesResponse, "ListVocabularies");
operation!(UpdateVocabularyRequest => UpdateVocabularyResponse, "UpdateVocabulary");
operation!(DeleteVocabularyRequest => DeleteVocabularyResponse, "DeleteVocabulary");
