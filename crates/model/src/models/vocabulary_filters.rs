//! Vocabulary filters: word lists to mask, remove, or tag in transcripts.

use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};

use crate::models::common::Tag;
use crate::models::language::LanguageCode;
use crate::operation::operation;
use crate::shape::shape;
use crate::validation::{count_selected, invalid};

shape! {
    /// Summary of one vocabulary filter.
    pub struct VocabularyFilterInfo {
        vocabulary_filter_name / with_vocabulary_filter_name: String => "VocabularyFilterName",
        language_code / with_language_code: LanguageCode => "LanguageCode",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        last_modified_time / with_last_modified_time: DateTime<Utc> => "LastModifiedTime",
    }
}

fn check_source(words: bool, file_uri: bool) -> Result<(), ValidationError> {
    if count_selected(&[words, file_uri]) == 1 {
        Ok(())
    } else {
        Err(invalid(
            "vocabulary_filter_source",
            "exactly one of Words or VocabularyFilterFileUri is required",
        ))
    }
}

shape! {
    /// Creates a vocabulary filter from inline words or a word-list file.
    #[validate(schema(function = "check_create", skip_on_field_errors = false))]
    pub struct CreateVocabularyFilterRequest {
        #[validate(required, length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        vocabulary_filter_name / with_vocabulary_filter_name: String => "VocabularyFilterName",
        #[validate(required, custom(function = "crate::validation::known_value"))]
        language_code / with_language_code: LanguageCode => "LanguageCode",
        #[validate(length(min = 1))]
        words / with_words: Vec<String> => "Words",
        #[validate(length(min = 1, max = 2000), custom(function = "crate::validation::media_uri"))]
        vocabulary_filter_file_uri / with_vocabulary_filter_file_uri: String => "VocabularyFilterFileUri",
        #[validate(length(min = 1, max = 200), nested)]
        tags / with_tags: Vec<Tag> => "Tags",
        #[validate(length(min = 20, max = 2048), custom(function = "crate::validation::role_arn"))]
        data_access_role_arn / with_data_access_role_arn: String => "DataAccessRoleArn",
    }
}

fn check_create(request: &CreateVocabularyFilterRequest) -> Result<(), ValidationError> {
    check_source(
        request.words.is_some(),
        request.vocabulary_filter_file_uri.is_some(),
    )
}

shape! {
    /// Filter as created.
    pub struct CreateVocabularyFilterResponse {
        vocabulary_filter_name / with_vocabulary_filter_name: String => "VocabularyFilterName",
        language_code / with_language_code: LanguageCode => "LanguageCode",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        last_modified_time / with_last_modified_time: DateTime<Utc> => "LastModifiedTime",
    }
}

shape! {
    /// Looks up one vocabulary filter.
    pub struct GetVocabularyFilterRequest {
        #[validate(required, length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        vocabulary_filter_name / with_vocabulary_filter_name: String => "VocabularyFilterName",
    }
}

shape! {
    /// Filter details plus a time-limited download link.
    pub struct GetVocabularyFilterResponse {
        vocabulary_filter_name / with_vocabulary_filter_name: String => "VocabularyFilterName",
        language_code / with_language_code: LanguageCode => "LanguageCode",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        last_modified_time / with_last_modified_time: DateTime<Utc> => "LastModifiedTime",
        download_uri / with_download_uri: String => "DownloadUri",
    }
}

shape! {
    /// Lists vocabulary filters.
    pub struct ListVocabularyFiltersRequest {
        #[validate(length(max = 8192))]
        next_token / with_next_token: String => "NextToken",
        #[validate(range(min = 1, max = 100))]
        max_results / with_max_results: i32 => "MaxResults",
        #[validate(length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        name_contains / with_name_contains: String => "NameContains",
    }
}

shape! {
    /// One page of filter summaries.
    pub struct ListVocabularyFiltersResponse {
        next_token / with_next_token: String => "NextToken",
        vocabulary_filters / with_vocabulary_filters: Vec<VocabularyFilterInfo> => "VocabularyFilters",
    }
}

shape! {
    /// Replaces the words of an existing filter.
    #[validate(schema(function = "check_update", skip_on_field_errors = false))]
    pub struct UpdateVocabularyFilterRequest {
        #[validate(required, length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        vocabulary_filter_name / with_vocabulary_filter_name: String => "VocabularyFilterName",
        #[validate(length(min = 1))]
        words / with_words: Vec<String> => "Words",
        #[validate(length(min = 1, max = 2000), custom(function = "crate::validation::media_uri"))]
        vocabulary_filter_file_uri / with_vocabulary_filter_file_uri: String => "VocabularyFilterFileUri",
        #[validate(length(min = 20, max = 2048), custom(function = "crate::validation::role_arn"))]
        data_access_role_arn / with_data_access_role_arn: String => "DataAccessRoleArn",
    }
}

fn check_update(request: &UpdateVocabularyFilterRequest) -> Result<(), ValidationError> {
    check_source(
        request.words.is_some(),
        request.vocabulary_filter_file_uri.is_some(),
    )
}

shape! {
    /// Filter as updated.
    pub struct UpdateVocabularyFilterResponse {
        vocabulary_filter_name / with_vocabulary_filter_name: String => "VocabularyFilterName",
        language_code / with_language_code: LanguageCode => "LanguageCode",
        #[serde(with = "crate::serde_helpers::epoch_seconds")]
        last_modified_time / with_last_modified_time: DateTime<Utc> => "LastModifiedTime",
    }
}

shape! {
    /// Deletes a vocabulary filter.
    pub struct DeleteVocabularyFilterRequest {
        #[validate(required, length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        vocabulary_filter_name / with_vocabulary_filter_name: String => "VocabularyFilterName",
    }
}

shape! {
    /// Empty acknowledgement of a deletion.
    pub struct DeleteVocabularyFilterResponse {}
}

operation!(CreateVocabularyFilterRequest => CreateVocabularyFilterResponse, "CreateVocabularyFilter");
operation!(GetVocabularyFilterRequest => GetVocabularyFilterResponse, "GetVocabularyFilter");
operation!(ListVocabularyFiltersRequest => ListVocabularyFiltersResponse, "ListVocabularyFilters");
operation!(UpdateVocabularyFilterRequest => UpdateVocabularyFilterResponse, "UpdateVocabularyFilter");
operation!(DeleteVocabularyFilterRequest => DeleteVocabularyFilterResponse, "DeleteVocabularyFilter");
