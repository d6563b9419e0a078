//! Optional job settings: speaker and channel handling, vocabularies,
//! custom models, deferred execution, subtitles, and toxicity detection.

use validator::ValidationError;

use crate::shape::{shape, string_enum};
use crate::validation::invalid;

string_enum! {
    /// How words matched by a vocabulary filter are shown in the transcript.
    pub enum VocabularyFilterMethod {
        Remove => "remove",
        Mask => "mask",
        Tag => "tag",
    }
}

string_enum! {
    /// Subtitle file format.
    pub enum SubtitleFormat {
        Vtt => "vtt",
        Srt => "srt",
    }
}

string_enum! {
    /// Toxicity category to flag. Only `ALL` is defined.
    pub enum ToxicityCategory {
        All => "ALL",
    }
}

shape! {
    /// Speaker partitioning, channel identification, alternatives, and
    /// vocabulary options for a transcription job.
    #[validate(schema(function = "check_settings", skip_on_field_errors = false))]
    pub struct Settings {
        #[validate(length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        vocabulary_name / with_vocabulary_name: String => "VocabularyName",
        show_speaker_labels / with_show_speaker_labels: bool => "ShowSpeakerLabels",
        #[validate(range(min = 2, max = 30))]
        max_speaker_labels / with_max_speaker_labels: i32 => "MaxSpeakerLabels",
        channel_identification / with_channel_identification: bool => "ChannelIdentification",
        show_alternatives / with_show_alternatives: bool => "ShowAlternatives",
        #[validate(range(min = 2, max = 10))]
        max_alternatives / with_max_alternatives: i32 => "MaxAlternatives",
        #[validate(length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        vocabulary_filter_name / with_vocabulary_filter_name: String => "VocabularyFilterName",
        #[validate(custom(function = "crate::validation::known_value"))]
        vocabulary_filter_method / with_vocabulary_filter_method: VocabularyFilterMethod => "VocabularyFilterMethod",
    }
}

fn check_settings(settings: &Settings) -> Result<(), ValidationError> {
    let speaker_labels = settings.show_speaker_labels == Some(true);
    if speaker_labels && settings.max_speaker_labels.is_none() {
        return Err(invalid(
            "speaker_labels",
            "ShowSpeakerLabels requires MaxSpeakerLabels",
        ));
    }
    if speaker_labels && settings.channel_identification == Some(true) {
        return Err(invalid(
            "speaker_labels",
            "ShowSpeakerLabels and ChannelIdentification cannot both be enabled",
        ));
    }
    if settings.show_alternatives == Some(true) && settings.max_alternatives.is_none() {
        return Err(invalid(
            "alternatives",
            "ShowAlternatives requires MaxAlternatives",
        ));
    }
    if settings.vocabulary_filter_method.is_some() && settings.vocabulary_filter_name.is_none() {
        return Err(invalid(
            "vocabulary_filter",
            "VocabularyFilterMethod requires VocabularyFilterName",
        ));
    }
    Ok(())
}

shape! {
    /// Custom language model to transcribe with.
    pub struct ModelSettings {
        #[validate(length(min = 1, max = 200), custom(function = "crate::validation::resource_name"))]
        language_model_name / with_language_model_name: String => "LanguageModelName",
    }
}

shape! {
    /// Queueing behavior when the concurrent job limit is reached.
    #[validate(schema(function = "check_execution", skip_on_field_errors = false))]
    pub struct JobExecutionSettings {
        allow_deferred_execution / with_allow_deferred_execution: bool => "AllowDeferredExecution",
        #[validate(length(min = 20, max = 2048), custom(function = "crate::validation::role_arn"))]
        data_access_role_arn / with_data_access_role_arn: String => "DataAccessRoleArn",
    }
}

fn check_execution(settings: &JobExecutionSettings) -> Result<(), ValidationError> {
    if settings.allow_deferred_execution == Some(true) && settings.data_access_role_arn.is_none() {
        return Err(invalid(
            "deferred_execution",
            "AllowDeferredExecution requires DataAccessRoleArn",
        ));
    }
    Ok(())
}

shape! {
    /// Subtitle files to generate alongside the transcript.
    pub struct Subtitles {
        #[validate(custom(function = "crate::validation::known_value"))]
        formats / with_formats: Vec<SubtitleFormat> => "Formats",
        #[validate(range(min = 0, max = 1))]
        output_start_index / with_output_start_index: i32 => "OutputStartIndex",
    }
}

shape! {
    /// Subtitle files produced by a job.
    pub struct SubtitlesOutput {
        formats / with_formats: Vec<SubtitleFormat> => "Formats",
        subtitle_file_uris / with_subtitle_file_uris: Vec<String> => "SubtitleFileUris",
        output_start_index / with_output_start_index: i32 => "OutputStartIndex",
    }
}

shape! {
    /// Toxic speech detection for a job.
    pub struct ToxicityDetectionSettings {
        #[validate(required, length(min = 1, max = 1), custom(function = "crate::validation::known_value"))]
        toxicity_categories / with_toxicity_categories: Vec<ToxicityCategory> => "ToxicityCategories",
    }
}
