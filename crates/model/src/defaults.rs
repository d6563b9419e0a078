//! Applying configured job defaults to start requests.
//!
//! Responsibilities:
//! - Fill fields the caller left unset from a loaded [`JobDefaults`].
//!
//! Does NOT handle:
//! - Loading the defaults (see the `transcribe-config` crate).
//! - Validating the result; call `validate()` afterwards.
//!
//! Invariants:
//! - Fields the caller set are never overwritten. Nested settings merge field
//!   by field, so a partly filled `Settings` still receives the defaults for
//!   the fields it leaves unset.
//! - A nested settings record is created only when a default lands in it.
//! - The default role ARN goes into an existing `JobExecutionSettings` only;
//!   a request that did not ask for deferred execution does not get one.
//! - A default language code is applied only when the request makes no
//!   language selection at all.
//! - Enumerated defaults are parsed before anything is written, so a bad
//!   value leaves the request untouched.

use std::str::FromStr;

use tracing::debug;
use transcribe_config::JobDefaults;

use crate::error::{ModelError, Result};
use crate::models::{
    CallAnalyticsJobSettings, LanguageCode, MediaFormat, Settings, StartCallAnalyticsJobRequest,
    StartTranscriptionJobRequest, Tag, VocabularyFilterMethod,
};

/// Write `value` into `slot` only if the caller left it unset.
fn fill<T>(slot: &mut Option<T>, value: Option<T>) {
    if slot.is_none() {
        *slot = value;
    }
}

fn parse_opt<T>(value: Option<&String>) -> Result<Option<T>>
where
    T: FromStr<Err = ModelError>,
{
    value.map(|raw| raw.parse()).transpose()
}

impl StartTranscriptionJobRequest {
    /// Fill unset fields from configured defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownVariant`] if a configured language code,
    /// media format, or filter method is not a known value.
    pub fn apply_defaults(&mut self, defaults: &JobDefaults) -> Result<()> {
        let language_code: Option<LanguageCode> = parse_opt(defaults.language_code.as_ref())?;
        let media_format: Option<MediaFormat> = parse_opt(defaults.media_format.as_ref())?;
        let filter_method: Option<VocabularyFilterMethod> =
            parse_opt(defaults.vocabulary_filter_method.as_ref())?;

        let had_settings = self.settings.is_some();
        let language_selected = self.language_code.is_some()
            || self.identify_language == Some(true)
            || self.identify_multiple_languages == Some(true);
        if !language_selected {
            self.language_code = language_code;
        }
        fill(&mut self.media_format, media_format);
        fill(
            &mut self.media_sample_rate_hertz,
            defaults.media_sample_rate_hertz,
        );
        fill(
            &mut self.output_bucket_name,
            defaults.output_bucket_name.clone(),
        );
        if self.output_bucket_name.is_some() {
            fill(&mut self.output_key, defaults.output_key_prefix.clone());
        }
        fill(
            &mut self.output_encryption_kms_key_id,
            defaults.output_encryption_kms_key_id.clone(),
        );

        let mut settings = self.settings.take().unwrap_or_default();
        fill(&mut settings.vocabulary_name, defaults.vocabulary_name.clone());
        fill(
            &mut settings.vocabulary_filter_name,
            defaults.vocabulary_filter_name.clone(),
        );
        fill(&mut settings.vocabulary_filter_method, filter_method);
        if had_settings || settings != Settings::default() {
            self.settings = Some(settings);
        }

        if let Some(execution) = self.job_execution_settings.as_mut() {
            fill(
                &mut execution.data_access_role_arn,
                defaults.data_access_role_arn.clone(),
            );
        }

        let added = merge_tags(&mut self.tags, defaults);
        debug!(
            operation = "StartTranscriptionJob",
            default_tags = added,
            "Applied job defaults"
        );
        Ok(())
    }
}

impl StartCallAnalyticsJobRequest {
    /// Fill unset fields from configured defaults.
    ///
    /// The output location defaults to `s3://<bucket>/<prefix>` when a bucket
    /// is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownVariant`] if the configured filter method
    /// is not a known value.
    pub fn apply_defaults(&mut self, defaults: &JobDefaults) -> Result<()> {
        let filter_method: Option<VocabularyFilterMethod> =
            parse_opt(defaults.vocabulary_filter_method.as_ref())?;

        if self.output_location.is_none()
            && let Some(bucket) = &defaults.output_bucket_name
        {
            let prefix = defaults.output_key_prefix.as_deref().unwrap_or("");
            self.output_location = Some(format!("s3://{bucket}/{prefix}"));
        }
        fill(
            &mut self.output_encryption_kms_key_id,
            defaults.output_encryption_kms_key_id.clone(),
        );
        fill(
            &mut self.data_access_role_arn,
            defaults.data_access_role_arn.clone(),
        );

        let had_settings = self.settings.is_some();
        let mut settings = self.settings.take().unwrap_or_default();
        fill(&mut settings.vocabulary_name, defaults.vocabulary_name.clone());
        fill(
            &mut settings.vocabulary_filter_name,
            defaults.vocabulary_filter_name.clone(),
        );
        fill(&mut settings.vocabulary_filter_method, filter_method);
        if had_settings || settings != CallAnalyticsJobSettings::default() {
            self.settings = Some(settings);
        }

        debug!(operation = "StartCallAnalyticsJob", "Applied job defaults");
        Ok(())
    }
}

/// Append default tags whose keys the request does not already use.
fn merge_tags(tags: &mut Option<Vec<Tag>>, defaults: &JobDefaults) -> usize {
    let mut added = 0;
    for (key, value) in &defaults.tags {
        let present = tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t.key.as_deref() == Some(key.as_str())));
        if !present {
            tags.get_or_insert_with(Vec::new)
                .push(Tag::pair(key.clone(), value.clone()));
            added += 1;
        }
    }
    added
}
