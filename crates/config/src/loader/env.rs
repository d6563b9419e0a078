//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `TRANSCRIBE_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading from profile files (see profile.rs).
//! - Building the final `JobDefaults` (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Values land in the loader's environment layer, which outranks the profile
//!   layer whichever of `from_env()` and `from_profile()` runs last.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or tag values return ConfigError::InvalidValue.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_CONFIG_PATH, ENV_DATA_ACCESS_ROLE_ARN, ENV_LANGUAGE_CODE, ENV_MEDIA_FORMAT,
    ENV_OUTPUT_BUCKET, ENV_OUTPUT_KEY_PREFIX, ENV_OUTPUT_KMS_KEY_ID, ENV_PROFILE, ENV_SAMPLE_RATE,
    ENV_TAGS, ENV_VOCABULARY_FILTER_METHOD, ENV_VOCABULARY_FILTER_NAME, ENV_VOCABULARY_NAME,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse `key=value,key2=value2` into a tag map.
pub(crate) fn parse_tags(var: &str, raw: &str) -> Result<BTreeMap<String, String>, ConfigError> {
    let mut tags = BTreeMap::new();
    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').ok_or_else(|| ConfigError::InvalidValue {
            var: var.to_string(),
            message: "expected key=value pairs separated by commas".to_string(),
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var.to_string(),
                message: "tag keys must not be empty".to_string(),
            });
        }
        if tags.insert(key.to_string(), value.trim().to_string()).is_some() {
            return Err(ConfigError::InvalidValue {
                var: var.to_string(),
                message: format!("duplicate tag key '{key}'"),
            });
        }
    }
    Ok(tags)
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over profile settings.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(code) = env_var_or_none(ENV_LANGUAGE_CODE) {
        loader.env_mut().language_code = Some(code);
    }
    if let Some(format) = env_var_or_none(ENV_MEDIA_FORMAT) {
        loader.env_mut().media_format = Some(format);
    }
    if let Some(rate) = env_var_or_none(ENV_SAMPLE_RATE) {
        let hertz: i32 = rate.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_SAMPLE_RATE.to_string(),
            message: "must be a whole number of hertz".to_string(),
        })?;
        loader.env_mut().media_sample_rate_hertz = Some(hertz);
    }
    if let Some(bucket) = env_var_or_none(ENV_OUTPUT_BUCKET) {
        loader.env_mut().output_bucket_name = Some(bucket);
    }
    if let Some(prefix) = env_var_or_none(ENV_OUTPUT_KEY_PREFIX) {
        loader.env_mut().output_key_prefix = Some(prefix);
    }
    if let Some(key_id) = env_var_or_none(ENV_OUTPUT_KMS_KEY_ID) {
        loader.env_mut().output_encryption_kms_key_id = Some(key_id);
    }
    if let Some(name) = env_var_or_none(ENV_VOCABULARY_NAME) {
        loader.env_mut().vocabulary_name = Some(name);
    }
    if let Some(name) = env_var_or_none(ENV_VOCABULARY_FILTER_NAME) {
        loader.env_mut().vocabulary_filter_name = Some(name);
    }
    if let Some(method) = env_var_or_none(ENV_VOCABULARY_FILTER_METHOD) {
        loader.env_mut().vocabulary_filter_method = Some(method);
    }
    if let Some(arn) = env_var_or_none(ENV_DATA_ACCESS_ROLE_ARN) {
        loader.env_mut().data_access_role_arn = Some(arn);
    }
    if let Some(raw) = env_var_or_none(ENV_TAGS) {
        loader.env_mut().tags = parse_tags(ENV_TAGS, &raw)?;
    }

    // Config path and profile name from environment (only if not already set via builder)
    if loader.config_path().is_none()
        && let Some(config_path) = env_var_or_none(ENV_CONFIG_PATH)
    {
        loader.set_config_path(Some(PathBuf::from(config_path)));
    }
    if loader.profile_name().is_none()
        && let Some(profile) = env_var_or_none(ENV_PROFILE)
    {
        loader.set_profile_name(Some(profile));
    }

    Ok(())
}
