//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables, profile files, and direct builder methods.
//! - Build and check the final `JobDefaults`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Profile file loading logic (delegated to profile.rs).
//!
//! Invariants / Assumptions:
//! - Profile, environment, and builder values live in separate layers, merged
//!   only in `build()`, so `from_env()` and `from_profile()` may run in either order.
//! - Environment variables take precedence over profile file values.
//! - Builder methods take precedence over environment variables, regardless of call order.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::debug;

use super::env::apply_env;
use super::error::ConfigError;
use super::profile::apply_profile;
use crate::constants::{ENV_TAGS, MAX_SAMPLE_RATE_HERTZ, MAX_TAGS, MIN_SAMPLE_RATE_HERTZ};
use crate::types::JobDefaults;

/// Configuration loader that builds job defaults from environment variables and profiles.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    profile: JobDefaults,
    env: JobDefaults,
    overrides: JobDefaults,
    profile_name: Option<String>,
    profile_missing: Option<String>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the active profile name to load from the config file.
    pub fn with_profile_name(mut self, name: String) -> Self {
        self.profile_name = Some(name);
        self
    }

    /// Set the profile file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from a profile in the config file.
    ///
    /// If the profile is not found, this records the missing profile name
    /// for later error handling in `build()`.
    pub fn from_profile(mut self) -> Result<Self, ConfigError> {
        apply_profile(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over profile settings.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the default language code.
    pub fn with_language_code(mut self, code: String) -> Self {
        self.overrides.language_code = Some(code);
        self
    }

    /// Set the default media format.
    pub fn with_media_format(mut self, format: String) -> Self {
        self.overrides.media_format = Some(format);
        self
    }

    /// Set the default media sample rate.
    pub fn with_media_sample_rate_hertz(mut self, hertz: i32) -> Self {
        self.overrides.media_sample_rate_hertz = Some(hertz);
        self
    }

    /// Set the default output bucket.
    pub fn with_output_bucket_name(mut self, bucket: String) -> Self {
        self.overrides.output_bucket_name = Some(bucket);
        self
    }

    /// Set the default output key prefix.
    pub fn with_output_key_prefix(mut self, prefix: String) -> Self {
        self.overrides.output_key_prefix = Some(prefix);
        self
    }

    /// Set the default KMS key for output encryption.
    pub fn with_output_encryption_kms_key_id(mut self, key_id: String) -> Self {
        self.overrides.output_encryption_kms_key_id = Some(key_id);
        self
    }

    /// Set the default custom vocabulary.
    pub fn with_vocabulary_name(mut self, name: String) -> Self {
        self.overrides.vocabulary_name = Some(name);
        self
    }

    /// Set the default vocabulary filter and how it is applied.
    pub fn with_vocabulary_filter(mut self, name: String, method: String) -> Self {
        self.overrides.vocabulary_filter_name = Some(name);
        self.overrides.vocabulary_filter_method = Some(method);
        self
    }

    /// Set the default data access role.
    pub fn with_data_access_role_arn(mut self, arn: String) -> Self {
        self.overrides.data_access_role_arn = Some(arn);
        self
    }

    /// Add a default tag.
    pub fn with_tag(mut self, key: String, value: String) -> Self {
        self.overrides.tags.insert(key, value);
        self
    }

    pub(crate) fn profile_mut(&mut self) -> &mut JobDefaults {
        &mut self.profile
    }

    pub(crate) fn env_mut(&mut self) -> &mut JobDefaults {
        &mut self.env
    }

    pub(crate) fn profile_name(&self) -> Option<&String> {
        self.profile_name.as_ref()
    }

    pub(crate) fn set_profile_name(&mut self, name: Option<String>) {
        self.profile_name = name;
    }

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_profile_missing(&mut self, name: Option<String>) {
        self.profile_missing = name;
    }

    /// Build the final job defaults.
    ///
    /// # Errors
    ///
    /// - `ProfileNotFound` if a requested profile was missing.
    /// - `InvalidSampleRate` if the sample rate is outside 8000..=48000.
    /// - `KeyPrefixWithoutBucket` if a key prefix is set without a bucket.
    /// - `InvalidValue` if more tags are configured than a resource accepts.
    pub fn build(self) -> Result<JobDefaults, ConfigError> {
        if let Some(profile_name) = self.profile_missing {
            return Err(ConfigError::ProfileNotFound(profile_name));
        }

        let mut defaults = self.profile;
        let env_tags = overlay(&mut defaults, self.env);
        if !env_tags.is_empty() {
            defaults.tags = env_tags;
        }
        let override_tags = overlay(&mut defaults, self.overrides);
        defaults.tags.extend(override_tags);

        if let Some(hertz) = defaults.media_sample_rate_hertz
            && !(MIN_SAMPLE_RATE_HERTZ..=MAX_SAMPLE_RATE_HERTZ).contains(&hertz)
        {
            return Err(ConfigError::InvalidSampleRate { value: hertz });
        }
        if defaults.output_key_prefix.is_some() && defaults.output_bucket_name.is_none() {
            return Err(ConfigError::KeyPrefixWithoutBucket);
        }
        if defaults.tags.len() > MAX_TAGS {
            return Err(ConfigError::InvalidValue {
                var: ENV_TAGS.to_string(),
                message: format!("at most {MAX_TAGS} tags are allowed"),
            });
        }

        debug!(
            language_code = ?defaults.language_code,
            media_format = ?defaults.media_format,
            tags = defaults.tags.len(),
            "Loaded job defaults"
        );
        Ok(defaults)
    }
}

/// Move every value `layer` sets onto `base` and hand back the layer's tags,
/// whose merge rule differs per layer.
fn overlay(base: &mut JobDefaults, layer: JobDefaults) -> BTreeMap<String, String> {
    macro_rules! overlay {
        ($($field:ident),* $(,)?) => {
            $(
                if layer.$field.is_some() {
                    base.$field = layer.$field;
                }
            )*
        };
    }
    overlay!(
        language_code,
        media_format,
        media_sample_rate_hertz,
        output_bucket_name,
        output_key_prefix,
        output_encryption_kms_key_id,
        vocabulary_name,
        vocabulary_filter_name,
        vocabulary_filter_method,
        data_access_role_arn,
    );
    layer.tags
}
