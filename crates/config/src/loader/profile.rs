//! Profile file loading for configuration.
//!
//! Responsibilities:
//! - Load job defaults from a JSON profile file.
//! - Apply profile settings to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Building the final `JobDefaults` (see builder.rs).
//!
//! Invariants:
//! - Profile settings land in the loader's profile layer, the lowest-precedence one.
//! - A missing profile or profile file is recorded for later error handling in build().
//! - Read and parse errors carry the path only, never file contents.

use std::path::Path;

use tracing::debug;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::{JobDefaults, ProfileFile};

/// Read and parse a profile file.
pub(crate) fn read_profile_file(path: &Path) -> Result<ProfileFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
    })?;
    serde_json::from_str(&content).map_err(|_| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
    })
}

/// Apply profile configuration from a profile file to the loader.
///
/// If the profile (or the file) is not found, this records the missing
/// profile name for later error handling in `build()`.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let Some(profile_name) = loader.profile_name().cloned() else {
        return Ok(());
    };
    let Some(config_path) = loader.config_path().cloned() else {
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    };
    if !config_path.exists() {
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    }

    let file = read_profile_file(&config_path)?;
    let Some(profile) = file.profiles.get(&profile_name) else {
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    };

    debug!(profile = %profile_name, "Applying job defaults from profile");
    apply_profile_defaults(loader, profile);
    Ok(())
}

/// Copy the values a profile sets into the loader's profile layer.
fn apply_profile_defaults(loader: &mut ConfigLoader, profile: &JobDefaults) {
    let defaults = loader.profile_mut();
    macro_rules! take {
        ($($field:ident),* $(,)?) => {
            $(
                if profile.$field.is_some() {
                    defaults.$field = profile.$field.clone();
                }
            )*
        };
    }
    take!(
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
    if !profile.tags.is_empty() {
        defaults.tags = profile.tags.clone();
    }
}
