//! Centralized constants for the transcription workspace.
//!
//! Environment variable names and value bounds used by the loader, kept in
//! one place so the model crate and tests agree on them.

// =============================================================================
// Environment Variables
// =============================================================================

/// Path to the JSON profile file.
pub const ENV_CONFIG_PATH: &str = "TRANSCRIBE_CONFIG_PATH";

/// Profile to read from the profile file.
pub const ENV_PROFILE: &str = "TRANSCRIBE_PROFILE";

/// Default language code, e.g. `en-US`.
pub const ENV_LANGUAGE_CODE: &str = "TRANSCRIBE_LANGUAGE_CODE";

/// Default media format, e.g. `wav`.
pub const ENV_MEDIA_FORMAT: &str = "TRANSCRIBE_MEDIA_FORMAT";

/// Default media sample rate in hertz.
pub const ENV_SAMPLE_RATE: &str = "TRANSCRIBE_SAMPLE_RATE";

/// Default output bucket.
pub const ENV_OUTPUT_BUCKET: &str = "TRANSCRIBE_OUTPUT_BUCKET";

/// Default output key prefix (requires an output bucket).
pub const ENV_OUTPUT_KEY_PREFIX: &str = "TRANSCRIBE_OUTPUT_KEY_PREFIX";

/// Default KMS key for output encryption.
pub const ENV_OUTPUT_KMS_KEY_ID: &str = "TRANSCRIBE_OUTPUT_KMS_KEY_ID";

/// Default custom vocabulary.
pub const ENV_VOCABULARY_NAME: &str = "TRANSCRIBE_VOCABULARY_NAME";

/// Default vocabulary filter.
pub const ENV_VOCABULARY_FILTER_NAME: &str = "TRANSCRIBE_VOCABULARY_FILTER_NAME";

/// Default vocabulary filter method (`remove`, `mask`, or `tag`).
pub const ENV_VOCABULARY_FILTER_METHOD: &str = "TRANSCRIBE_VOCABULARY_FILTER_METHOD";

/// Default IAM role for data access.
pub const ENV_DATA_ACCESS_ROLE_ARN: &str = "TRANSCRIBE_DATA_ACCESS_ROLE_ARN";

/// Default tags as `key=value` pairs separated by commas.
pub const ENV_TAGS: &str = "TRANSCRIBE_TAGS";

// =============================================================================
// Value Bounds
// =============================================================================

/// Lowest accepted media sample rate in hertz.
pub const MIN_SAMPLE_RATE_HERTZ: i32 = 8_000;

/// Highest accepted media sample rate in hertz.
pub const MAX_SAMPLE_RATE_HERTZ: i32 = 48_000;

/// Largest number of tags on one resource.
pub const MAX_TAGS: usize = 200;
