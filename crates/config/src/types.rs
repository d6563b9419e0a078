//! Configuration types.
//!
//! Responsibilities:
//! - Define `JobDefaults`, the values applied to job requests the caller left unset.
//! - Define the on-disk profile file layout.
//!
//! Does NOT handle:
//! - Parsing enumerated values (language codes, formats); those stay strings
//!   here and are checked by the model crate when applied.
//!
//! Invariants:
//! - Every field is optional; an empty `JobDefaults` changes nothing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Defaults for new transcription and call analytics jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDefaults {
    /// Language code such as `en-US`.
    pub language_code: Option<String>,
    /// Media format such as `wav`.
    pub media_format: Option<String>,
    /// Media sample rate in hertz.
    pub media_sample_rate_hertz: Option<i32>,
    pub output_bucket_name: Option<String>,
    /// Prefix for output object keys. Requires `output_bucket_name`.
    pub output_key_prefix: Option<String>,
    pub output_encryption_kms_key_id: Option<String>,
    pub vocabulary_name: Option<String>,
    pub vocabulary_filter_name: Option<String>,
    /// `remove`, `mask`, or `tag`.
    pub vocabulary_filter_method: Option<String>,
    pub data_access_role_arn: Option<String>,
    /// Tags added to every job, keyed by tag key.
    pub tags: BTreeMap<String, String>,
}

impl JobDefaults {
    /// Returns true when no default is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Layout of the JSON profile file.
///
/// ```json
/// { "profiles": { "dev": { "language_code": "en-US", "output_bucket_name": "transcripts" } } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileFile {
    pub profiles: BTreeMap<String, JobDefaults>,
}
