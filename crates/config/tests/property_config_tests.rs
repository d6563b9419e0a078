//! Property-based tests for job defaults serialization and loading.
//!
//! Test coverage:
//! - JobDefaults: serialization keeps every field
//! - Profile files: whatever a profile holds is what the loader builds
//! - Sample rates: the build accepts exactly the supported range

use std::collections::BTreeMap;
use std::io::Write;

use proptest::prelude::*;
use tempfile::NamedTempFile;

use transcribe_config::constants::{MAX_SAMPLE_RATE_HERTZ, MIN_SAMPLE_RATE_HERTZ};
use transcribe_config::{ConfigError, ConfigLoader, JobDefaults, ProfileFile};

/// Strategy for generating S3 bucket names.
fn bucket_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9-]{1,30}[a-z0-9]"
}

/// Strategy for generating tag maps.
fn tags_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-z]{1,12}", "[a-zA-Z0-9 ]{0,20}", 0..5)
}

/// Strategy for generating job defaults within the loader's accepted range.
fn job_defaults_strategy() -> impl Strategy<Value = JobDefaults> {
    (
        proptest::option::of(prop_oneof![Just("en-US"), Just("en-GB"), Just("de-DE")]),
        proptest::option::of(prop_oneof![Just("wav"), Just("mp3"), Just("flac")]),
        proptest::option::of(MIN_SAMPLE_RATE_HERTZ..=MAX_SAMPLE_RATE_HERTZ),
        bucket_strategy(),
        proptest::option::of("[a-z]{1,10}/"),
        proptest::option::of(prop_oneof![Just("remove"), Just("mask"), Just("tag")]),
        tags_strategy(),
    )
        .prop_map(|(language, format, rate, bucket, prefix, method, tags)| JobDefaults {
            language_code: language.map(String::from),
            media_format: format.map(String::from),
            media_sample_rate_hertz: rate,
            output_bucket_name: Some(bucket),
            output_key_prefix: prefix,
            vocabulary_filter_name: method.map(|_| "filter".to_string()),
            vocabulary_filter_method: method.map(String::from),
            tags,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn prop_job_defaults_serde_roundtrip(defaults in job_defaults_strategy()) {
        let json = serde_json::to_string(&defaults).unwrap();
        let decoded: JobDefaults = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, defaults);
    }

    #[test]
    fn prop_profile_loads_as_written(defaults in job_defaults_strategy()) {
        let profiles = ProfileFile {
            profiles: [("generated".to_string(), defaults.clone())].into(),
        };
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&profiles).unwrap()).unwrap();

        let loaded = ConfigLoader::new()
            .with_profile_name("generated".to_string())
            .with_config_path(file.path().to_path_buf())
            .from_profile()
            .unwrap()
            .build()
            .unwrap();
        prop_assert_eq!(loaded, defaults);
    }

    #[test]
    fn prop_sample_rate_range(rate in 0i32..100_000) {
        let result = ConfigLoader::new().with_media_sample_rate_hertz(rate).build();
        if (MIN_SAMPLE_RATE_HERTZ..=MAX_SAMPLE_RATE_HERTZ).contains(&rate) {
            prop_assert!(result.is_ok());
        } else {
            let rejected = matches!(result, Err(ConfigError::InvalidSampleRate { value }) if value == rate);
            prop_assert!(rejected);
        }
    }
}
