//! Environment variable tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test environment variable overrides for profile values.
//! - Test handling of empty and malformed environment variables.
//! - Test TRANSCRIBE_CONFIG_PATH and TRANSCRIBE_PROFILE handling.

use serial_test::serial;
use tempfile::TempDir;

use super::env_lock;
use super::profile_tests::create_test_config_file;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

#[test]
#[serial]
fn test_env_overrides_profile() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config_file(temp_dir.path());

    temp_env::with_vars([("TRANSCRIBE_LANGUAGE_CODE", Some("de-DE"))], || {
        let defaults = ConfigLoader::new()
            .with_profile_name("dev".to_string())
            .with_config_path(config_path.clone())
            .from_profile()
            .unwrap()
            .from_env()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(defaults.language_code.as_deref(), Some("de-DE"));
        assert_eq!(defaults.media_format.as_deref(), Some("wav"));
    });
}

#[test]
#[serial]
fn test_builder_overrides_env_regardless_of_order() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("TRANSCRIBE_MEDIA_FORMAT", Some("mp3"))], || {
        let defaults = ConfigLoader::new()
            .with_media_format("flac".to_string())
            .from_env()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(defaults.media_format.as_deref(), Some("flac"));
    });
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("TRANSCRIBE_LANGUAGE_CODE", Some("")),
            ("TRANSCRIBE_OUTPUT_BUCKET", Some("   ")),
        ],
        || {
            let defaults = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert!(defaults.language_code.is_none());
            assert!(defaults.output_bucket_name.is_none());
        },
    );
}

#[test]
#[serial]
fn test_all_env_vars_read() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("TRANSCRIBE_LANGUAGE_CODE", Some("es-US")),
            ("TRANSCRIBE_MEDIA_FORMAT", Some("ogg")),
            ("TRANSCRIBE_SAMPLE_RATE", Some("22050")),
            ("TRANSCRIBE_OUTPUT_BUCKET", Some("transcripts")),
            ("TRANSCRIBE_OUTPUT_KEY_PREFIX", Some("calls/")),
            ("TRANSCRIBE_OUTPUT_KMS_KEY_ID", Some("alias/transcripts")),
            ("TRANSCRIBE_VOCABULARY_NAME", Some("terms")),
            ("TRANSCRIBE_VOCABULARY_FILTER_NAME", Some("profanity")),
            ("TRANSCRIBE_VOCABULARY_FILTER_METHOD", Some("tag")),
            (
                "TRANSCRIBE_DATA_ACCESS_ROLE_ARN",
                Some("arn:aws:iam::111122223333:role/Transcribe"),
            ),
            ("TRANSCRIBE_TAGS", Some("team=speech,env=test")),
        ],
        || {
            let defaults = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(defaults.language_code.as_deref(), Some("es-US"));
            assert_eq!(defaults.media_format.as_deref(), Some("ogg"));
            assert_eq!(defaults.media_sample_rate_hertz, Some(22050));
            assert_eq!(defaults.output_bucket_name.as_deref(), Some("transcripts"));
            assert_eq!(defaults.output_key_prefix.as_deref(), Some("calls/"));
            assert_eq!(
                defaults.output_encryption_kms_key_id.as_deref(),
                Some("alias/transcripts")
            );
            assert_eq!(defaults.vocabulary_name.as_deref(), Some("terms"));
            assert_eq!(defaults.vocabulary_filter_name.as_deref(), Some("profanity"));
            assert_eq!(defaults.vocabulary_filter_method.as_deref(), Some("tag"));
            assert!(defaults.data_access_role_arn.is_some());
            assert_eq!(defaults.tags.len(), 2);
        },
    );
}

#[test]
#[serial]
fn test_invalid_sample_rate_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("TRANSCRIBE_SAMPLE_RATE", Some("fast"))], || {
        let result = ConfigLoader::new().from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "TRANSCRIBE_SAMPLE_RATE"
        ));
    });

    temp_env::with_vars([("TRANSCRIBE_SAMPLE_RATE", Some("96000"))], || {
        let result = ConfigLoader::new().from_env().unwrap().build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSampleRate { value: 96000 })
        ));
    });
}

#[test]
#[serial]
fn test_env_overrides_profile_loaded_afterwards() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config_file(temp_dir.path());

    temp_env::with_vars(
        [
            ("TRANSCRIBE_LANGUAGE_CODE", Some("de-DE")),
            ("TRANSCRIBE_TAGS", Some("team=research")),
        ],
        || {
            let defaults = ConfigLoader::new()
                .with_profile_name("dev".to_string())
                .with_config_path(config_path.clone())
                .from_env()
                .unwrap()
                .from_profile()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(defaults.language_code.as_deref(), Some("de-DE"));
            assert_eq!(defaults.media_format.as_deref(), Some("wav"));
            assert_eq!(defaults.tags.len(), 1);
            assert_eq!(defaults.tags["team"], "research");
        },
    );
}

#[test]
#[serial]
fn test_config_path_and_profile_from_env() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config_file(temp_dir.path());
    let config_path_str = config_path.to_string_lossy().to_string();

    temp_env::with_vars(
        [
            ("TRANSCRIBE_CONFIG_PATH", Some(config_path_str.as_str())),
            ("TRANSCRIBE_PROFILE", Some("prod")),
        ],
        || {
            let defaults = ConfigLoader::new()
                .from_env()
                .unwrap()
                .from_profile()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(defaults.language_code.as_deref(), Some("en-GB"));
            assert_eq!(defaults.output_bucket_name.as_deref(), Some("prod-transcripts"));
        },
    );
}

#[test]
#[serial]
fn test_builder_profile_name_wins_over_env() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config_file(temp_dir.path());

    temp_env::with_vars([("TRANSCRIBE_PROFILE", Some("prod"))], || {
        let defaults = ConfigLoader::new()
            .with_profile_name("dev".to_string())
            .with_config_path(config_path.clone())
            .from_env()
            .unwrap()
            .from_profile()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(defaults.language_code.as_deref(), Some("en-US"));
    });
}
