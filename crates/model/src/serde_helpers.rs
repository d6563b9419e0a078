//! Serde helpers for the service's timestamp encoding.
//!
//! Responsibilities:
//! - Encode timestamps as fractional epoch seconds, the JSON protocol's format.
//! - Accept epoch seconds as numbers or numeric strings, and RFC 3339 strings,
//!   when decoding.
//!
//! Explicitly does NOT handle:
//! - Time zone conversion (all timestamps are UTC).
//!
//! Invariants / assumptions:
//! - Precision is kept to the millisecond.
//! - Decode errors are generic and never echo the raw payload.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TimestampRepr {
    Seconds(f64),
    Text(String),
}

fn from_epoch_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
}

fn parse_timestamp_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(seconds) = text.parse::<f64>() {
        return from_epoch_seconds(seconds);
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// `#[serde(with = ...)]` module for `Option<DateTime<Utc>>` fields.
pub mod epoch_seconds {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_f64(ts.timestamp_millis() as f64 / 1000.0),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Option::<TimestampRepr>::deserialize(deserializer)?;
        match value {
            None => Ok(None),
            Some(TimestampRepr::Seconds(seconds)) => from_epoch_seconds(seconds)
                .map(Some)
                .ok_or_else(|| D::Error::custom("timestamp out of range")),
            Some(TimestampRepr::Text(text)) => parse_timestamp_text(&text)
                .map(Some)
                .ok_or_else(|| D::Error::custom("invalid timestamp")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::Serialize;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(
            default,
            with = "epoch_seconds",
            skip_serializing_if = "Option::is_none"
        )]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_epoch_seconds_accepts_fractional_number() {
        let parsed: Wrapper = serde_json::from_str(r#"{ "at": 1700000000.25 }"#).unwrap();
        let expected = Utc.timestamp_millis_opt(1_700_000_000_250).unwrap();
        assert_eq!(parsed.at, Some(expected));
    }

    #[test]
    fn test_epoch_seconds_accepts_numeric_string() {
        let parsed: Wrapper = serde_json::from_str(r#"{ "at": "1700000000" }"#).unwrap();
        assert_eq!(parsed.at.unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_epoch_seconds_accepts_rfc3339() {
        let parsed: Wrapper =
            serde_json::from_str(r#"{ "at": "2023-11-14T22:13:20.000Z" }"#).unwrap();
        assert_eq!(parsed.at.unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_epoch_seconds_accepts_null_and_missing() {
        let parsed: Wrapper = serde_json::from_str(r#"{ "at": null }"#).unwrap();
        assert!(parsed.at.is_none());
        let parsed: Wrapper = serde_json::from_str("{}").unwrap();
        assert!(parsed.at.is_none());
    }

    #[test]
    fn test_epoch_seconds_rejects_garbage() {
        let result = serde_json::from_str::<Wrapper>(r#"{ "at": "yesterday" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_epoch_seconds_serializes_fractional_seconds() {
        let wrapper = Wrapper {
            at: Some(Utc.timestamp_millis_opt(1_700_000_000_500).unwrap()),
        };
        assert_eq!(
            serde_json::to_string(&wrapper).unwrap(),
            r#"{"at":1700000000.5}"#
        );
    }
}
