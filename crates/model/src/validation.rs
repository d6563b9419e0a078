//! Pattern constraints referenced by `#[validate(custom(...))]` attributes.
//!
//! Responsibilities:
//! - Check the character-class patterns the service documents for names,
//!   bucket names, object keys, KMS key ids, ARNs, and media URIs.
//! - Reject enumeration values this client does not know in outgoing requests.
//!
//! Does NOT handle:
//! - Length bounds (declared with `length(...)` on the fields themselves).
//! - Cross-field rules (declared as `schema(...)` functions next to each record).
//!
//! Invariants:
//! - Every function here is pure; none of them is called at construction time.

use std::borrow::Cow;

use validator::ValidationError;

use crate::shape::WireEnum;

/// Build a [`ValidationError`] with a stable code and a static message.
pub(crate) fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Job, vocabulary, and filter names: `^[0-9a-zA-Z._-]+`.
pub fn resource_name(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        Ok(())
    } else {
        Err(invalid(
            "resource_name",
            "may only contain letters, digits, '.', '_' and '-'",
        ))
    }
}

/// S3 bucket names: `[a-z0-9][\.\-a-z0-9]{1,61}[a-z0-9]`.
pub fn bucket_name(value: &str) -> Result<(), ValidationError> {
    let bytes = value.as_bytes();
    let edge_ok = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    let valid = (3..=63).contains(&bytes.len())
        && edge_ok(bytes[0])
        && edge_ok(bytes[bytes.len() - 1])
        && bytes
            .iter()
            .all(|&b| edge_ok(b) || b == b'.' || b == b'-');
    if valid {
        Ok(())
    } else {
        Err(invalid(
            "bucket_name",
            "must be 3-63 lowercase letters, digits, '.' or '-', starting and ending alphanumeric",
        ))
    }
}

/// S3 object keys: `[a-zA-Z0-9-_.!*'()/]{1,1024}`.
pub fn output_key(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '!' | '*' | '\'' | '(' | ')' | '/')
    }) {
        Ok(())
    } else {
        Err(invalid(
            "output_key",
            "may only contain letters, digits and -_.!*'()/",
        ))
    }
}

/// KMS key ids, aliases, and ARNs: `^[A-Za-z0-9][A-Za-z0-9:_/+=,@.-]{0,2048}$`.
pub fn kms_key_id(value: &str) -> Result<(), ValidationError> {
    let mut chars = value.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphanumeric());
    let rest_ok = chars.all(|c| {
        c.is_ascii_alphanumeric() || matches!(c, ':' | '_' | '/' | '+' | '=' | ',' | '@' | '.' | '-')
    });
    if first_ok && rest_ok {
        Ok(())
    } else {
        Err(invalid("kms_key_id", "is not a valid KMS key id, alias, or ARN"))
    }
}

/// IAM role ARNs: `arn:<partition>:iam::<account>:role/<path>`.
pub fn role_arn(value: &str) -> Result<(), ValidationError> {
    let mut parts = value.splitn(6, ':');
    let valid = parts.next() == Some("arn")
        && parts.next().is_some_and(|p| p.starts_with("aws"))
        && parts.next() == Some("iam")
        && parts.next() == Some("")
        && parts
            .next()
            .is_some_and(|account| account.chars().all(|c| c.is_ascii_digit()))
        && parts
            .next()
            .is_some_and(|resource| resource.starts_with("role/"));
    if valid {
        Ok(())
    } else {
        Err(invalid("role_arn", "is not a valid IAM role ARN"))
    }
}

/// Transcribe resource ARNs: `arn:<partition>:transcribe:<region>:<account>:<type>/<name>`.
pub fn resource_arn(value: &str) -> Result<(), ValidationError> {
    let mut parts = value.splitn(6, ':');
    let valid = parts.next() == Some("arn")
        && parts.next().is_some_and(|p| p.starts_with("aws"))
        && parts.next() == Some("transcribe")
        && parts.next().is_some()
        && parts
            .next()
            .is_some_and(|account| account.len() == 12 && account.chars().all(|c| c.is_ascii_digit()))
        && parts.next().is_some_and(|resource| {
            resource
                .split_once('/')
                .is_some_and(|(_, name)| resource_name(name).is_ok())
        });
    if valid {
        Ok(())
    } else {
        Err(invalid("resource_arn", "is not a valid Transcribe resource ARN"))
    }
}

/// Media and word-list locations: an `s3://` URI or an `https://` S3 URL.
pub fn media_uri(value: &str) -> Result<(), ValidationError> {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "s3" | "https") && parsed.host_str().is_some() => {
            Ok(())
        }
        _ => Err(invalid("media_uri", "must be an s3:// or https:// location")),
    }
}

/// Enumerated request fields: decoding keeps unknown values, sending refuses them.
pub fn known_value<T: WireEnum + ?Sized>(value: &T) -> Result<(), ValidationError> {
    if value.is_unknown() {
        Err(invalid(
            "unknown_value",
            "is not a value this client knows how to send",
        ))
    } else {
        Ok(())
    }
}

/// Count how many of the given selectors are switched on.
pub(crate) fn count_selected(flags: &[bool]) -> usize {
    flags.iter().filter(|&&on| on).count()
}
