//! Records shared by several operations: media, transcript locations, tags.

use crate::shape::{shape, string_enum};

string_enum! {
    /// Audio or video container of the input media.
    pub enum MediaFormat {
        Mp3 => "mp3",
        Mp4 => "mp4",
        Wav => "wav",
        Flac => "flac",
        Ogg => "ogg",
        Amr => "amr",
        Webm => "webm",
        M4a => "m4a",
    }
}

string_enum! {
    /// Where a finished transcript was stored.
    pub enum OutputLocationType {
        CustomerBucket => "CUSTOMER_BUCKET",
        ServiceBucket => "SERVICE_BUCKET",
    }
}

shape! {
    /// Location of the input media file.
    pub struct Media {
        #[validate(length(min = 1, max = 2000), custom(function = "crate::validation::media_uri"))]
        media_file_uri / with_media_file_uri: String => "MediaFileUri",
        #[validate(length(min = 1, max = 2000), custom(function = "crate::validation::media_uri"))]
        redacted_media_file_uri / with_redacted_media_file_uri: String => "RedactedMediaFileUri",
    }
}

shape! {
    /// Location of a finished transcript.
    pub struct Transcript {
        transcript_file_uri / with_transcript_file_uri: String => "TranscriptFileUri",
        redacted_transcript_file_uri / with_redacted_transcript_file_uri: String => "RedactedTranscriptFileUri",
    }
}

shape! {
    /// Key/value metadata attached to a resource.
    pub struct Tag {
        #[validate(required, length(min = 1, max = 128))]
        key / with_key: String => "Key",
        #[validate(required, length(max = 256))]
        value / with_value: String => "Value",
    }
}

impl Tag {
    /// Shorthand for a fully populated tag.
    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_key(key).with_value(value)
    }
}
