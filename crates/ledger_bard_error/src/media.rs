//! Image and speech synthesis errors.

/// Failures of the per-scene media services.
///
/// These never abort a story: the pipeline drops the affected artifact
/// and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum MediaErrorKind {
    /// Image request could not be sent
    #[display("Image request failed: {}", _0)]
    ImageRequest(String),
    /// Image service returned no usable image (filtered or empty)
    #[display("Image service returned no image: {}", _0)]
    NoImage(String),
    /// Speech request could not be sent
    #[display("Speech request failed: {}", _0)]
    SpeechRequest(String),
    /// Speech service returned no audio
    #[display("Speech service returned no audio")]
    NoAudio,
    /// Service answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason
        message: String,
    },
    /// Media payload was not valid base64
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
}

/// Media error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Error: {} at line {} in {}", kind, line, file)]
pub struct MediaError {
    /// The kind of error that occurred
    pub kind: MediaErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MediaError {
    /// Create a new MediaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MediaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
