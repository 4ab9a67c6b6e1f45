//! Top-level error wrapper types.

use crate::{
    ChainError, ConfigError, CredentialError, GeminiError, HttpError, JsonError, MediaError,
    StoryError,
};

/// Every error condition Ledger Bard can report.
///
/// # Examples
///
/// ```
/// use ledger_bard_error::{HttpError, LedgerBardError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: LedgerBardError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LedgerBardErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Missing credentials
    #[from(CredentialError)]
    Credential(CredentialError),
    /// Transfer history error
    #[from(ChainError)]
    Chain(ChainError),
    /// Text generation error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Image or speech error
    #[from(MediaError)]
    Media(MediaError),
    /// Story pipeline error
    #[from(StoryError)]
    Story(StoryError),
}

/// Ledger Bard error with kind discrimination.
///
/// # Examples
///
/// ```
/// use ledger_bard_error::{ConfigError, LedgerBardResult};
///
/// fn might_fail() -> LedgerBardResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Ledger Bard Error: {}", _0)]
pub struct LedgerBardError(Box<LedgerBardErrorKind>);

impl LedgerBardError {
    /// Create a new error from a kind.
    pub fn new(kind: LedgerBardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LedgerBardErrorKind {
        &self.0
    }
}

impl<T> From<T> for LedgerBardError
where
    T: Into<LedgerBardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Ledger Bard operations.
pub type LedgerBardResult<T> = std::result::Result<T, LedgerBardError>;
