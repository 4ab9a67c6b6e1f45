//! Blockchain data source errors.

/// Conditions that prevent transfer history from being fetched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ChainErrorKind {
    /// Address was empty or contained whitespace
    #[display("Invalid wallet address: '{}'", _0)]
    InvalidAddress(String),
    /// Request could not be sent or timed out
    #[display("Transfer request failed: {}", _0)]
    Request(String),
    /// Chain API answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason
        message: String,
    },
    /// Response body did not match the expected shape
    #[display("Malformed transfer response: {}", _0)]
    MalformedResponse(String),
}

/// Transfer fetch error with source location tracking.
///
/// Never surfaces past the fetcher: the fetcher logs it and degrades to
/// empty or simulated history.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Chain Error: {} at line {} in {}", kind, line, file)]
pub struct ChainError {
    /// The kind of error that occurred
    pub kind: ChainErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ChainError {
    /// Create a new ChainError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ChainErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
