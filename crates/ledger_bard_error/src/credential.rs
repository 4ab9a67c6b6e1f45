//! Credential error types.
//!
//! A credential error is fatal: it is raised while building the client
//! configuration at startup, before any story is told.

/// Missing or unusable credentials.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Credential Error: {} at line {} in {}", message, line, file)]
pub struct CredentialError {
    /// What is missing or malformed
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl CredentialError {
    /// Create a new CredentialError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_bard_error::CredentialError;
    ///
    /// let err = CredentialError::new("GEMINI_API_KEY environment variable not set");
    /// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
