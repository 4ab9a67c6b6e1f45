//! Story pipeline errors.

/// Conditions that end a story run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// The language model failed to write the script; nothing to parse
    #[display("Narrative generation failed: {}", _0)]
    NarrativeGeneration(String),
    /// Failed to serialize transfers into the prompt
    #[display("Failed to assemble prompt: {}", _0)]
    PromptAssembly(String),
    /// A saved script could not be read
    #[display("Failed to read script: {}", _0)]
    ScriptRead(String),
    /// Renderer could not present or save an artifact
    #[display("Render failed: {}", _0)]
    Render(String),
}

/// Error type for story operations.
///
/// # Examples
///
/// ```
/// use ledger_bard_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::NarrativeGeneration("quota".into()));
/// assert!(format!("{}", err).contains("quota"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
