//! Google Gemini text generation.
//!
//! Produces the story script from the assembled prompt. A single client is
//! bound to one model for the lifetime of the process.

mod client;
mod config;

pub use client::GeminiClient;
pub use config::TextModelConfig;

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, ledger_bard_error::GeminiError>;
