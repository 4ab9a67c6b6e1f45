//! Error types for Ledger Bard.
//!
//! This crate provides the error types shared by every Ledger Bard crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use ledger_bard_error::{HttpError, LedgerBardResult};
//!
//! fn fetch_data() -> LedgerBardResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chain;
mod config;
mod credential;
mod error;
mod gemini;
mod http;
mod json;
mod media;
mod story;

pub use chain::{ChainError, ChainErrorKind};
pub use config::ConfigError;
pub use credential::CredentialError;
pub use error::{LedgerBardError, LedgerBardErrorKind, LedgerBardResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use media::{MediaError, MediaErrorKind};
pub use story::{StoryError, StoryErrorKind};
