//! Ledger Bard: illustrated, narrated stories from TRON wallet activity.
//!
//! Ledger Bard fetches a wallet's recent TRC-20 transfers, classifies the
//! wallet into a persona, asks Gemini for a scene-by-scene micro-story
//! grounded in that data, then illustrates each scene with Imagen and
//! narrates it with Cloud Text-to-Speech.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ledger_bard::{
//!     Credentials, GeminiClient, Genre, LedgerBardConfig, StoryPipeline, TronGridClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LedgerBardConfig::load()?;
//!     let credentials = Credentials::from_env()?;
//!
//!     let pipeline = StoryPipeline::new(
//!         TronGridClient::new(config.chain().clone())?,
//!         GeminiClient::new(&credentials, config.story().model().clone())?,
//!     );
//!     let briefing = pipeline.prepare("TXYZ...", Genre::CyberpunkNoir).await?;
//!     println!("{}", briefing.prompt());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `ledger_bard_error` - Error types
//! - `ledger_bard_core` - Transfers, personas, genres, script blocks, voices
//! - `ledger_bard_interface` - Collaborator traits and rendered story types
//! - `ledger_bard_chain` - TronGrid transfer source
//! - `ledger_bard_models` - Gemini, Imagen and Text-to-Speech clients
//! - `ledger_bard_story` - Classifier, parser, prompt assembly and pipeline
//!
//! This crate re-exports everything and adds layered configuration and
//! logging setup for the `ledger-bard` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;

pub use config::{LedgerBardConfig, StoryConfig};
pub use observability::{LoggingConfig, init_logging};

pub use ledger_bard_chain::*;
pub use ledger_bard_core::*;
pub use ledger_bard_error::*;
pub use ledger_bard_interface::*;
pub use ledger_bard_models::*;
pub use ledger_bard_story::*;
