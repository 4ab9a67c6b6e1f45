//! Generative service clients for Ledger Bard.
//!
//! - [`GeminiClient`]: story script generation (enable with the `gemini` feature)
//! - [`ImagenClient`]: scene illustrations through the Imagen `:predict` endpoint
//! - [`TextToSpeechClient`]: scene narration through Cloud Text-to-Speech
//!
//! Every client takes its API key from an explicit [`Credentials`] value built
//! once at startup, and records call counts and latency in [`ServiceMetrics`].
//!
//! # Example
//!
//! ```no_run
//! use ledger_bard_core::Genre;
//! use ledger_bard_interface::SpeechSynthesizer;
//! use ledger_bard_models::{Credentials, SpeechConfig, TextToSpeechClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::from_env()?;
//! let tts = TextToSpeechClient::new(&credentials, SpeechConfig::default())?;
//! let audio = tts.synthesize_speech("Rain on chrome.", Genre::CyberpunkNoir).await;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credentials;
mod imagen;
mod metrics;
mod speech;

#[cfg(feature = "gemini")]
mod gemini;

pub use credentials::Credentials;
pub use imagen::{ImageConfig, ImagenClient, PersonGeneration, SafetyFilterLevel};
pub use metrics::{ServiceMetrics, classify_error};
pub use speech::{AudioEncoding, SpeechConfig, TextToSpeechClient};

#[cfg(feature = "gemini")]
pub use gemini::{GeminiClient, TextModelConfig};
