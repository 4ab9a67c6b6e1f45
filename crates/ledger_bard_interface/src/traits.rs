//! Collaborator traits.

use crate::{Frame, Story};
use async_trait::async_trait;
use ledger_bard_core::{Genre, Persona, TransferRecord};
use ledger_bard_error::LedgerBardResult;

/// Source of recent token transfers for a wallet.
///
/// Never fails: implementations swallow transport and decoding errors and
/// degrade to an empty (or simulated) history.
#[async_trait]
pub trait TransferSource: Send + Sync {
    /// Most recent transfers for `address`, newest first.
    async fn fetch_transfers(&self, address: &str) -> Vec<TransferRecord>;

    /// Name of the backing chain API (e.g. "trongrid").
    fn source_name(&self) -> &'static str;
}

/// Language model that writes the story script.
///
/// A failure here ends the run: there is nothing to parse.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Raw multi-line script text for a prompt.
    async fn generate_narrative(&self, prompt: &str) -> LedgerBardResult<String>;

    /// Provider name (e.g. "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier.
    fn model_name(&self) -> &str;
}

/// Text-to-speech narration.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize narration audio for `text` in the voice chosen for `genre`.
    async fn synthesize(&self, text: &str, genre: Genre) -> LedgerBardResult<Vec<u8>>;

    /// Like [`synthesize`](Self::synthesize) but reports failure as `None`.
    async fn synthesize_speech(&self, text: &str, genre: Genre) -> Option<Vec<u8>> {
        match self.synthesize(text, genre).await {
            Ok(audio) => Some(audio),
            Err(e) => {
                tracing::warn!(error = %e, genre = %genre, "Narration unavailable for scene");
                None
            }
        }
    }
}

/// Image synthesis for scene illustrations.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image for a fully assembled prompt.
    async fn generate(&self, prompt: &str) -> LedgerBardResult<Vec<u8>>;

    /// Like [`generate`](Self::generate) but reports failure as `None`.
    async fn generate_image(&self, prompt: &str) -> Option<Vec<u8>> {
        match self.generate(prompt).await {
            Ok(image) => Some(image),
            Err(e) => {
                tracing::warn!(error = %e, "Illustration unavailable for scene");
                None
            }
        }
    }
}

/// Presentation of a story as it is produced.
///
/// Frames arrive in script order, each one as soon as its media is ready.
pub trait StoryRenderer: Send {
    /// The wallet has been classified.
    fn persona(&mut self, persona: &Persona, transfers: &[TransferRecord]) -> LedgerBardResult<()>;

    /// A scene or illustration is ready.
    fn frame(&mut self, frame: &Frame) -> LedgerBardResult<()>;

    /// The story is complete. `story.frames()` is empty when the script
    /// contained no recognizable blocks.
    fn finish(&mut self, story: &Story) -> LedgerBardResult<()>;
}
