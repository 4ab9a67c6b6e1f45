//! Trait definitions for Ledger Bard collaborators.
//!
//! The story engine only talks to the outside world through these traits:
//! a transfer source, a narrative generator, a speech synthesizer, an image
//! generator and a renderer. Concrete HTTP clients live in
//! `ledger_bard_chain` and `ledger_bard_models`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{
    ImageGenerator, NarrativeGenerator, SpeechSynthesizer, StoryRenderer, TransferSource,
};
pub use types::{Frame, IllustrationFrame, SceneFrame, Story};
