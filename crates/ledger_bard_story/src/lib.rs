//! Story engine for Ledger Bard.
//!
//! Turns a wallet's transfers into an illustrated, narrated story:
//!
//! 1. [`classify`] maps the transfers to a [`Persona`](ledger_bard_core::Persona)
//! 2. [`build_prompt`] grounds a script request in the persona and the data
//! 3. a [`NarrativeGenerator`](ledger_bard_interface::NarrativeGenerator) writes the script
//! 4. [`parse`] splits the script into scene and image prompt blocks
//! 5. [`StoryPipeline`] narrates and illustrates each block and hands the
//!    frames to a [`StoryRenderer`](ledger_bard_interface::StoryRenderer)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classifier;
mod parser;
mod pipeline;
mod prompt;

pub use classifier::classify;
pub use parser::parse;
pub use pipeline::{Briefing, StoryPipeline};
pub use prompt::{
    PromptOptions, PromptVariant, StakesSource, build_prompt, final_image_prompt, selected_amount,
};
