//! Core data types for Ledger Bard.
//!
//! This crate holds the vocabulary shared by the fetcher, the story engine and
//! the media clients: transfer records, personas, genres, parsed script
//! blocks, narration voices and stakes tiers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod genre;
mod persona;
mod script;
mod stakes;
mod transfer;
mod voice;

pub use genre::Genre;
pub use persona::{Persona, PersonaKind};
pub use script::ScriptBlock;
pub use stakes::{Stakes, StakesThresholds, StakesTier};
pub use transfer::TransferRecord;
pub use voice::{VoiceProfile, VoiceTable};
