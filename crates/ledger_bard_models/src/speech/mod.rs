//! Cloud Text-to-Speech narration.

mod client;
mod config;
mod dto;

pub use client::TextToSpeechClient;
pub use config::{AudioEncoding, SpeechConfig};
