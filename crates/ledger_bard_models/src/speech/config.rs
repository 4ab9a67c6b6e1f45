use std::collections::HashMap;

use ledger_bard_core::{Genre, VoiceProfile, VoiceTable};
use serde::{Deserialize, Serialize};

/// Default Cloud Text-to-Speech endpoint.
pub const DEFAULT_SPEECH_BASE_URL: &str = "https://texttospeech.googleapis.com";

fn default_base_url() -> String {
    DEFAULT_SPEECH_BASE_URL.to_string()
}

fn default_speaking_rate() -> f32 {
    0.90
}

fn default_pitch() -> f32 {
    2.0
}

fn default_timeout_secs() -> u64 {
    30
}

/// Audio container requested from the speech service.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    /// Uncompressed 16-bit PCM with a WAV header
    #[default]
    #[display("LINEAR16")]
    #[serde(rename = "LINEAR16", alias = "linear16")]
    Linear16,
    /// MP3
    #[display("MP3")]
    #[serde(alias = "mp3")]
    Mp3,
    /// Opus in an Ogg container
    #[display("OGG_OPUS")]
    #[serde(alias = "ogg_opus")]
    OggOpus,
}

impl AudioEncoding {
    /// File extension for saved narration.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Linear16 => "wav",
            Self::Mp3 => "mp3",
            Self::OggOpus => "ogg",
        }
    }
}

/// Narration settings, the `[speech]` table of `ledger_bard.toml`.
///
/// `voices` holds per-genre overrides keyed by genre slug; genres without an
/// override keep the standard narrator.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct SpeechConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    #[setters(into)]
    base_url: String,
    /// Requested audio encoding
    #[serde(default)]
    audio_encoding: AudioEncoding,
    /// Speaking rate, 1.0 is normal speed
    #[serde(default = "default_speaking_rate")]
    speaking_rate: f32,
    /// Pitch shift in semitones
    #[serde(default = "default_pitch")]
    pitch: f32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
    /// Replacement for the fallback narrator
    #[serde(default)]
    #[setters(strip_option)]
    default_voice: Option<VoiceProfile>,
    /// Per-genre voice overrides
    #[serde(default)]
    voices: HashMap<Genre, VoiceProfile>,
}

impl SpeechConfig {
    /// The standard narrator table with this config's overrides applied.
    pub fn voice_table(&self) -> VoiceTable {
        let table = match &self.default_voice {
            Some(voice) => VoiceTable::standard().with_default(voice.clone()),
            None => VoiceTable::standard(),
        };

        self.voices
            .iter()
            .fold(table, |table, (genre, voice)| {
                table.with_voice(*genre, voice.clone())
            })
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            audio_encoding: AudioEncoding::default(),
            speaking_rate: default_speaking_rate(),
            pitch: default_pitch(),
            timeout_secs: default_timeout_secs(),
            default_voice: None,
            voices: HashMap::new(),
        }
    }
}
