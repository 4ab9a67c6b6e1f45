//! Narrator voices keyed by genre.

use crate::Genre;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A text-to-speech voice selection.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct VoiceProfile {
    /// BCP-47 language code, e.g. "en-GB"
    language_code: String,
    /// Provider voice name, e.g. "en-GB-Neural2-D"
    name: String,
}

impl VoiceProfile {
    /// Create a voice profile.
    pub fn new(language_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            language_code: language_code.into(),
            name: name.into(),
        }
    }

    /// Deep British male storyteller.
    pub fn british_bard() -> Self {
        Self::new("en-GB", "en-GB-Neural2-D")
    }
}

/// Genre to voice lookup with a fallback narrator.
///
/// The standard table carries one entry per genre except Dark Fantasy, which
/// is read by the default voice.
///
/// # Examples
///
/// ```
/// use ledger_bard_core::{Genre, VoiceTable};
///
/// let table = VoiceTable::standard();
/// assert_eq!(table.voice_for(Genre::CyberpunkNoir).name(), "en-US-Neural2-J");
/// assert_eq!(table.voice_for(Genre::DarkFantasy).name(), "en-GB-Neural2-D");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceTable {
    /// Voice used when a genre has no entry
    #[serde(default = "VoiceProfile::british_bard")]
    default: VoiceProfile,
    /// Per-genre voices
    #[serde(default)]
    voices: HashMap<Genre, VoiceProfile>,
}

impl VoiceTable {
    /// The narrator table the application ships with.
    pub fn standard() -> Self {
        use strum::IntoEnumIterator;

        let voices = Genre::iter()
            .filter_map(|genre| Self::standard_voice(genre).map(|voice| (genre, voice)))
            .collect();

        Self {
            default: VoiceProfile::british_bard(),
            voices,
        }
    }

    fn standard_voice(genre: Genre) -> Option<VoiceProfile> {
        match genre {
            Genre::CyberpunkNoir => Some(VoiceProfile::new("en-US", "en-US-Neural2-J")),
            Genre::WatercolorFairytale => Some(VoiceProfile::new("en-GB", "en-GB-Neural2-C")),
            Genre::EightiesAnime => Some(VoiceProfile::new("en-US", "en-US-Neural2-F")),
            Genre::DarkFantasy => None,
        }
    }

    /// Voice for a genre, falling back to the default narrator.
    pub fn voice_for(&self, genre: Genre) -> &VoiceProfile {
        self.voices.get(&genre).unwrap_or(&self.default)
    }

    /// Replace the fallback narrator.
    pub fn with_default(mut self, voice: VoiceProfile) -> Self {
        self.default = voice;
        self
    }

    /// Override the voice for one genre.
    pub fn with_voice(mut self, genre: Genre, voice: VoiceProfile) -> Self {
        self.voices.insert(genre, voice);
        self
    }

    /// Layer another table's entries over this one.
    pub fn merged_with(mut self, overrides: VoiceTable) -> Self {
        self.default = overrides.default;
        self.voices.extend(overrides.voices);
        self
    }
}

impl Default for VoiceTable {
    fn default() -> Self {
        Self::standard()
    }
}
