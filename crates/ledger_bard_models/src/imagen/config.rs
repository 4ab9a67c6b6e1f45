use serde::{Deserialize, Serialize};

/// Default Gemini API endpoint.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default image model.
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

fn default_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_IMAGE_MODEL.to_string()
}

fn default_aspect_ratio() -> String {
    "16:9".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// How aggressively the image service filters unsafe content.
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
#[serde(rename_all = "snake_case")]
pub enum SafetyFilterLevel {
    /// Block low probability harms and above
    #[display("block_most")]
    BlockMost,
    /// Block medium probability harms and above
    #[default]
    #[display("block_some")]
    BlockSome,
    /// Block only high probability harms
    #[display("block_few")]
    BlockFew,
    /// Block nothing the API allows through
    #[display("block_fewest")]
    BlockFewest,
}

impl SafetyFilterLevel {
    /// The `safetySetting` value understood by the `:predict` endpoint.
    pub fn api_value(self) -> &'static str {
        match self {
            Self::BlockMost => "block_low_and_above",
            Self::BlockSome => "block_medium_and_above",
            Self::BlockFew => "block_only_high",
            Self::BlockFewest => "block_none",
        }
    }
}

/// Whether generated images may depict people.
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
#[serde(rename_all = "snake_case")]
pub enum PersonGeneration {
    /// No people
    #[display("dont_allow")]
    DontAllow,
    /// Adults only
    #[default]
    #[display("allow_adult")]
    AllowAdult,
    /// Adults and children
    #[display("allow_all")]
    AllowAll,
}

/// Image generation settings, the `[image]` table of `ledger_bard.toml`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct ImageConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    #[setters(into)]
    base_url: String,
    /// Image model name
    #[serde(default = "default_model")]
    #[setters(into)]
    model: String,
    /// Aspect ratio such as "16:9"
    #[serde(default = "default_aspect_ratio")]
    #[setters(into)]
    aspect_ratio: String,
    /// Content filter strictness
    #[serde(default)]
    safety_filter_level: SafetyFilterLevel,
    /// People policy
    #[serde(default)]
    person_generation: PersonGeneration,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            aspect_ratio: default_aspect_ratio(),
            safety_filter_level: SafetyFilterLevel::default(),
            person_generation: PersonGeneration::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn defaults_match_service_expectations() {
        let config = ImageConfig::default();
        assert_eq!(config.model(), "imagen-4.0-generate-001");
        assert_eq!(config.aspect_ratio(), "16:9");
        assert_eq!(*config.safety_filter_level(), SafetyFilterLevel::BlockSome);
        assert_eq!(*config.person_generation(), PersonGeneration::AllowAdult);
    }

    #[test]
    fn display_matches_serde_names() {
        for level in SafetyFilterLevel::iter() {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level));
        }
        for policy in PersonGeneration::iter() {
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{}\"", policy));
        }
    }
}
