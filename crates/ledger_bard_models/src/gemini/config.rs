use serde::{Deserialize, Serialize};

/// Default text model for script generation.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash-lite-001";

fn default_model() -> String {
    DEFAULT_TEXT_MODEL.to_string()
}

/// Text model selection and sampling options.
///
/// Loaded from the `[story]` table of `ledger_bard.toml`. Unset sampling
/// options leave the provider defaults in place.
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
pub struct TextModelConfig {
    /// Model name, with or without the `models/` prefix
    #[serde(default = "default_model")]
    #[setters(into)]
    model: String,
    /// Sampling temperature
    #[serde(default)]
    #[setters(strip_option)]
    temperature: Option<f32>,
    /// Upper bound on generated tokens
    #[serde(default)]
    #[setters(strip_option)]
    max_output_tokens: Option<u32>,
    /// Optional system instruction sent with every request
    #[serde(default)]
    #[setters(into, strip_option)]
    system_prompt: Option<String>,
}

impl Default for TextModelConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: None,
            max_output_tokens: None,
            system_prompt: None,
        }
    }
}
