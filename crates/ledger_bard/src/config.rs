//! Layered application configuration.

use config::{Config, File, FileFormat};
use ledger_bard_chain::ChainConfig;
use ledger_bard_error::{ConfigError, LedgerBardError, LedgerBardResult};
use ledger_bard_models::{ImageConfig, SpeechConfig, TextModelConfig};
use ledger_bard_story::PromptOptions;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../ledger_bard.toml");

/// Script generation settings, the `[story]` table.
///
/// Model selection and prompt shape share one table:
///
/// ```toml
/// [story]
/// model = "gemini-2.0-flash-lite-001"
/// temperature = 0.9
/// variant = "stakes"
/// stakes_source = "most-recent"
/// scene_count = 3
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct StoryConfig {
    /// Text model and sampling
    #[serde(flatten)]
    model: TextModelConfig,
    /// Prompt shape
    #[serde(flatten)]
    prompt: PromptOptions,
}

/// Complete Ledger Bard configuration.
///
/// Every table is optional; missing keys take the built-in defaults.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct LedgerBardConfig {
    /// Transfer source
    #[serde(default)]
    chain: ChainConfig,
    /// Script generation
    #[serde(default)]
    story: StoryConfig,
    /// Illustration
    #[serde(default)]
    image: ImageConfig,
    /// Narration
    #[serde(default)]
    speech: SpeechConfig,
}

impl LedgerBardConfig {
    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> LedgerBardResult<Self> {
        debug!("Loading configuration from file");

        Self::deserialize_from(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Parse configuration from TOML text layered over the bundled defaults.
    pub fn from_toml_str(toml: &str) -> LedgerBardResult<Self> {
        Self::deserialize_from(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from_str(toml, FileFormat::Toml)),
        )
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// 1. Bundled defaults (`ledger_bard.toml` shipped with the crate)
    /// 2. `~/.config/ledger_bard/ledger_bard.toml`
    /// 3. `./ledger_bard.toml`
    ///
    /// User files are optional and skipped when absent.
    #[instrument]
    pub fn load() -> LedgerBardResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/ledger_bard/ledger_bard.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("ledger_bard").required(false));

        Self::deserialize_from(builder)
    }

    fn deserialize_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> LedgerBardResult<Self> {
        builder
            .build()
            .map_err(|e| {
                LedgerBardError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                LedgerBardError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
