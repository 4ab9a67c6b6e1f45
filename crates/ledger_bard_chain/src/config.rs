//! Transfer source configuration.

use serde::{Deserialize, Serialize};

/// Environment variable holding the optional TronGrid API key.
pub const TRON_API_KEY: &str = "TRON_PRO_API_KEY";

/// What a failed fetch turns into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackMode {
    /// No transfers; the wallet reads as a ghost
    #[default]
    Empty,
    /// A small fixed history so the story still has something to say
    Simulated,
}

/// Settings for the TronGrid transfer source.
///
/// Loaded from the `[chain]` table of `ledger_bard.toml`.
///
/// ```toml
/// [chain]
/// base_url = "https://api.trongrid.io"
/// limit = 3
/// timeout_secs = 10
/// fallback = "empty"
/// ```
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
pub struct ChainConfig {
    /// TronGrid endpoint root
    #[serde(default = "default_base_url")]
    #[setters(into)]
    base_url: String,
    /// How many of the most recent transfers to keep
    #[serde(default = "default_limit")]
    limit: usize,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
    /// Behaviour when the fetch fails
    #[serde(default)]
    fallback: FallbackMode,
    /// Optional `TRON-PRO-API-KEY` for higher rate limits, never read from files
    #[serde(skip)]
    #[setters(strip_option, into)]
    api_key: Option<String>,
}

fn default_base_url() -> String {
    "https://api.trongrid.io".to_string()
}

fn default_limit() -> usize {
    3
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            limit: default_limit(),
            timeout_secs: default_timeout_secs(),
            fallback: FallbackMode::default(),
            api_key: None,
        }
    }
}

impl ChainConfig {
    /// Attach the API key from [`TRON_API_KEY`] when it is set.
    pub fn with_api_key_from_env(self) -> Self {
        self.with_api_key_from(|name| std::env::var(name).ok())
    }

    /// Like [`with_api_key_from_env`](Self::with_api_key_from_env) with a
    /// custom variable lookup. Blank values count as unset.
    ///
    /// ```
    /// use ledger_bard_chain::ChainConfig;
    ///
    /// let config = ChainConfig::default().with_api_key_from(|name| match name {
    ///     "TRON_PRO_API_KEY" => Some("t-key".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.api_key().as_deref(), Some("t-key"));
    /// ```
    pub fn with_api_key_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(TRON_API_KEY).filter(|value| !value.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }
}
