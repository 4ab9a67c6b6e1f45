//! API credentials.

use ledger_bard_error::CredentialError;

/// Environment variable holding the Gemini API key.
const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
/// Optional separate key for Cloud Text-to-Speech.
const TTS_API_KEY: &str = "GOOGLE_TTS_API_KEY";

/// API keys for the generative services.
///
/// Built once at startup and handed to each client; nothing reads the
/// environment after that.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    gemini_api_key: String,
    tts_api_key: String,
}

impl Credentials {
    /// Build credentials from explicit keys.
    pub fn new(gemini_api_key: impl Into<String>, tts_api_key: Option<String>) -> Self {
        let gemini_api_key = gemini_api_key.into();
        let tts_api_key = tts_api_key.unwrap_or_else(|| gemini_api_key.clone());
        Self {
            gemini_api_key,
            tts_api_key,
        }
    }

    /// Read `GEMINI_API_KEY` (required) and `GOOGLE_TTS_API_KEY` (optional,
    /// defaults to the Gemini key) from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`CredentialError`] when the Gemini key is unset or blank.
    pub fn from_env() -> Result<Self, CredentialError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable lookup.
    ///
    /// ```
    /// use ledger_bard_models::Credentials;
    ///
    /// let creds = Credentials::from_lookup(|name| match name {
    ///     "GEMINI_API_KEY" => Some("g-key".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(creds.tts_api_key(), "g-key");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let gemini_api_key = present(GEMINI_API_KEY).ok_or_else(|| {
            CredentialError::new(format!("{} environment variable not set", GEMINI_API_KEY))
        })?;

        Ok(Self::new(gemini_api_key, present(TTS_API_KEY)))
    }

    /// Key for Gemini text and Imagen requests.
    pub fn gemini_api_key(&self) -> &str {
        &self.gemini_api_key
    }

    /// Key for Cloud Text-to-Speech requests.
    pub fn tts_api_key(&self) -> &str {
        &self.tts_api_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("gemini_api_key", &"<redacted>")
            .field("tts_api_key", &"<redacted>")
            .finish()
    }
}
