use std::time::{Duration, Instant};

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::{debug, instrument};

use ledger_bard_core::{Genre, VoiceTable};
use ledger_bard_error::{HttpError, LedgerBardResult, MediaError, MediaErrorKind};
use ledger_bard_interface::SpeechSynthesizer;

use super::SpeechConfig;
use super::dto::{SynthesizeRequest, SynthesizeResponse};
use crate::{Credentials, ServiceMetrics, classify_error};

const SERVICE: &str = "tts";

/// Cloud Text-to-Speech client with a genre-keyed narrator table.
#[derive(Clone)]
pub struct TextToSpeechClient {
    client: reqwest::Client,
    api_key: String,
    voices: VoiceTable,
    config: SpeechConfig,
}

impl std::fmt::Debug for TextToSpeechClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextToSpeechClient")
            .field("voices", &self.voices)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TextToSpeechClient {
    /// Create a client using the speech API key.
    #[instrument(name = "tts_client_new", skip_all)]
    pub fn new(credentials: &Credentials, config: SpeechConfig) -> LedgerBardResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build speech client: {}", e)))?;

        Ok(Self {
            client,
            api_key: credentials.tts_api_key().to_string(),
            voices: config.voice_table(),
            config,
        })
    }

    /// Narrator table in effect.
    pub fn voices(&self) -> &VoiceTable {
        &self.voices
    }

    /// Active configuration.
    pub fn config(&self) -> &SpeechConfig {
        &self.config
    }

    #[instrument(skip(self, text), fields(genre = %genre, text_len = text.len()))]
    async fn synthesize_internal(&self, text: &str, genre: Genre) -> Result<Vec<u8>, MediaError> {
        let voice = self.voices.voice_for(genre);
        let url = format!(
            "{}/v1/text:synthesize",
            self.config.base_url().trim_end_matches('/')
        );

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&SynthesizeRequest::new(text, voice, &self.config))
            .send()
            .await
            .map_err(|e| MediaError::new(MediaErrorKind::SpeechRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MediaError::new(MediaErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| MediaError::new(MediaErrorKind::SpeechRequest(e.to_string())))?;

        let encoded = body
            .audio_content
            .filter(|content| !content.is_empty())
            .ok_or_else(|| MediaError::new(MediaErrorKind::NoAudio))?;

        let audio = STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| MediaError::new(MediaErrorKind::Base64Decode(e.to_string())))?;

        debug!(voice = %voice.name(), bytes = audio.len(), "Narration received");
        Ok(audio)
    }
}

#[async_trait]
impl SpeechSynthesizer for TextToSpeechClient {
    async fn synthesize(&self, text: &str, genre: Genre) -> LedgerBardResult<Vec<u8>> {
        let metrics = ServiceMetrics::get();
        let voice = self.voices.voice_for(genre).name().clone();
        let start = Instant::now();

        match self.synthesize_internal(text, genre).await {
            Ok(audio) => {
                metrics.record_request(SERVICE, &voice, start.elapsed().as_secs_f64());
                metrics.record_media(SERVICE, audio.len());
                Ok(audio)
            }
            Err(e) => {
                metrics.record_error(SERVICE, &voice, classify_error(&e));
                Err(e.into())
            }
        }
    }
}
