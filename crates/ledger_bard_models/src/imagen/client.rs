use std::time::{Duration, Instant};

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::{debug, instrument};

use ledger_bard_error::{HttpError, LedgerBardResult, MediaError, MediaErrorKind};
use ledger_bard_interface::ImageGenerator;

use super::ImageConfig;
use super::dto::{PredictRequest, PredictResponse};
use crate::{Credentials, ServiceMetrics, classify_error};

const SERVICE: &str = "imagen";

/// Imagen client for scene illustrations.
#[derive(Clone)]
pub struct ImagenClient {
    client: reqwest::Client,
    api_key: String,
    config: ImageConfig,
}

impl std::fmt::Debug for ImagenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagenClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ImagenClient {
    /// Create a client using the Gemini API key.
    #[instrument(name = "imagen_client_new", skip(credentials), fields(model = %config.model()))]
    pub fn new(credentials: &Credentials, config: ImageConfig) -> LedgerBardResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build image client: {}", e)))?;

        Ok(Self {
            client,
            api_key: credentials.gemini_api_key().to_string(),
            config,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &ImageConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:predict",
            self.config.base_url().trim_end_matches('/'),
            self.config.model()
        )
    }

    #[instrument(skip(self, prompt), fields(model = %self.config.model(), prompt_len = prompt.len()))]
    async fn predict(&self, prompt: &str) -> Result<Vec<u8>, MediaError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&PredictRequest::new(prompt, &self.config))
            .send()
            .await
            .map_err(|e| MediaError::new(MediaErrorKind::ImageRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MediaError::new(MediaErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| MediaError::new(MediaErrorKind::ImageRequest(e.to_string())))?;

        let prediction = body
            .predictions
            .into_iter()
            .next()
            .ok_or_else(|| MediaError::new(MediaErrorKind::NoImage("no predictions".into())))?;

        let encoded = prediction.bytes_base64_encoded.ok_or_else(|| {
            let reason = prediction
                .rai_filtered_reason
                .unwrap_or_else(|| "prediction carried no image bytes".to_string());
            MediaError::new(MediaErrorKind::NoImage(reason))
        })?;

        let bytes = STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| MediaError::new(MediaErrorKind::Base64Decode(e.to_string())))?;

        debug!(bytes = bytes.len(), "Image received");
        Ok(bytes)
    }
}

#[async_trait]
impl ImageGenerator for ImagenClient {
    async fn generate(&self, prompt: &str) -> LedgerBardResult<Vec<u8>> {
        let metrics = ServiceMetrics::get();
        let start = Instant::now();

        match self.predict(prompt).await {
            Ok(bytes) => {
                metrics.record_request(SERVICE, self.config.model(), start.elapsed().as_secs_f64());
                metrics.record_media(SERVICE, bytes.len());
                Ok(bytes)
            }
            Err(e) => {
                metrics.record_error(SERVICE, self.config.model(), classify_error(&e));
                Err(e.into())
            }
        }
    }
}
