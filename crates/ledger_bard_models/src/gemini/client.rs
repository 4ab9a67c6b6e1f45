use std::time::Instant;

use async_trait::async_trait;
use gemini_rust::{Gemini, client::Model};
use tracing::{debug, instrument};

use ledger_bard_error::{GeminiError, GeminiErrorKind, LedgerBardResult};
use ledger_bard_interface::NarrativeGenerator;

use super::{GeminiResult, TextModelConfig};
use crate::{Credentials, ServiceMetrics, classify_error};

const SERVICE: &str = "gemini";

/// Gemini client bound to one text model.
#[derive(Clone)]
pub struct GeminiClient {
    client: Gemini,
    config: TextModelConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client for the configured model.
    ///
    /// # Errors
    ///
    /// Returns a [`GeminiError`] if the SDK rejects the key or model name.
    #[instrument(name = "gemini_client_new", skip(credentials), fields(model = %config.model()))]
    pub fn new(credentials: &Credentials, config: TextModelConfig) -> LedgerBardResult<Self> {
        let model = Self::model_name_to_enum(config.model());
        let client = Gemini::with_model(credentials.gemini_api_key(), model)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self { client, config })
    }

    /// Convert a model name to the SDK's model enum.
    ///
    /// - "gemini-2.5-flash" → Model::Gemini25Flash
    /// - "gemini-2.0-flash-lite-001" → Model::Custom("models/gemini-2.0-flash-lite-001")
    /// - "models/gemini-2.0-flash" → Model::Custom("models/gemini-2.0-flash") (preserved)
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other if other.starts_with("models/") => Model::Custom(other.to_string()),
            other => Model::Custom(format!("models/{}", other)),
        }
    }

    #[instrument(skip(self, prompt), fields(model = %self.config.model(), prompt_len = prompt.len()))]
    async fn generate_internal(&self, prompt: &str) -> GeminiResult<String> {
        let mut builder = self.client.generate_content().with_user_message(prompt);

        if let Some(system) = self.config.system_prompt() {
            builder = builder.with_system_prompt(system);
        }
        if let Some(temp) = self.config.temperature() {
            builder = builder.with_temperature(*temp);
        }
        if let Some(max_tokens) = self.config.max_output_tokens() {
            builder = builder.with_max_output_tokens(*max_tokens as i32);
        }

        let response = builder.execute().await.map_err(Self::parse_gemini_error)?;

        let text = response.text();
        if text.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
        }

        debug!(response_len = text.len(), "Gemini script received");
        Ok(text)
    }

    /// Parse a gemini_rust error into a GeminiError, keeping any HTTP status.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
        let err_msg = err.to_string();

        // "bad response from server; code 503; description: ..."
        match extract_status_code(&err_msg) {
            Some(status_code) => GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message: err_msg,
            }),
            None => GeminiError::new(GeminiErrorKind::ApiRequest(err_msg)),
        }
    }
}

/// Extract the numeric status from strings like "...; code 503; ...".
pub(crate) fn extract_status_code(error_msg: &str) -> Option<u16> {
    let code_start = error_msg.find("code ")?;
    let code_str = &error_msg[code_start + 5..];
    let end = code_str
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(code_str.len());
    code_str[..end].parse().ok()
}

#[async_trait]
impl NarrativeGenerator for GeminiClient {
    async fn generate_narrative(&self, prompt: &str) -> LedgerBardResult<String> {
        let metrics = ServiceMetrics::get();
        let start = Instant::now();

        match self.generate_internal(prompt).await {
            Ok(text) => {
                metrics.record_request(SERVICE, self.config.model(), start.elapsed().as_secs_f64());
                Ok(text)
            }
            Err(e) => {
                metrics.record_error(SERVICE, self.config.model(), classify_error(&e));
                Err(e.into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        SERVICE
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_status_from_sdk_message() {
        assert_eq!(
            extract_status_code("bad response from server; code 503; description: overloaded"),
            Some(503)
        );
        assert_eq!(extract_status_code("code 429"), Some(429));
        assert_eq!(extract_status_code("connection reset"), None);
    }

    #[test]
    fn status_errors_become_http_errors() {
        let err = GeminiClient::parse_gemini_error("bad response from server; code 401; nope");
        assert!(matches!(
            err.kind,
            GeminiErrorKind::HttpError { status_code: 401, .. }
        ));

        let err = GeminiClient::parse_gemini_error("dns failure");
        assert!(matches!(err.kind, GeminiErrorKind::ApiRequest(_)));
    }

    #[test]
    fn model_names_gain_prefix() {
        match GeminiClient::model_name_to_enum("gemini-2.0-flash-lite-001") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash-lite-001"),
            _ => panic!("expected custom model"),
        }
        match GeminiClient::model_name_to_enum("models/gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            _ => panic!("expected custom model"),
        }
    }
}
