//! Wire types for the Imagen `:predict` endpoint.

use serde::{Deserialize, Serialize};

use super::ImageConfig;

#[derive(Debug, Serialize)]
pub(crate) struct PredictRequest<'a> {
    instances: [Instance<'a>; 1],
    parameters: Parameters<'a>,
}

#[derive(Debug, Serialize)]
struct Instance<'a> {
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters<'a> {
    sample_count: u32,
    aspect_ratio: &'a str,
    safety_setting: &'static str,
    person_generation: String,
    output_options: OutputOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputOptions {
    mime_type: &'static str,
}

impl<'a> PredictRequest<'a> {
    /// One PNG image for `prompt`.
    pub(crate) fn new(prompt: &'a str, config: &'a ImageConfig) -> Self {
        Self {
            instances: [Instance { prompt }],
            parameters: Parameters {
                sample_count: 1,
                aspect_ratio: config.aspect_ratio(),
                safety_setting: config.safety_filter_level().api_value(),
                person_generation: config.person_generation().to_string(),
                output_options: OutputOptions {
                    mime_type: "image/png",
                },
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PredictResponse {
    #[serde(default)]
    pub(crate) predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Prediction {
    #[serde(default)]
    pub(crate) bytes_base64_encoded: Option<String>,
    #[serde(default)]
    pub(crate) rai_filtered_reason: Option<String>,
}
