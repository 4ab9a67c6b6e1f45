//! Metrics for generative service calls.
//!
//! Records request counts, failures and latency for the text, image and
//! speech clients through the OpenTelemetry global meter. Without an
//! installed exporter the instruments are no-ops.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<ServiceMetrics> = OnceLock::new();

/// Metrics for generative service interactions.
///
/// Labeled with the service ("gemini", "imagen", "tts") and model or voice.
#[derive(Clone)]
pub struct ServiceMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Total service requests
    pub requests: Counter<u64>,
    /// Failed service requests
    pub errors: Counter<u64>,
    /// Service call duration in seconds
    pub duration: Histogram<f64>,
    /// Bytes of media returned
    pub media_bytes: Counter<u64>,
}

impl ServiceMetrics {
    fn init() -> Self {
        let meter = global::meter("ledger_bard_models");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("genai.requests")
                .with_description("Total generative service requests")
                .build(),
            errors: meter
                .u64_counter("genai.errors")
                .with_description("Failed generative service requests")
                .build(),
            duration: meter
                .f64_histogram("genai.duration")
                .with_unit("seconds")
                .with_description("Generative service call duration")
                .build(),
            media_bytes: meter
                .u64_counter("genai.media_bytes")
                .with_description("Bytes of image or audio returned")
                .build(),
        }
    }

    /// Get the global metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful request.
    pub fn record_request(&self, service: &str, model: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("service", service.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed request.
    pub fn record_error(&self, service: &str, model: &str, error_type: &str) {
        let labels = &[
            KeyValue::new("service", service.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", error_type.to_string()),
        ];
        self.errors.add(1, labels);
    }

    /// Record the size of returned media.
    pub fn record_media(&self, service: &str, bytes: usize) {
        let labels = &[KeyValue::new("service", service.to_string())];
        self.media_bytes.add(bytes as u64, labels);
    }
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}

/// Classify error type for metrics labeling.
///
/// Returns one of: "rate_limit", "auth", "network", "timeout", "invalid_request", "unknown"
pub fn classify_error(error: &dyn std::error::Error) -> &'static str {
    let error_str = error.to_string().to_lowercase();

    if error_str.contains("rate limit") || error_str.contains("429") {
        "rate_limit"
    } else if error_str.contains("auth") || error_str.contains("401") || error_str.contains("403")
    {
        "auth"
    } else if error_str.contains("timeout") || error_str.contains("timed out") {
        "timeout"
    } else if error_str.contains("network")
        || error_str.contains("connection")
        || error_str.contains("dns")
    {
        "network"
    } else if error_str.contains("400") || error_str.contains("invalid") {
        "invalid_request"
    } else {
        "unknown"
    }
}
