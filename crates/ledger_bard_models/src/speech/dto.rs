//! Wire types for `text:synthesize`.

use ledger_bard_core::VoiceProfile;
use serde::{Deserialize, Serialize};

use super::SpeechConfig;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: super::AudioEncoding,
    speaking_rate: f32,
    pitch: f32,
}

impl<'a> SynthesizeRequest<'a> {
    pub(crate) fn new(text: &'a str, voice: &'a VoiceProfile, config: &SpeechConfig) -> Self {
        Self {
            input: SynthesisInput { text },
            voice: VoiceSelection {
                language_code: voice.language_code(),
                name: voice.name(),
            },
            audio_config: AudioConfig {
                audio_encoding: *config.audio_encoding(),
                speaking_rate: *config.speaking_rate(),
                pitch: *config.pitch(),
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SynthesizeResponse {
    #[serde(default)]
    pub(crate) audio_content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let voice = VoiceProfile::new("en-US", "en-US-Neural2-J");
        let config = SpeechConfig::default();
        let body =
            serde_json::to_value(SynthesizeRequest::new("Rain on chrome.", &voice, &config))
                .unwrap();

        assert_eq!(body["input"]["text"], "Rain on chrome.");
        assert_eq!(body["voice"]["languageCode"], "en-US");
        assert_eq!(body["voice"]["name"], "en-US-Neural2-J");
        assert_eq!(body["audioConfig"]["audioEncoding"], "LINEAR16");
        assert!((body["audioConfig"]["speakingRate"].as_f64().unwrap() - 0.9).abs() < 1e-6);
        assert!((body["audioConfig"]["pitch"].as_f64().unwrap() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn missing_audio_content_is_none() {
        let response: SynthesizeResponse = serde_json::from_str("{}").unwrap();
        assert!(response.audio_content.is_none());
    }
}
