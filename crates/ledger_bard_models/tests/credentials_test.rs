//! Credential loading tests.

use ledger_bard_models::Credentials;

fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |name| {
        vars.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}

#[test]
fn test_missing_gemini_key_is_an_error() {
    let err = Credentials::from_lookup(lookup(&[])).unwrap_err();
    assert!(err.message.contains("GEMINI_API_KEY"));
}

#[test]
fn test_blank_gemini_key_is_an_error() {
    assert!(Credentials::from_lookup(lookup(&[("GEMINI_API_KEY", "   ")])).is_err());
}

#[test]
fn test_tts_key_falls_back_to_gemini_key() {
    let creds = Credentials::from_lookup(lookup(&[("GEMINI_API_KEY", "g")])).unwrap();
    assert_eq!(creds.gemini_api_key(), "g");
    assert_eq!(creds.tts_api_key(), "g");
}

#[test]
fn test_separate_tts_key() {
    let creds = Credentials::from_lookup(lookup(&[
        ("GEMINI_API_KEY", "g"),
        ("GOOGLE_TTS_API_KEY", "t"),
    ]))
    .unwrap();
    assert_eq!(creds.tts_api_key(), "t");
}

#[test]
fn test_debug_output_redacts_keys() {
    let creds = Credentials::new("secret-gemini", Some("secret-tts".to_string()));
    let debug = format!("{:?}", creds);
    assert!(!debug.contains("secret"));
    assert!(debug.contains("redacted"));
}
