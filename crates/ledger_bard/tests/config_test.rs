//! Configuration layering tests.

use ledger_bard::{
    AudioEncoding, FallbackMode, Genre, LedgerBardConfig, PersonGeneration, PromptVariant,
    SafetyFilterLevel, StakesSource,
};

#[test]
fn test_bundled_defaults() -> anyhow::Result<()> {
    let config = LedgerBardConfig::from_toml_str("")?;

    assert_eq!(config.chain().base_url(), "https://api.trongrid.io");
    assert_eq!(*config.chain().limit(), 3);
    assert_eq!(*config.chain().timeout_secs(), 10);
    assert_eq!(*config.chain().fallback(), FallbackMode::Empty);

    assert_eq!(config.story().model().model(), "gemini-2.0-flash-lite-001");
    assert_eq!(*config.story().prompt().variant(), PromptVariant::Stakes);
    assert_eq!(*config.story().prompt().stakes_source(), StakesSource::MostRecent);
    assert_eq!(*config.story().prompt().scene_count(), 3);

    assert_eq!(config.image().model(), "imagen-4.0-generate-001");
    assert_eq!(config.image().aspect_ratio(), "16:9");
    assert_eq!(*config.image().safety_filter_level(), SafetyFilterLevel::BlockSome);
    assert_eq!(*config.image().person_generation(), PersonGeneration::AllowAdult);

    assert_eq!(*config.speech().audio_encoding(), AudioEncoding::Linear16);
    assert!((config.speech().speaking_rate() - 0.90).abs() < 1e-6);
    assert!((config.speech().pitch() - 2.0).abs() < 1e-6);
    Ok(())
}

#[test]
fn test_bundled_defaults_match_code_defaults() -> anyhow::Result<()> {
    let loaded = LedgerBardConfig::from_toml_str("")?;
    let built = LedgerBardConfig::default();

    assert_eq!(loaded.chain(), built.chain());
    assert_eq!(loaded.story(), built.story());
    assert_eq!(loaded.image(), built.image());
    assert_eq!(loaded.speech(), built.speech());
    Ok(())
}

#[test]
fn test_overrides_replace_only_named_keys() -> anyhow::Result<()> {
    let config = LedgerBardConfig::from_toml_str(
        r#"
        [chain]
        limit = 10
        fallback = "simulated"

        [story]
        temperature = 0.7
        variant = "raw-transfers"
        stakes_source = "largest"

        [image]
        safety_filter_level = "block_few"
        "#,
    )?;

    assert_eq!(*config.chain().limit(), 10);
    assert_eq!(*config.chain().timeout_secs(), 10);
    assert_eq!(*config.chain().fallback(), FallbackMode::Simulated);

    assert_eq!(*config.story().model().temperature(), Some(0.7));
    assert_eq!(config.story().model().model(), "gemini-2.0-flash-lite-001");
    assert_eq!(*config.story().prompt().variant(), PromptVariant::RawTransfers);
    assert_eq!(*config.story().prompt().stakes_source(), StakesSource::Largest);

    assert_eq!(*config.image().safety_filter_level(), SafetyFilterLevel::BlockFew);
    assert_eq!(config.image().aspect_ratio(), "16:9");
    Ok(())
}

#[test]
fn test_voice_overrides_keep_standard_table() -> anyhow::Result<()> {
    let config = LedgerBardConfig::from_toml_str(
        r#"
        [speech.voices.dark-fantasy]
        language_code = "en-GB"
        name = "en-GB-Neural2-B"

        [speech.voices.80s-anime]
        language_code = "ja-JP"
        name = "ja-JP-Neural2-B"
        "#,
    )?;

    let table = config.speech().voice_table();
    assert_eq!(table.voice_for(Genre::DarkFantasy).name(), "en-GB-Neural2-B");
    assert_eq!(table.voice_for(Genre::EightiesAnime).language_code(), "ja-JP");
    assert_eq!(table.voice_for(Genre::CyberpunkNoir).name(), "en-US-Neural2-J");
    Ok(())
}

#[test]
fn test_invalid_values_are_config_errors() {
    let err = LedgerBardConfig::from_toml_str(
        r#"
        [story]
        variant = "interpretive-dance"
        "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("configuration"));
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(LedgerBardConfig::from_file("/nonexistent/ledger_bard.toml").is_err());
}

#[test]
fn test_stakes_thresholds_from_config() -> anyhow::Result<()> {
    let config = LedgerBardConfig::from_toml_str(
        r#"
        [story.stakes_thresholds]
        network = 5000.0
        "#,
    )?;

    let thresholds = config.story().prompt().stakes_thresholds();
    assert_eq!(*thresholds.network(), 5000.0);
    assert_eq!(*thresholds.survival(), 100.0);
    Ok(())
}

#[test]
fn test_chain_api_key_is_not_read_from_files() -> anyhow::Result<()> {
    let config = LedgerBardConfig::from_toml_str(
        r#"
        [chain]
        api_key = "from-file"
        "#,
    )?;
    assert!(config.chain().api_key().is_none());
    Ok(())
}
