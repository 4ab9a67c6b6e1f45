use ledger_bard_chain::{ChainConfig, FallbackMode, TRON_API_KEY, TronGridClient};
use ledger_bard_error::ChainErrorKind;
use ledger_bard_interface::TransferSource;

// Port 9 (discard) is closed on loopback, so requests fail fast without
// leaving the machine.
fn unreachable_config() -> ChainConfig {
    ChainConfig::default()
        .with_base_url("http://127.0.0.1:9")
        .with_timeout_secs(2)
}

#[tokio::test]
async fn test_blank_address_is_rejected_before_any_request() -> anyhow::Result<()> {
    let client = TronGridClient::new(unreachable_config())?;

    let err = client.try_fetch("   ").await.unwrap_err();
    assert!(matches!(err.kind, ChainErrorKind::InvalidAddress(_)));
    Ok(())
}

#[tokio::test]
async fn test_failed_fetch_degrades_to_empty() -> anyhow::Result<()> {
    let client = TronGridClient::new(unreachable_config())?;

    let transfers = client.fetch_transfers("TXYZopYRdj2D9XRtbG411XZZ3kM5VkAeBf").await;
    assert!(transfers.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_failed_fetch_degrades_to_simulated_history() -> anyhow::Result<()> {
    let config = unreachable_config().with_fallback(FallbackMode::Simulated);
    let client = TronGridClient::new(config)?;

    let transfers = client.fetch_transfers("not an address").await;
    assert_eq!(transfers, TronGridClient::simulated_transfers());
    Ok(())
}

#[tokio::test]
async fn test_simulated_history_respects_limit() -> anyhow::Result<()> {
    let config = unreachable_config()
        .with_fallback(FallbackMode::Simulated)
        .with_limit(1);
    let client = TronGridClient::new(config)?;

    let transfers = client.fetch_transfers("").await;
    assert_eq!(transfers.len(), 1);
    Ok(())
}

#[test]
fn test_default_config_matches_trongrid() {
    let config = ChainConfig::default();
    assert_eq!(config.base_url(), "https://api.trongrid.io");
    assert_eq!(*config.limit(), 3);
    assert_eq!(*config.fallback(), FallbackMode::Empty);
    assert!(config.api_key().is_none());
}

#[test]
fn test_api_key_comes_from_environment_lookup() {
    let config = ChainConfig::default().with_api_key_from(|name| {
        (name == TRON_API_KEY).then(|| "tron-key".to_string())
    });
    assert_eq!(config.api_key().as_deref(), Some("tron-key"));
}

#[test]
fn test_blank_api_key_is_ignored() {
    let config = ChainConfig::default().with_api_key_from(|_| Some("  ".to_string()));
    assert!(config.api_key().is_none());
}
