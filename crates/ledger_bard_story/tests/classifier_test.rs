use ledger_bard_core::{PersonaKind, TransferRecord};
use ledger_bard_story::classify;

fn records(values: &[f64]) -> Vec<TransferRecord> {
    values.iter().copied().map(TransferRecord::new).collect()
}

#[test]
fn test_empty_history_is_a_ghost() {
    let persona = classify(&[]);
    assert_eq!(persona.name(), "The Ghost");
    assert_eq!(
        persona.description(),
        "A mysterious, empty void where echoes of the past linger. Silent. Dormant."
    );
}

#[test]
fn test_large_volume_is_a_whale_regardless_of_count() {
    assert_eq!(classify(&records(&[2_000_000.0])).kind(), PersonaKind::Whale);
    assert_eq!(
        classify(&records(&[300_000.0; 8])).kind(),
        PersonaKind::Whale
    );
}

#[test]
fn test_five_small_transfers_is_a_bot() {
    assert_eq!(classify(&records(&[50.0; 5])).name(), "The Bot");
}

#[test]
fn test_single_small_transfer_is_a_scavenger() {
    assert_eq!(classify(&records(&[50.0])).name(), "The Scavenger");
}

#[test]
fn test_single_mid_transfer_is_a_trader() {
    assert_eq!(classify(&records(&[5000.0])).name(), "The Trader");
}

#[test]
fn test_missing_amounts_count_as_zero() {
    // A record with no amount contributes 0 and is below 100.
    let transfers = vec![TransferRecord::default(), TransferRecord::new(500.0)];
    assert_eq!(classify(&transfers).kind(), PersonaKind::Scavenger);
}

#[test]
fn test_classification_is_idempotent() {
    let transfers = records(&[120.0, 15_000.0, 80.0]);
    assert_eq!(classify(&transfers), classify(&transfers));
}

#[test]
fn test_descriptions_are_fixed_per_persona() {
    assert_eq!(
        classify(&records(&[2_000_000.0])).description(),
        "Majestic, high-stakes, slow-moving but impactful. Themes of empire, luxury, and power."
    );
    assert_eq!(
        classify(&records(&[1.0; 6])).description(),
        "Frantic, mechanical, lightning-fast. Themes of circuitry, data overload, and neon."
    );
    assert_eq!(
        classify(&records(&[3.0])).description(),
        "Gritty, survivalist, scraping by in the Rain District. Themes of rust and desperation."
    );
    assert_eq!(
        classify(&records(&[300.0])).description(),
        "Calculated, risk-taking, sharp. Themes of markets, charts, and shadows."
    );
}
