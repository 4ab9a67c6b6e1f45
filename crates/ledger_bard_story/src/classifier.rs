//! Wallet persona classification.

use ledger_bard_core::{Persona, PersonaKind, TransferRecord};

/// Total volume above which a wallet is a whale.
const WHALE_VOLUME: f64 = 1_000_000.0;
/// Transfer count at which a wallet is a bot.
const BOT_COUNT: usize = 5;
/// Any single transfer below this marks a scavenger.
const SCAVENGER_VALUE: f64 = 100.0;

/// Classify a wallet from its recent transfers.
///
/// First match wins: no transfers is a ghost, then total volume, then
/// transfer count, then the smallest single amount. NaN amounts never cross
/// a threshold.
///
/// ```
/// use ledger_bard_core::{PersonaKind, TransferRecord};
/// use ledger_bard_story::classify;
///
/// assert_eq!(classify(&[]).kind(), PersonaKind::Ghost);
/// assert_eq!(classify(&[TransferRecord::new(5000.0)]).kind(), PersonaKind::Trader);
/// ```
pub fn classify(transfers: &[TransferRecord]) -> Persona {
    Persona::from(classify_kind(transfers))
}

fn classify_kind(transfers: &[TransferRecord]) -> PersonaKind {
    if transfers.is_empty() {
        return PersonaKind::Ghost;
    }

    let total_volume: f64 = transfers.iter().map(|t| *t.value()).sum();

    if total_volume > WHALE_VOLUME {
        PersonaKind::Whale
    } else if transfers.len() >= BOT_COUNT {
        PersonaKind::Bot
    } else if transfers.iter().any(|t| *t.value() < SCAVENGER_VALUE) {
        PersonaKind::Scavenger
    } else {
        PersonaKind::Trader
    }
}
