//! `persona` command handler.

use chrono::DateTime;
use ledger_bard::{LedgerBardConfig, LedgerBardResult, TransferSource, TronGridClient, classify};

/// Fetch a wallet's transfers and print its persona.
pub async fn show_persona(config: &LedgerBardConfig, address: &str) -> LedgerBardResult<()> {
    let source = TronGridClient::new(config.chain().clone())?;
    let transfers = source.fetch_transfers(address).await;
    let persona = classify(&transfers);

    println!("{}", persona);
    println!("{}", persona.description());
    println!();
    println!("Recent transfers ({}):", transfers.len());
    for transfer in &transfers {
        let when = transfer
            .block_timestamp()
            .and_then(DateTime::from_timestamp_millis)
            .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<20} {:>16} {:<6} {}",
            when,
            transfer.value(),
            transfer.token_symbol().as_deref().unwrap_or("?"),
            transfer.transaction_id().as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
