//! `prompt` command handler.

use ledger_bard::{
    Genre, LedgerBardConfig, LedgerBardResult, PromptVariant, StakesSource, TransferSource,
    TronGridClient, build_prompt, classify,
};

/// Print the prompt the model would receive for a wallet.
pub async fn show_prompt(
    config: &LedgerBardConfig,
    address: &str,
    genre: Genre,
    variant: Option<PromptVariant>,
    stakes_from: Option<StakesSource>,
) -> LedgerBardResult<()> {
    let mut options = config.story().prompt().clone();
    if let Some(variant) = variant {
        options = options.with_variant(variant);
    }
    if let Some(source) = stakes_from {
        options = options.with_stakes_source(source);
    }

    let source = TronGridClient::new(config.chain().clone())?;
    let transfers = source.fetch_transfers(address).await;
    let persona = classify(&transfers);

    println!("{}", build_prompt(&persona, &transfers, genre, &options)?);
    Ok(())
}
