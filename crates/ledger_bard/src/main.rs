//! Ledger Bard CLI binary.
//!
//! - Tell a wallet's story with narration and illustrations
//! - Classify a wallet or preview the model prompt
//! - Parse a saved model response

use clap::Parser;
use ledger_bard::{Credentials, LedgerBardConfig, LoggingConfig, init_logging};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, TellOptions, parse_script, show_persona, show_prompt, tell_story};

    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    init_logging(&LoggingConfig::new(log_level).with_json_logs(cli.json_logs))?;

    let config = match &cli.config {
        Some(path) => LedgerBardConfig::from_file(path)?,
        None => LedgerBardConfig::load()?,
    };
    let chain = config.chain().clone().with_api_key_from_env();
    let config = config.with_chain(chain);

    match cli.command {
        Commands::Tell {
            address,
            genre,
            variant,
            stakes_from,
            output_dir,
            no_media,
        } => {
            // Fatal before any network call
            let credentials = Credentials::from_env()?;
            let options = TellOptions {
                address,
                genre,
                variant,
                stakes_from,
                output_dir,
                no_media,
            };
            tell_story(&config, &credentials, options).await?;
        }

        Commands::Persona { address } => {
            show_persona(&config, &address).await?;
        }

        Commands::Prompt {
            address,
            genre,
            variant,
            stakes_from,
        } => {
            show_prompt(&config, &address, genre, variant, stakes_from).await?;
        }

        Commands::Parse { file } => {
            parse_script(&file)?;
        }
    }

    Ok(())
}
