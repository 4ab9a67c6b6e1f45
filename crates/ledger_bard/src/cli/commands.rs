//! CLI command definitions.

use clap::{Parser, Subcommand};
use ledger_bard::{Genre, PromptVariant, StakesSource};
use std::path::PathBuf;

/// Ledger Bard - illustrated, narrated stories from TRON wallet activity
#[derive(Parser, Debug)]
#[command(name = "ledger-bard")]
#[command(about = "Illustrated, narrated stories from TRON wallet activity", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tell the story of a wallet
    Tell {
        /// TRON wallet address
        #[arg(long)]
        address: String,

        /// Story genre (e.g. "cyberpunk-noir", "Dark Fantasy")
        #[arg(long, default_value = "cyberpunk-noir")]
        genre: Genre,

        /// How transfer data is shown to the model (stakes, raw-transfers)
        #[arg(long)]
        variant: Option<PromptVariant>,

        /// Which transfer sets the stakes (most-recent, largest)
        #[arg(long)]
        stakes_from: Option<StakesSource>,

        /// Write narration and images into this directory
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Skip narration and illustration
        #[arg(long)]
        no_media: bool,
    },

    /// Classify a wallet without telling its story
    Persona {
        /// TRON wallet address
        #[arg(long)]
        address: String,
    },

    /// Print the prompt that would be sent to the model
    Prompt {
        /// TRON wallet address
        #[arg(long)]
        address: String,

        /// Story genre
        #[arg(long, default_value = "cyberpunk-noir")]
        genre: Genre,

        /// How transfer data is shown to the model
        #[arg(long)]
        variant: Option<PromptVariant>,

        /// Which transfer sets the stakes
        #[arg(long)]
        stakes_from: Option<StakesSource>,
    },

    /// Parse a saved model response and print its blocks as JSON
    Parse {
        /// File containing the raw script
        file: PathBuf,
    },
}
