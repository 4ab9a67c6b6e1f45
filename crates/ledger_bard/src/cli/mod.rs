//! Command-line interface module.
//!
//! CLI structure and command handlers for the `ledger-bard` binary.

mod commands;
mod parse;
mod persona;
mod prompt;
mod renderer;
mod tell;

pub use commands::{Cli, Commands};
pub use parse::parse_script;
pub use persona::show_persona;
pub use prompt::show_prompt;
pub use tell::{TellOptions, tell_story};
