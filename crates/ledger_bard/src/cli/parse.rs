//! `parse` command handler.

use std::path::Path;

use ledger_bard::{JsonError, LedgerBardResult, StoryError, StoryErrorKind, parse};

/// Parse a saved script file and print the blocks as JSON.
pub fn parse_script(path: &Path) -> LedgerBardResult<()> {
    tracing::info!(path = %path.display(), "Parsing script");

    let raw = std::fs::read_to_string(path).map_err(|e| {
        StoryError::new(StoryErrorKind::ScriptRead(format!("{}: {}", path.display(), e)))
    })?;

    let blocks = parse(&raw);
    if blocks.is_empty() {
        tracing::warn!("No SCENE or IMAGE_PROMPT lines found");
    }

    let json = serde_json::to_string_pretty(&blocks)
        .map_err(|e| JsonError::new(format!("Failed to serialize blocks: {}", e)))?;
    println!("{}", json);
    Ok(())
}
