//! Parsed story script blocks.

use serde::{Deserialize, Serialize};

/// One unit of parsed generator output.
///
/// Blocks keep the order in which they appeared in the generator's text, so a
/// scene and the image prompt written for it stay adjacent.
///
/// `label` is a display label (e.g. "SCENE 1"), never an integer index.
///
/// # Examples
///
/// ```
/// use ledger_bard_core::ScriptBlock;
///
/// let block = ScriptBlock::scene("SCENE 1", "Rain hammers the chrome.");
/// assert!(block.is_scene());
/// assert_eq!(block.label(), "SCENE 1");
/// assert_eq!(block.body(), "Rain hammers the chrome.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptBlock {
    /// Narrative text destined for display and narration
    Scene {
        /// Display label
        label: String,
        /// Scene text
        text: String,
    },
    /// Visual description destined for image synthesis
    ImagePrompt {
        /// Display label
        label: String,
        /// Description exactly as the generator wrote it
        raw_description: String,
    },
}

impl ScriptBlock {
    /// Build a scene block.
    pub fn scene(label: impl Into<String>, text: impl Into<String>) -> Self {
        ScriptBlock::Scene {
            label: label.into(),
            text: text.into(),
        }
    }

    /// Build an image prompt block.
    pub fn image_prompt(label: impl Into<String>, raw_description: impl Into<String>) -> Self {
        ScriptBlock::ImagePrompt {
            label: label.into(),
            raw_description: raw_description.into(),
        }
    }

    /// Display label of either variant.
    pub fn label(&self) -> &str {
        match self {
            ScriptBlock::Scene { label, .. } | ScriptBlock::ImagePrompt { label, .. } => label,
        }
    }

    /// Scene text or raw image description.
    pub fn body(&self) -> &str {
        match self {
            ScriptBlock::Scene { text, .. } => text,
            ScriptBlock::ImagePrompt {
                raw_description, ..
            } => raw_description,
        }
    }

    /// True for scene blocks.
    pub fn is_scene(&self) -> bool {
        matches!(self, ScriptBlock::Scene { .. })
    }
}
