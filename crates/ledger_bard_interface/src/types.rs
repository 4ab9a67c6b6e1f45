//! Rendered story types.

use ledger_bard_core::{Genre, Persona, ScriptBlock, TransferRecord};
use serde::Serialize;

/// A narrated scene.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct SceneFrame {
    /// Display label, e.g. "SCENE 2"
    label: String,
    /// Scene text
    text: String,
    /// Narration audio, absent when synthesis failed or was skipped
    #[serde(skip)]
    narration: Option<Vec<u8>>,
}

impl SceneFrame {
    /// Create a scene frame.
    pub fn new(label: impl Into<String>, text: impl Into<String>, narration: Option<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            narration,
        }
    }
}

/// An illustration, shown beside the narration of the scene before it.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct IllustrationFrame {
    /// Display label, e.g. "IMAGE_PROMPT 2"
    label: String,
    /// Description as the generator wrote it
    raw_description: String,
    /// Prompt actually sent to the image service
    final_prompt: String,
    /// Image bytes, absent when generation failed or was skipped
    #[serde(skip)]
    image: Option<Vec<u8>>,
    /// Narration of the most recent scene, if any
    #[serde(skip)]
    narration: Option<Vec<u8>>,
}

impl IllustrationFrame {
    /// Create an illustration frame.
    pub fn new(
        label: impl Into<String>,
        raw_description: impl Into<String>,
        final_prompt: impl Into<String>,
        image: Option<Vec<u8>>,
        narration: Option<Vec<u8>>,
    ) -> Self {
        Self {
            label: label.into(),
            raw_description: raw_description.into(),
            final_prompt: final_prompt.into(),
            image,
            narration,
        }
    }

    /// Short caption: the first 50 characters of the raw description.
    ///
    /// ```
    /// use ledger_bard_interface::IllustrationFrame;
    ///
    /// let frame = IllustrationFrame::new("IMAGE_PROMPT 1", "a castle", "x", None, None);
    /// assert_eq!(frame.caption(), "Visual: a castle...");
    /// ```
    pub fn caption(&self) -> String {
        let head: String = self.raw_description.chars().take(50).collect();
        format!("Visual: {}...", head)
    }
}

/// One presented unit of a story.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Frame {
    /// Scene text with narration
    Scene(SceneFrame),
    /// Illustration with the preceding narration
    Illustration(IllustrationFrame),
}

/// The outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct Story {
    /// Wallet address the story was told for
    address: String,
    /// Genre the story was told in
    genre: Genre,
    /// Classified persona
    persona: Persona,
    /// Transfers the story is grounded in
    transfers: Vec<TransferRecord>,
    /// Raw generator output
    script: String,
    /// Parsed blocks in script order
    blocks: Vec<ScriptBlock>,
    /// Rendered frames in script order
    frames: Vec<Frame>,
}

impl Story {
    /// Assemble a finished story.
    pub fn new(
        address: impl Into<String>,
        genre: Genre,
        persona: Persona,
        transfers: Vec<TransferRecord>,
        script: impl Into<String>,
        blocks: Vec<ScriptBlock>,
        frames: Vec<Frame>,
    ) -> Self {
        Self {
            address: address.into(),
            genre,
            persona,
            transfers,
            script: script.into(),
            blocks,
            frames,
        }
    }

    /// True when the script contained no recognizable blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
