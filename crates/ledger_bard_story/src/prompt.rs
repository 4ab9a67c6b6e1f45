//! Script prompt assembly.

use ledger_bard_core::{Genre, Persona, Stakes, StakesThresholds, TransferRecord};
use ledger_bard_error::{StoryError, StoryErrorKind};
use serde::{Deserialize, Serialize};

/// How the transfer data is presented to the generator.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PromptVariant {
    /// Amount, stakes and object of desire derived from one transfer
    #[default]
    #[display("stakes")]
    Stakes,
    /// The transfer list verbatim as JSON
    #[display("raw-transfers")]
    RawTransfers,
}

/// Which transfer drives the stakes.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum StakesSource {
    /// The first transfer, which the chain reports as the newest
    #[default]
    #[display("most-recent")]
    MostRecent,
    /// The transfer with the highest value
    #[display("largest")]
    Largest,
}

fn default_scene_count() -> usize {
    3
}

/// Prompt shape, the prompt half of the `[story]` table.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct PromptOptions {
    /// Data presentation
    #[serde(default)]
    variant: PromptVariant,
    /// Transfer that sets the stakes
    #[serde(default)]
    stakes_source: StakesSource,
    /// Number of scenes requested, at least one
    #[serde(default = "default_scene_count")]
    scene_count: usize,
    /// Tier boundaries for the stakes variant
    #[serde(default)]
    stakes_thresholds: StakesThresholds,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            variant: PromptVariant::default(),
            stakes_source: StakesSource::default(),
            scene_count: default_scene_count(),
            stakes_thresholds: StakesThresholds::default(),
        }
    }
}

/// Amount of the transfer chosen by `source`, `0.0` when there are none.
///
/// ```
/// use ledger_bard_core::TransferRecord;
/// use ledger_bard_story::{StakesSource, selected_amount};
///
/// let transfers = [TransferRecord::new(40.0), TransferRecord::new(9000.0)];
/// assert_eq!(selected_amount(&transfers, StakesSource::MostRecent), 40.0);
/// assert_eq!(selected_amount(&transfers, StakesSource::Largest), 9000.0);
/// assert_eq!(selected_amount(&[], StakesSource::Largest), 0.0);
/// ```
pub fn selected_amount(transfers: &[TransferRecord], source: StakesSource) -> f64 {
    match source {
        StakesSource::MostRecent => transfers.first().map(|t| *t.value()),
        StakesSource::Largest => transfers.iter().map(|t| *t.value()).reduce(f64::max),
    }
    .unwrap_or(0.0)
}

/// Beat for each scene: establishing, turning point, resolution.
fn beats(scene_count: usize) -> Vec<(&'static str, &'static str, &'static str)> {
    const OPENING: (&str, &str, &str) = (
        "THE ATMOSPHERE",
        "Set the scene. Where is the character and what are they waiting for? Describe the environment in intense detail and establish the persona.",
        "Wide angle establishing shot. Focus on lighting, atmosphere and the scale of the world.",
    );
    const CLIMAX: (&str, &str, &str) = (
        "THE TRANSACTION",
        "The exchange happens. Verification. Tension peaks. The exact amount must appear on a screen or interface.",
        "Macro close-up of hands exchanging a drive or device, the amount glowing on a screen. High contrast, shallow depth of field.",
    );
    const ENDING: (&str, &str, &str) = (
        "THE CONSEQUENCE",
        "The immediate aftermath. The character escapes or disappears. A definitive ending to this chapter.",
        "Low angle. The character walking away into the distance, \"TRANSACTION COMPLETE\" floating in the air as a hologram.",
    );

    match scene_count {
        0 | 1 => vec![CLIMAX],
        2 => vec![OPENING, ENDING],
        n => std::iter::once(OPENING)
            .chain(std::iter::repeat_n(CLIMAX, n - 2))
            .chain(std::iter::once(ENDING))
            .collect(),
    }
}

/// Assemble the script request for the generator.
///
/// The prompt names the genre, the persona and its description, grounds the
/// plot in the transfer data and asks for `SCENE <n>:` and `IMAGE_PROMPT <n>:`
/// lines. The same inputs always give the same prompt.
///
/// # Errors
///
/// Returns [`StoryErrorKind::PromptAssembly`] if the transfers cannot be
/// serialized for the raw variant.
pub fn build_prompt(
    persona: &Persona,
    transfers: &[TransferRecord],
    genre: Genre,
    options: &PromptOptions,
) -> Result<String, StoryError> {
    let mut prompt = String::new();
    let amount = selected_amount(transfers, *options.stakes_source());

    prompt.push_str(
        "You are an award-winning novelist and film director known for gritty, visceral detail.\n\n",
    );
    prompt.push_str("THE SETTING:\n");
    prompt.push_str(&format!(
        "Genre: {} (strictly adhere to this visual style).\n",
        genre
    ));
    prompt.push_str(&format!(
        "Character function: {} ({}).\n\n",
        persona.name(),
        persona.description()
    ));

    match options.variant() {
        PromptVariant::Stakes => {
            let stakes = Stakes::with_thresholds(amount, options.stakes_thresholds());
            prompt.push_str("THE HARD DATA (you MUST use these):\n");
            prompt.push_str(&format!(
                "1. The exact currency amount involved is: {} units.\n",
                amount
            ));
            prompt.push_str(&format!("2. The stakes are: {}\n", stakes.tier().stakes()));
            prompt.push_str(&format!(
                "3. The object being bought or sold is: {}.\n\n",
                stakes.tier().object_of_desire()
            ));
        }
        PromptVariant::RawTransfers => {
            let json = serde_json::to_string_pretty(transfers)
                .map_err(|e| StoryError::new(StoryErrorKind::PromptAssembly(e.to_string())))?;
            prompt.push_str(
                "THE HARD DATA (the wallet's most recent transfers, you MUST use them):\n",
            );
            prompt.push_str(&format!("{}\n\n", json));
        }
    }

    prompt.push_str("WRITING RULES:\n");
    prompt.push_str(&format!(
        "- No generalities. Don't say \"he paid the money\". Show the credit chip sliding across the wet chrome table, blinking '{}' in red light.\n",
        amount
    ));
    prompt.push_str(
        "- Sensory details: smells (ozone, rain, rust), sounds (humming servers, footsteps) and textures.\n",
    );
    prompt.push_str("- Show, don't tell.\n\n");

    let beats = beats(*options.scene_count());
    prompt.push_str(&format!(
        "GENERATE {} SCENES. Start every block on its own line with its label and a colon, and keep the block on that single line:\n\n",
        beats.len()
    ));
    for (index, (beat, scene, shot)) in beats.iter().enumerate() {
        let n = index + 1;
        prompt.push_str(&format!("SCENE {} ({}): [{}]\n", n, beat, scene));
        prompt.push_str(&format!("IMAGE_PROMPT {}: [{} style. {}]\n", n, genre, shot));
    }

    Ok(prompt)
}

/// Wrap a generated image description with the genre and persona.
///
/// ```
/// use ledger_bard_core::{Genre, Persona, PersonaKind};
/// use ledger_bard_story::final_image_prompt;
///
/// let persona = Persona::from(PersonaKind::Whale);
/// assert_eq!(
///     final_image_prompt(Genre::DarkFantasy, &persona, "a gilded vault"),
///     "Dark Fantasy style. The Whale character. a gilded vault, cinematic lighting, 8k"
/// );
/// ```
pub fn final_image_prompt(genre: Genre, persona: &Persona, raw_description: &str) -> String {
    format!(
        "{} style. {} character. {}, cinematic lighting, 8k",
        genre,
        persona.name(),
        raw_description
    )
}
