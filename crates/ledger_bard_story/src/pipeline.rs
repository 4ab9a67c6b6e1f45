//! End-to-end story pipeline.

use ledger_bard_core::{Genre, Persona, ScriptBlock, TransferRecord};
use ledger_bard_error::{LedgerBardResult, StoryError, StoryErrorKind};
use ledger_bard_interface::{
    Frame, IllustrationFrame, ImageGenerator, NarrativeGenerator, SceneFrame, SpeechSynthesizer,
    Story, StoryRenderer, TransferSource,
};
use tracing::{debug, info, instrument, warn};

use crate::{PromptOptions, build_prompt, classify, final_image_prompt, parse};

/// Everything known about a wallet before the generator is called.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct Briefing {
    /// Transfers the story will be grounded in
    transfers: Vec<TransferRecord>,
    /// Classified persona
    persona: Persona,
    /// Script request for the generator
    prompt: String,
}

/// Runs fetch, classify, prompt, generate, parse and render in sequence.
///
/// Each collaborator call is awaited before the next one starts. Only a
/// failed script generation ends a run; media failures drop the affected
/// artifact. Narration and illustration are optional: a pipeline built
/// without them produces text-only frames.
pub struct StoryPipeline<S: TransferSource, N: NarrativeGenerator> {
    source: S,
    narrator: N,
    speech: Option<Box<dyn SpeechSynthesizer>>,
    images: Option<Box<dyn ImageGenerator>>,
    options: PromptOptions,
}

impl<S: TransferSource, N: NarrativeGenerator> StoryPipeline<S, N> {
    /// Create a text-only pipeline with default prompt options.
    pub fn new(source: S, narrator: N) -> Self {
        Self {
            source,
            narrator,
            speech: None,
            images: None,
            options: PromptOptions::default(),
        }
    }

    /// Narrate scenes with `speech`.
    pub fn with_speech(mut self, speech: impl SpeechSynthesizer + 'static) -> Self {
        self.speech = Some(Box::new(speech));
        self
    }

    /// Illustrate image prompts with `images`.
    pub fn with_images(mut self, images: impl ImageGenerator + 'static) -> Self {
        self.images = Some(Box::new(images));
        self
    }

    /// Replace the prompt options.
    pub fn with_options(mut self, options: PromptOptions) -> Self {
        self.options = options;
        self
    }

    /// Prompt options in effect.
    pub fn options(&self) -> &PromptOptions {
        &self.options
    }

    /// Fetch a wallet's transfers and classify it.
    #[instrument(skip(self), fields(source = self.source.source_name()))]
    pub async fn survey(&self, address: &str) -> (Vec<TransferRecord>, Persona) {
        let transfers = self.source.fetch_transfers(address).await;
        let persona = classify(&transfers);
        info!(
            transfer_count = transfers.len(),
            persona = %persona,
            "Wallet classified"
        );
        (transfers, persona)
    }

    /// Survey the wallet and assemble the script request.
    #[instrument(skip(self), fields(genre = %genre))]
    pub async fn prepare(&self, address: &str, genre: Genre) -> LedgerBardResult<Briefing> {
        let (transfers, persona) = self.survey(address).await;
        let prompt = build_prompt(&persona, &transfers, genre, &self.options)?;
        debug!(prompt_len = prompt.len(), variant = %self.options.variant(), "Prompt assembled");

        Ok(Briefing {
            transfers,
            persona,
            prompt,
        })
    }

    /// Tell the story of `address` in `genre`, presenting it through `renderer`.
    ///
    /// # Errors
    ///
    /// Fails with [`StoryErrorKind::NarrativeGeneration`] when the generator
    /// fails, before any frame is rendered. Renderer errors are passed through.
    #[instrument(
        skip(self, renderer),
        fields(
            genre = %genre,
            provider = self.narrator.provider_name(),
            model = self.narrator.model_name()
        )
    )]
    pub async fn tell<R: StoryRenderer>(
        &self,
        address: &str,
        genre: Genre,
        renderer: &mut R,
    ) -> LedgerBardResult<Story> {
        let Briefing {
            transfers,
            persona,
            prompt,
        } = self.prepare(address, genre).await?;

        renderer.persona(&persona, &transfers)?;

        let script = self
            .narrator
            .generate_narrative(&prompt)
            .await
            .map_err(|e| StoryError::new(StoryErrorKind::NarrativeGeneration(e.to_string())))?;

        let blocks = parse(&script);
        if blocks.is_empty() {
            warn!(script_len = script.len(), "Script contained no recognizable blocks");
        } else {
            info!(block_count = blocks.len(), "Script parsed");
        }

        let mut frames = Vec::with_capacity(blocks.len());
        let mut last_narration: Option<Vec<u8>> = None;

        for block in &blocks {
            let frame = match block {
                ScriptBlock::Scene { label, text } => {
                    let narration = self.narrate(text, genre).await;
                    last_narration = narration.clone();
                    Frame::Scene(SceneFrame::new(label.as_str(), text.as_str(), narration))
                }
                ScriptBlock::ImagePrompt {
                    label,
                    raw_description,
                } => {
                    let final_prompt = final_image_prompt(genre, &persona, raw_description);
                    let image = self.illustrate(&final_prompt).await;
                    Frame::Illustration(IllustrationFrame::new(
                        label.as_str(),
                        raw_description.as_str(),
                        final_prompt,
                        image,
                        last_narration.clone(),
                    ))
                }
            };

            renderer.frame(&frame)?;
            frames.push(frame);
        }

        let story = Story::new(address, genre, persona, transfers, script, blocks, frames);
        renderer.finish(&story)?;
        Ok(story)
    }

    async fn narrate(&self, text: &str, genre: Genre) -> Option<Vec<u8>> {
        match &self.speech {
            Some(speech) => speech.synthesize_speech(text, genre).await,
            None => None,
        }
    }

    async fn illustrate(&self, prompt: &str) -> Option<Vec<u8>> {
        match &self.images {
            Some(images) => images.generate_image(prompt).await,
            None => None,
        }
    }
}
