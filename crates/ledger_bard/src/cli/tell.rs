//! `tell` command handler.

use std::path::PathBuf;

use ledger_bard::{
    Credentials, GeminiClient, Genre, ImagenClient, LedgerBardConfig, LedgerBardResult,
    PromptVariant, StakesSource, StoryPipeline, TextToSpeechClient, TronGridClient,
};
use tracing::info;

use super::renderer::TerminalRenderer;

/// Options for one `tell` run.
#[derive(Debug, Clone)]
pub struct TellOptions {
    /// Wallet to tell
    pub address: String,
    /// Genre to tell it in
    pub genre: Genre,
    /// Prompt variant override
    pub variant: Option<PromptVariant>,
    /// Stakes source override
    pub stakes_from: Option<StakesSource>,
    /// Where to save media, if anywhere
    pub output_dir: Option<PathBuf>,
    /// Skip narration and illustration
    pub no_media: bool,
}

/// Run the full pipeline for one wallet and print the story.
pub async fn tell_story(
    config: &LedgerBardConfig,
    credentials: &Credentials,
    options: TellOptions,
) -> LedgerBardResult<()> {
    let mut prompt_options = config.story().prompt().clone();
    if let Some(variant) = options.variant {
        prompt_options = prompt_options.with_variant(variant);
    }
    if let Some(source) = options.stakes_from {
        prompt_options = prompt_options.with_stakes_source(source);
    }

    let source = TronGridClient::new(config.chain().clone())?;
    let narrator = GeminiClient::new(credentials, config.story().model().clone())?;
    let mut pipeline = StoryPipeline::new(source, narrator).with_options(prompt_options);

    if options.no_media {
        info!("Media disabled; telling a text-only story");
    } else {
        pipeline = pipeline
            .with_speech(TextToSpeechClient::new(credentials, config.speech().clone())?)
            .with_images(ImagenClient::new(credentials, config.image().clone())?);
    }

    let mut renderer = TerminalRenderer::new(
        options.output_dir,
        config.speech().audio_encoding().extension(),
    );

    let story = pipeline
        .tell(&options.address, options.genre, &mut renderer)
        .await?;

    info!(
        persona = %story.persona(),
        block_count = story.blocks().len(),
        "Story complete"
    );
    Ok(())
}
