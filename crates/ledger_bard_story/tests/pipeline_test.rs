//! Pipeline tests with in-memory collaborators.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use ledger_bard_core::{Genre, Persona, PersonaKind, TransferRecord};
use ledger_bard_error::{
    GeminiError, GeminiErrorKind, LedgerBardErrorKind, LedgerBardResult, MediaError,
    MediaErrorKind, StoryErrorKind,
};
use ledger_bard_interface::{
    Frame, ImageGenerator, NarrativeGenerator, SpeechSynthesizer, Story, StoryRenderer,
    TransferSource,
};
use ledger_bard_story::{PromptOptions, PromptVariant, StoryPipeline};

const SCRIPT: &str = "\
Here is your story.
**SCENE 1:** Rain on chrome.
IMAGE_PROMPT 1: a neon alley
SCENE 2: The deal closes.
IMAGE_PROMPT 2: hands and a glowing screen
";

struct StaticSource(Vec<TransferRecord>);

#[async_trait]
impl TransferSource for StaticSource {
    async fn fetch_transfers(&self, _address: &str) -> Vec<TransferRecord> {
        self.0.clone()
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

struct ScriptedNarrator {
    script: Option<String>,
    prompts: Arc<std::sync::Mutex<Vec<String>>>,
}

impl ScriptedNarrator {
    fn ok(script: &str) -> Self {
        Self {
            script: Some(script.to_string()),
            prompts: Arc::default(),
        }
    }

    fn failing() -> Self {
        Self {
            script: None,
            prompts: Arc::default(),
        }
    }
}

#[async_trait]
impl NarrativeGenerator for ScriptedNarrator {
    async fn generate_narrative(&self, prompt: &str) -> LedgerBardResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.script {
            Some(script) => Ok(script.clone()),
            None => Err(GeminiError::new(GeminiErrorKind::ApiRequest("quota exhausted".into())).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "test-model"
    }
}

#[derive(Clone, Default)]
struct CountingSpeech {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

#[async_trait]
impl SpeechSynthesizer for CountingSpeech {
    async fn synthesize(&self, text: &str, _genre: Genre) -> LedgerBardResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(MediaError::new(MediaErrorKind::NoAudio).into())
        } else {
            Ok(text.as_bytes().to_vec())
        }
    }
}

#[derive(Clone, Default)]
struct CountingImages {
    calls: Arc<AtomicUsize>,
    prompts: Arc<std::sync::Mutex<Vec<String>>>,
    fail: bool,
}

#[async_trait]
impl ImageGenerator for CountingImages {
    async fn generate(&self, prompt: &str) -> LedgerBardResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            Err(MediaError::new(MediaErrorKind::NoImage("filtered".into())).into())
        } else {
            Ok(vec![0x89, b'P', b'N', b'G'])
        }
    }
}

#[derive(Default)]
struct RecordingRenderer {
    personas: Vec<Persona>,
    frames: Vec<Frame>,
    finished: Option<Story>,
}

impl StoryRenderer for RecordingRenderer {
    fn persona(&mut self, persona: &Persona, _transfers: &[TransferRecord]) -> LedgerBardResult<()> {
        self.personas.push(*persona);
        Ok(())
    }

    fn frame(&mut self, frame: &Frame) -> LedgerBardResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn finish(&mut self, story: &Story) -> LedgerBardResult<()> {
        self.finished = Some(story.clone());
        Ok(())
    }
}

fn trader_source() -> StaticSource {
    StaticSource(vec![TransferRecord::new(5000.0)])
}

#[tokio::test]
async fn test_full_story_with_media() -> anyhow::Result<()> {
    let speech = CountingSpeech::default();
    let images = CountingImages::default();
    let pipeline = StoryPipeline::new(trader_source(), ScriptedNarrator::ok(SCRIPT))
        .with_speech(speech.clone())
        .with_images(images.clone());
    let mut renderer = RecordingRenderer::default();

    let story = pipeline
        .tell("TAddress", Genre::CyberpunkNoir, &mut renderer)
        .await?;

    assert_eq!(story.persona().kind(), PersonaKind::Trader);
    assert_eq!(story.blocks().len(), 4);
    assert_eq!(story.frames().len(), 4);
    assert_eq!(speech.calls.load(Ordering::SeqCst), 2);
    assert_eq!(images.calls.load(Ordering::SeqCst), 2);

    assert_eq!(renderer.personas.len(), 1);
    assert_eq!(renderer.frames, *story.frames());
    assert!(renderer.finished.is_some());

    let sent = images.prompts.lock().unwrap().clone();
    assert_eq!(
        sent[0],
        "Cyberpunk Noir style. The Trader character. a neon alley, cinematic lighting, 8k"
    );
    Ok(())
}

#[tokio::test]
async fn test_illustration_carries_preceding_narration() -> anyhow::Result<()> {
    let pipeline = StoryPipeline::new(trader_source(), ScriptedNarrator::ok(SCRIPT))
        .with_speech(CountingSpeech::default())
        .with_images(CountingImages::default());
    let mut renderer = RecordingRenderer::default();

    let story = pipeline.tell("TAddress", Genre::DarkFantasy, &mut renderer).await?;

    match &story.frames()[1] {
        Frame::Illustration(frame) => {
            assert_eq!(frame.narration().as_deref(), Some("Rain on chrome.".as_bytes()));
            assert_eq!(frame.raw_description(), "a neon alley");
            assert!(frame.image().is_some());
        }
        other => panic!("expected illustration, got {:?}", other),
    }
    match &story.frames()[3] {
        Frame::Illustration(frame) => {
            assert_eq!(frame.narration().as_deref(), Some("The deal closes.".as_bytes()));
        }
        other => panic!("expected illustration, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_media_failures_do_not_abort() -> anyhow::Result<()> {
    let speech = CountingSpeech {
        fail: true,
        ..Default::default()
    };
    let images = CountingImages {
        fail: true,
        ..Default::default()
    };
    let pipeline = StoryPipeline::new(trader_source(), ScriptedNarrator::ok(SCRIPT))
        .with_speech(speech.clone())
        .with_images(images.clone());
    let mut renderer = RecordingRenderer::default();

    let story = pipeline.tell("TAddress", Genre::EightiesAnime, &mut renderer).await?;

    assert_eq!(story.frames().len(), 4);
    assert_eq!(speech.calls.load(Ordering::SeqCst), 2);
    assert_eq!(images.calls.load(Ordering::SeqCst), 2);
    for frame in story.frames() {
        match frame {
            Frame::Scene(scene) => assert!(scene.narration().is_none()),
            Frame::Illustration(illustration) => {
                assert!(illustration.image().is_none());
                assert!(illustration.narration().is_none());
            }
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_narrative_failure_aborts_before_frames() {
    let speech = CountingSpeech::default();
    let pipeline = StoryPipeline::new(trader_source(), ScriptedNarrator::failing())
        .with_speech(speech.clone());
    let mut renderer = RecordingRenderer::default();

    let err = pipeline
        .tell("TAddress", Genre::CyberpunkNoir, &mut renderer)
        .await
        .unwrap_err();

    match err.kind() {
        LedgerBardErrorKind::Story(story_err) => {
            assert!(matches!(story_err.kind, StoryErrorKind::NarrativeGeneration(_)));
        }
        other => panic!("expected story error, got {:?}", other),
    }
    assert!(renderer.frames.is_empty());
    assert!(renderer.finished.is_none());
    assert_eq!(speech.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unrecognized_script_yields_empty_story() -> anyhow::Result<()> {
    let images = CountingImages::default();
    let pipeline = StoryPipeline::new(
        StaticSource(Vec::new()),
        ScriptedNarrator::ok("I'm sorry, I can't write that."),
    )
    .with_images(images.clone());
    let mut renderer = RecordingRenderer::default();

    let story = pipeline.tell("TEmpty", Genre::WatercolorFairytale, &mut renderer).await?;

    assert!(story.is_empty());
    assert_eq!(story.persona().kind(), PersonaKind::Ghost);
    assert_eq!(images.calls.load(Ordering::SeqCst), 0);
    assert!(renderer.finished.as_ref().is_some_and(Story::is_empty));
    Ok(())
}

#[tokio::test]
async fn test_text_only_pipeline() -> anyhow::Result<()> {
    let pipeline = StoryPipeline::new(trader_source(), ScriptedNarrator::ok(SCRIPT));
    let mut renderer = RecordingRenderer::default();

    let story = pipeline.tell("TAddress", Genre::CyberpunkNoir, &mut renderer).await?;

    assert_eq!(story.frames().len(), 4);
    match &story.frames()[0] {
        Frame::Scene(scene) => {
            assert_eq!(scene.text(), "Rain on chrome.");
            assert!(scene.narration().is_none());
        }
        other => panic!("expected scene, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_prepare_uses_configured_variant() -> anyhow::Result<()> {
    let narrator = ScriptedNarrator::ok(SCRIPT);
    let prompts = narrator.prompts.clone();
    let pipeline = StoryPipeline::new(trader_source(), narrator)
        .with_options(PromptOptions::default().with_variant(PromptVariant::RawTransfers));

    let briefing = pipeline.prepare("TAddress", Genre::DarkFantasy).await?;
    assert!(briefing.prompt().contains("\"value\": 5000.0"));
    assert_eq!(briefing.persona().kind(), PersonaKind::Trader);
    assert!(prompts.lock().unwrap().is_empty());

    let mut renderer = RecordingRenderer::default();
    pipeline.tell("TAddress", Genre::DarkFantasy, &mut renderer).await?;
    assert_eq!(prompts.lock().unwrap().as_slice(), &[briefing.prompt().clone()]);
    Ok(())
}
