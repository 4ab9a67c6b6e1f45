//! Terminal presentation of a story.

use std::path::{Path, PathBuf};

use ledger_bard::{
    Frame, LedgerBardResult, Persona, Story, StoryError, StoryErrorKind, StoryRenderer,
    TransferRecord,
};

/// Prints frames to stdout and, given an output directory, saves media.
///
/// Narration is written as `scene_<n>.<ext>` and images as `image_<n>.png`,
/// numbered in order of appearance from 1.
#[derive(Debug)]
pub struct TerminalRenderer {
    output_dir: Option<PathBuf>,
    audio_extension: &'static str,
    scenes: usize,
    images: usize,
}

impl TerminalRenderer {
    /// Create a renderer; `audio_extension` names saved narration files.
    pub fn new(output_dir: Option<PathBuf>, audio_extension: &'static str) -> Self {
        Self {
            output_dir,
            audio_extension,
            scenes: 0,
            images: 0,
        }
    }

    fn save(&self, name: &str, bytes: &[u8]) -> Result<Option<PathBuf>, StoryError> {
        let Some(dir) = &self.output_dir else {
            return Ok(None);
        };
        let path = dir.join(name);
        write_file(&path, bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Artifact saved");
        Ok(Some(path))
    }

    /// Save one artifact and report where it went.
    ///
    /// A failed write costs only this artifact; the story keeps rendering.
    fn save_and_report(&self, kind: &str, name: &str, bytes: &[u8]) {
        match self.save(name, bytes) {
            Ok(Some(path)) => println!("[{}: {}]", kind, path.display()),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(artifact = name, error = %e, "Artifact not saved");
                println!("[{} not saved: {}]", kind, e);
            }
        }
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), StoryError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            StoryError::new(StoryErrorKind::Render(format!(
                "Failed to create {}: {}",
                parent.display(),
                e
            )))
        })?;
    }
    std::fs::write(path, bytes).map_err(|e| {
        StoryError::new(StoryErrorKind::Render(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )))
    })
}

impl StoryRenderer for TerminalRenderer {
    fn persona(&mut self, persona: &Persona, transfers: &[TransferRecord]) -> LedgerBardResult<()> {
        println!("Identity detected: {}", persona);
        println!("{}", persona.description());
        println!("(from {} recent transfers)", transfers.len());
        println!("{:-<80}", "");
        Ok(())
    }

    fn frame(&mut self, frame: &Frame) -> LedgerBardResult<()> {
        match frame {
            Frame::Scene(scene) => {
                self.scenes += 1;
                println!();
                println!("### {}", scene.label());
                println!("{}", scene.text());
                if let Some(audio) = scene.narration() {
                    let name = format!("scene_{}.{}", self.scenes, self.audio_extension);
                    self.save_and_report("narration", &name, audio);
                }
            }
            Frame::Illustration(illustration) => {
                self.images += 1;
                println!();
                println!("{}", illustration.caption());
                match illustration.image() {
                    Some(image) => {
                        let name = format!("image_{}.png", self.images);
                        self.save_and_report("image", &name, image);
                    }
                    None => println!("[image unavailable]"),
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self, story: &Story) -> LedgerBardResult<()> {
        println!("{:-<80}", "");
        if story.is_empty() {
            eprintln!("The model's reply contained no SCENE or IMAGE_PROMPT lines; nothing to show.");
        } else {
            println!(
                "{} scenes, {} illustrations for {} ({})",
                self.scenes,
                self.images,
                story.address(),
                story.genre()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_bard::{IllustrationFrame, SceneFrame};

    #[test]
    fn test_saves_numbered_artifacts_only_with_output_dir() {
        let dir = std::env::temp_dir().join(format!("ledger_bard_render_{}", std::process::id()));
        let mut renderer = TerminalRenderer::new(Some(dir.clone()), "wav");

        renderer
            .frame(&Frame::Scene(SceneFrame::new("SCENE 1", "text", Some(vec![1, 2]))))
            .unwrap();
        renderer
            .frame(&Frame::Illustration(IllustrationFrame::new(
                "IMAGE_PROMPT 1",
                "raw",
                "final",
                Some(vec![3]),
                None,
            )))
            .unwrap();
        renderer
            .frame(&Frame::Scene(SceneFrame::new("SCENE 2", "text", None)))
            .unwrap();

        assert_eq!(std::fs::read(dir.join("scene_1.wav")).unwrap(), vec![1, 2]);
        assert_eq!(std::fs::read(dir.join("image_1.png")).unwrap(), vec![3]);
        assert!(!dir.join("scene_2.wav").exists());
        std::fs::remove_dir_all(&dir).unwrap();

        let mut no_files = TerminalRenderer::new(None, "wav");
        no_files
            .frame(&Frame::Scene(SceneFrame::new("SCENE 1", "text", Some(vec![1]))))
            .unwrap();
        assert_eq!(no_files.scenes, 1);
    }

    #[test]
    fn test_failed_save_keeps_rendering() {
        let blocker =
            std::env::temp_dir().join(format!("ledger_bard_blocker_{}", std::process::id()));
        std::fs::write(&blocker, b"not a directory").unwrap();
        let mut renderer = TerminalRenderer::new(Some(blocker.clone()), "wav");

        assert!(renderer
            .frame(&Frame::Scene(SceneFrame::new("SCENE 1", "text", Some(vec![1]))))
            .is_ok());
        assert!(renderer
            .frame(&Frame::Illustration(IllustrationFrame::new(
                "IMAGE_PROMPT 1",
                "raw",
                "final",
                Some(vec![2]),
                None,
            )))
            .is_ok());
        assert!(renderer
            .frame(&Frame::Scene(SceneFrame::new("SCENE 2", "more", Some(vec![3]))))
            .is_ok());
        assert_eq!(renderer.scenes, 2);
        assert_eq!(renderer.images, 1);

        std::fs::remove_file(&blocker).unwrap();
    }
}
