use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::sink::ArtifactSink;

/// Consolidated article text, one file per run.
pub const CONSOLIDATED_TEXT_FILE: &str = "clean_text.txt";
/// Narration script produced by the language model.
pub const NARRATION_SCRIPT_FILE: &str = "podcast_script.txt";
/// Synthesized narration audio.
pub const AUDIO_FILE: &str = "podcast_audio.mp3";

/// Stores artifacts as plain files under a single directory.
///
/// The directory is created on first write if it does not exist. A second
/// run against the same directory overwrites the previous artifacts.
#[derive(Debug, Clone)]
pub struct FsArtifactSink {
    root: PathBuf,
}

impl FsArtifactSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsArtifactSink { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn consolidated_text_path(&self) -> PathBuf {
        self.root.join(CONSOLIDATED_TEXT_FILE)
    }

    pub fn narration_script_path(&self) -> PathBuf {
        self.root.join(NARRATION_SCRIPT_FILE)
    }

    pub fn audio_path(&self) -> PathBuf {
        self.root.join(AUDIO_FILE)
    }

    async fn write_artifact(&self, file_name: &str, bytes: &[u8]) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .inspect_err(|e| {
                tracing::error!(error = ?e, root = %self.root.display(), "Failed to create artifact directory")
            })
            .context("Failed to create artifact directory")?;

        let path = self.root.join(file_name);
        tokio::fs::write(&path, bytes)
            .await
            .inspect_err(|e| {
                tracing::error!(error = ?e, path = %path.display(), "Failed to write artifact")
            })
            .with_context(|| format!("Failed to write artifact to {}", path.display()))?;

        Ok(())
    }
}

impl ArtifactSink for FsArtifactSink {
    async fn save_consolidated_text(&self, text: &str) -> anyhow::Result<()> {
        self.write_artifact(CONSOLIDATED_TEXT_FILE, text.as_bytes())
            .await
    }

    async fn save_narration_script(&self, script: &str) -> anyhow::Result<()> {
        self.write_artifact(NARRATION_SCRIPT_FILE, script.as_bytes())
            .await
    }

    async fn save_audio(&self, audio: &[u8]) -> anyhow::Result<()> {
        self.write_artifact(AUDIO_FILE, audio).await
    }
}
