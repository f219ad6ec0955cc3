use std::future::Future;

pub mod fs;

pub trait ArtifactSink {
    fn save_consolidated_text(&self, text: &str) -> impl Future<Output = anyhow::Result<()>> + Send;

    fn save_narration_script(&self, script: &str)
        -> impl Future<Output = anyhow::Result<()>> + Send;

    fn save_audio(&self, audio: &[u8]) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl<T: ArtifactSink + Send + Sync> ArtifactSink for &T {
    async fn save_consolidated_text(&self, text: &str) -> anyhow::Result<()> {
        (**self).save_consolidated_text(text).await
    }

    async fn save_narration_script(&self, script: &str) -> anyhow::Result<()> {
        (**self).save_narration_script(script).await
    }

    async fn save_audio(&self, audio: &[u8]) -> anyhow::Result<()> {
        (**self).save_audio(audio).await
    }
}

/// Persistence disabled. Every save succeeds without touching storage.
impl ArtifactSink for () {
    async fn save_consolidated_text(&self, _text: &str) -> anyhow::Result<()> {
        Ok(())
    }

    async fn save_narration_script(&self, _script: &str) -> anyhow::Result<()> {
        Ok(())
    }

    async fn save_audio(&self, _audio: &[u8]) -> anyhow::Result<()> {
        Ok(())
    }
}
