use std::sync::{Arc, Mutex};

use artifact_store::ArtifactSink;

#[derive(Clone)]
pub struct MockSink {
    pub consolidated_texts: Arc<Mutex<Vec<String>>>,
    pub scripts: Arc<Mutex<Vec<String>>>,
    pub audio: Arc<Mutex<Vec<Vec<u8>>>>,
    pub fail_with: Option<String>,
}

impl Default for MockSink {
    fn default() -> Self {
        Self {
            consolidated_texts: Arc::new(Mutex::new(Vec::new())),
            scripts: Arc::new(Mutex::new(Vec::new())),
            audio: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }
}

impl MockSink {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl ArtifactSink for MockSink {
    async fn save_consolidated_text(&self, text: &str) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.consolidated_texts
            .lock()
            .unwrap()
            .push(text.to_string());
        Ok(())
    }

    async fn save_narration_script(&self, script: &str) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.scripts.lock().unwrap().push(script.to_string());
        Ok(())
    }

    async fn save_audio(&self, audio: &[u8]) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.audio.lock().unwrap().push(audio.to_vec());
        Ok(())
    }
}
