use std::sync::{Arc, Mutex};

use article_cast::{AudioArtifact, SpeechRequest, SpeechSynthesizer};

#[derive(Clone)]
pub struct MockSynthesizer {
    pub audio_bytes: Vec<u8>,
    pub calls: Arc<Mutex<Vec<SpeechRequest>>>,
    pub fail_with: Option<String>,
}

impl MockSynthesizer {
    pub fn new(audio_bytes: &[u8]) -> Self {
        Self {
            audio_bytes: audio_bytes.to_vec(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            audio_bytes: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl SpeechSynthesizer for MockSynthesizer {
    const SYNTHESIS_MODEL: &'static str = "mock-elevenlabs";
    type Error = anyhow::Error;

    async fn synthesize(&self, request: SpeechRequest) -> Result<AudioArtifact, Self::Error> {
        self.calls.lock().unwrap().push(request);
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(AudioArtifact {
            bytes: self.audio_bytes.clone(),
            mime_type: "audio/mpeg".to_string(),
        })
    }
}
