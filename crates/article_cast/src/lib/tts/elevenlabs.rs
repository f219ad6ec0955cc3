use reqwest::Client;

use crate::tts::{AudioArtifact, SpeechRequest, SpeechSynthesizer};

pub struct ElevenLabsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ElevenLabsError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

impl ElevenLabsClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.elevenlabs.io/v1".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn request_body(model_name: &str, request: &SpeechRequest) -> serde_json::Value {
        serde_json::json!({
            "text": request.text,
            "model_id": model_name,
            "voice_settings": request.voice_settings,
        })
    }

    pub async fn send_speech_request(
        &self,
        model_name: impl Into<String>,
        request: &SpeechRequest,
    ) -> Result<AudioArtifact, ElevenLabsError> {
        let body = Self::request_body(&model_name.into(), request);

        let resp = self
            .client
            .post(format!(
                "{}/text-to-speech/{}",
                self.base_url, request.voice_id
            ))
            .header("xi-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        // A failed synthesis carries its diagnostic in the response body.
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ElevenLabsError::Api { status, message });
        }

        let mime_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let bytes = resp.bytes().await?.to_vec();

        Ok(AudioArtifact { bytes, mime_type })
    }
}

impl SpeechSynthesizer for ElevenLabsClient {
    const SYNTHESIS_MODEL: &'static str = "eleven_multilingual_v2";

    type Error = ElevenLabsError;

    async fn synthesize(&self, request: SpeechRequest) -> Result<AudioArtifact, Self::Error> {
        self.send_speech_request(Self::SYNTHESIS_MODEL, &request)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to synthesize narration audio"))
    }
}
