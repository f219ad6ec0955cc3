use reqwest::Client;
use serde::Deserialize;

use crate::llm::generator::{ScriptGenerator, ScriptResponse};

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Empty response: no candidate text returned")]
    EmptyResponse,
}

impl GeminiClient {
    const NARRATION_PROMPT: &str = include_str!("./prompts/narration_0.txt");

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn build_prompt(article: &str) -> String {
        format!(
            "{}\n\nArticle:\n{}",
            Self::NARRATION_PROMPT.trim_end(),
            article
        )
    }

    pub async fn send_generate_request(
        &self,
        model_name: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt.into() }
                    ]
                }
            ]
        });

        let resp = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url,
                model_name.into()
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, message });
        }

        Ok(resp.json::<GenerateContentResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

impl ScriptGenerator for GeminiClient {
    const GENERATION_MODEL: &'static str = "gemini-3-flash-preview";

    type Error = GeminiError;

    async fn generate_script(&self, article: &str) -> Result<ScriptResponse, Self::Error> {
        let prompt = Self::build_prompt(article);

        let response = self
            .send_generate_request(Self::GENERATION_MODEL, prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate narration script"))?;

        let text = response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .and_then(|p| p.text.clone())
            .ok_or(GeminiError::EmptyResponse)?;

        Ok(ScriptResponse { text })
    }
}
