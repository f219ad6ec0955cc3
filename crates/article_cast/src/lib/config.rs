use std::fmt;

use crate::{
    error::Error,
    tts::{VoiceSettings, DEFAULT_VOICE_ID},
};

/// Upper bound on link-follow depth a run may request.
pub const MAX_CRAWL_DEPTH: u8 = 3;
/// Depth used when the caller does not ask for one.
pub const DEFAULT_CRAWL_DEPTH: u8 = 1;
/// How many new links are followed from each crawled page.
pub const DEFAULT_MAX_LINKS: usize = 1;
/// The consolidated article is cut to this many characters before prompting
/// the generation model.
pub const MAX_PROMPT_CHARS: usize = 6000;

/// Everything a single pipeline run needs, passed explicitly at call time.
///
/// Two runs with different credentials never share state; there is no
/// process-wide configuration. The `Debug` form redacts both credentials.
#[derive(Clone)]
pub struct PipelineConfig {
    pub article_url: String,
    pub crawl_depth: u8,
    pub max_links_per_page: usize,
    pub gemini_api_key: String,
    pub elevenlabs_api_key: String,
    pub voice_id: String,
    pub voice_settings: VoiceSettings,
    pub max_prompt_chars: usize,
}

impl fmt::Debug for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineConfig")
            .field("article_url", &self.article_url)
            .field("crawl_depth", &self.crawl_depth)
            .field("max_links_per_page", &self.max_links_per_page)
            .field("gemini_api_key", &"[REDACTED]")
            .field("elevenlabs_api_key", &"[REDACTED]")
            .field("voice_id", &self.voice_id)
            .field("voice_settings", &self.voice_settings)
            .field("max_prompt_chars", &self.max_prompt_chars)
            .finish()
    }
}

impl PipelineConfig {
    pub fn new(
        article_url: impl Into<String>,
        gemini_api_key: impl Into<String>,
        elevenlabs_api_key: impl Into<String>,
    ) -> Self {
        PipelineConfig {
            article_url: article_url.into(),
            crawl_depth: DEFAULT_CRAWL_DEPTH,
            max_links_per_page: DEFAULT_MAX_LINKS,
            gemini_api_key: gemini_api_key.into(),
            elevenlabs_api_key: elevenlabs_api_key.into(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            voice_settings: VoiceSettings::default(),
            max_prompt_chars: MAX_PROMPT_CHARS,
        }
    }

    pub fn with_crawl_depth(mut self, depth: u8) -> Self {
        self.crawl_depth = depth;
        self
    }

    pub fn with_voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    /// Checked by the pipeline before any collaborator is reached. An
    /// invalid run must fail without a single network call.
    pub fn validate(&self) -> Result<(), Error> {
        if self.article_url.is_empty() {
            return Err(Error::Config("article URL must not be empty"));
        }
        if self.gemini_api_key.is_empty() {
            return Err(Error::Config("Gemini API key must not be empty"));
        }
        if self.elevenlabs_api_key.is_empty() {
            return Err(Error::Config("ElevenLabs API key must not be empty"));
        }
        if self.crawl_depth > MAX_CRAWL_DEPTH {
            return Err(Error::Config("crawl depth exceeds the supported maximum"));
        }
        Ok(())
    }
}
