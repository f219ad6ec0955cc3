mod config;
mod consolidate;
pub mod crawl;
mod error;
mod llm;
mod pipeline;
pub mod tracing;
pub mod tts;

pub use config::{
    PipelineConfig, DEFAULT_CRAWL_DEPTH, DEFAULT_MAX_LINKS, MAX_CRAWL_DEPTH, MAX_PROMPT_CHARS,
};
pub use consolidate::{consolidate_pages, truncate_chars, PAGE_DELIMITER};
pub use error::Error;
pub use llm::gemini;
pub use llm::generator::{ScriptGenerator, ScriptResponse};
pub use pipeline::{builder::PodcastPipelineBuilder, NarratedPodcast, PodcastPipeline};
pub use tts::{AudioArtifact, SpeechRequest, SpeechSynthesizer, VoiceSettings, DEFAULT_VOICE_ID};
