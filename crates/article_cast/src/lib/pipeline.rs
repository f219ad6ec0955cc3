pub mod builder;

use artifact_store::ArtifactSink;

use crate::{
    config::PipelineConfig,
    consolidate::{consolidate_pages, truncate_chars},
    crawl::{CrawlRequest, Crawler},
    error::Error,
    llm::generator::ScriptGenerator,
    tts::{AudioArtifact, SpeechRequest, SpeechSynthesizer},
};

// The core article-to-narrated-podcast pipeline
#[derive(Debug)]
pub struct PodcastPipeline<C, G, S, A = ()>
where
    C: Crawler + Send + Sync + 'static,
    G: ScriptGenerator + Send + Sync + 'static,
    S: SpeechSynthesizer + Send + Sync + 'static,
    A: ArtifactSink + Send + Sync + 'static,
{
    crawler: C,
    generator: G,
    synthesizer: S,
    sink: A,
}

/// Everything a successful run produces. `consolidated_text` is the full
/// untruncated text the narration was generated from, kept for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct NarratedPodcast {
    pub consolidated_text: String,
    pub script: String,
    pub audio: AudioArtifact,
}

impl<C, G, S, A> PodcastPipeline<C, G, S, A>
where
    C: Crawler + Send + Sync + 'static,
    G: ScriptGenerator + Send + Sync + 'static,
    S: SpeechSynthesizer + Send + Sync + 'static,
    A: ArtifactSink + Send + Sync + 'static,
{
    /// Runs the four stages in order, stopping at the first failure.
    ///
    /// The configuration is validated before any collaborator is reached.
    /// Artifacts are handed to the sink as each stage completes; sink
    /// failures are logged and never abort the run.
    #[tracing::instrument(skip(self, config), fields(url = %config.article_url))]
    pub async fn run(self, config: &PipelineConfig) -> Result<NarratedPodcast, Error> {
        config.validate()?;

        let crawl_request = CrawlRequest {
            url: config.article_url.clone(),
            max_depth: config.crawl_depth,
            max_links: config.max_links_per_page,
        };
        let crawl_result = self
            .crawler
            .crawl(crawl_request)
            .await
            .map_err(|e| Error::Crawl(format!("{e:?}")))?;
        tracing::info!(pages = crawl_result.pages.len(), "Article crawled");

        let consolidated_text = consolidate_pages(&crawl_result);
        if consolidated_text.is_empty() {
            tracing::warn!("No usable text extracted from any crawled page");
        }
        if let Err(e) = self.sink.save_consolidated_text(&consolidated_text).await {
            tracing::warn!(error = ?e, "Failed to persist consolidated text");
        }

        let article = truncate_chars(&consolidated_text, config.max_prompt_chars);
        let script = self
            .generator
            .generate_script(article)
            .await
            .map_err(|e| Error::Generation(format!("{e:?}")))?
            .text;
        tracing::info!(chars = script.chars().count(), "Narration script generated");
        if let Err(e) = self.sink.save_narration_script(&script).await {
            tracing::warn!(error = ?e, "Failed to persist narration script");
        }

        let speech_request = SpeechRequest {
            text: script.clone(),
            voice_id: config.voice_id.clone(),
            voice_settings: config.voice_settings,
        };
        let audio = self
            .synthesizer
            .synthesize(speech_request)
            .await
            .map_err(|e| Error::Synthesis(format!("{e:?}")))?;
        tracing::info!(bytes = audio.bytes.len(), "Narration audio synthesized");
        if let Err(e) = self.sink.save_audio(&audio.bytes).await {
            tracing::warn!(error = ?e, "Failed to persist narration audio");
        }

        Ok(NarratedPodcast {
            consolidated_text,
            script,
            audio,
        })
    }
}
