/// Pipeline-level error, one variant per stage that can abort a run.
///
/// Every variant is fatal to the run it occurs in; nothing is retried or
/// recovered locally. Stage errors carry the collaborator's own diagnostic so
/// upstream detail (such as a TTS response body) survives verbatim.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(&'static str),
    #[error("Failed to crawl article: {0}")]
    Crawl(String),
    #[error("Failed to generate narration script: {0}")]
    Generation(String),
    #[error("Failed to synthesize narration audio: {0}")]
    Synthesis(String),
}
