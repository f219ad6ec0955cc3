use std::path::{Path, PathBuf};

use anyhow::Context;
use article_cast::{
    crawl::http::HttpCrawler,
    gemini::GeminiClient,
    tracing::init_tracing_subscriber,
    tts::elevenlabs::ElevenLabsClient,
    truncate_chars, PipelineConfig, PodcastPipelineBuilder, ScriptGenerator, SpeechRequest,
    SpeechSynthesizer, VoiceSettings, DEFAULT_CRAWL_DEPTH, DEFAULT_VOICE_ID, MAX_CRAWL_DEPTH,
    MAX_PROMPT_CHARS,
};
use artifact_store::{ArtifactSink, FsArtifactSink};
use clap::{Parser, Subcommand};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};

#[derive(Parser)]
#[command(name = "article-cast", about = "Turn a web article into a narrated podcast")]
struct Cli {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,

    /// ElevenLabs API key
    #[arg(long, env = "ELEVENLABS_API_KEY", hide_env_values = true)]
    elevenlabs_api_key: Option<String>,

    /// Directory the artifacts are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Narrate the article at a URL
    Run {
        /// Article URL
        url: String,

        /// How many link hops to follow from the article page
        #[arg(
            long,
            default_value_t = DEFAULT_CRAWL_DEPTH,
            value_parser = clap::value_parser!(u8).range(..=MAX_CRAWL_DEPTH as i64)
        )]
        max_depth: u8,
    },
    /// Prompt for the article URL and credentials
    Interactive,
    /// Generate a narration script from an article text file
    Summarize {
        /// Path to the article text; defaults to the last run's
        /// consolidated text under --out-dir
        input: Option<PathBuf>,
    },
    /// Synthesize audio from a narration script file
    Synthesize {
        /// Path to the narration script; defaults to the last run's
        /// script under --out-dir
        script: Option<PathBuf>,
    },
}

async fn run_pipeline(config: &PipelineConfig, out_dir: &Path) -> anyhow::Result<()> {
    let sink = FsArtifactSink::new(out_dir);

    let pipeline = PodcastPipelineBuilder::new()
        .crawler(HttpCrawler::new())
        .generator(GeminiClient::new(&config.gemini_api_key))
        .synthesizer(ElevenLabsClient::new(&config.elevenlabs_api_key))
        .sink(sink.clone())
        .build();

    let podcast = pipeline.run(config).await?;

    tracing::info!(
        script_chars = podcast.script.chars().count(),
        audio_bytes = podcast.audio.bytes.len(),
        "Pipeline finished"
    );

    println!("\n{}", style("Narration script").bold());
    println!("{}\n", style(truncate_chars(&podcast.script, 240)).dim());
    println!(
        "{} {}",
        style("Narrated podcast written to").green(),
        sink.audio_path().display()
    );

    Ok(())
}

async fn run_interactive(
    gemini_api_key: Option<String>,
    elevenlabs_api_key: Option<String>,
    out_dir: &Path,
) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();

    let url: String = Input::with_theme(&theme)
        .with_prompt("Article URL")
        .interact_text()?;

    let max_depth: u8 = Input::with_theme(&theme)
        .with_prompt(format!("Crawl depth (0-{MAX_CRAWL_DEPTH})"))
        .default(DEFAULT_CRAWL_DEPTH)
        .validate_with(|depth: &u8| {
            if *depth <= MAX_CRAWL_DEPTH {
                Ok(())
            } else {
                Err(format!("depth must be at most {MAX_CRAWL_DEPTH}"))
            }
        })
        .interact_text()?;

    let gemini_api_key = match gemini_api_key {
        Some(key) => key,
        None => Password::with_theme(&theme)
            .with_prompt("Gemini API key")
            .interact()?,
    };
    let elevenlabs_api_key = match elevenlabs_api_key {
        Some(key) => key,
        None => Password::with_theme(&theme)
            .with_prompt("ElevenLabs API key")
            .interact()?,
    };

    let confirmed = Confirm::with_theme(&theme)
        .with_prompt(format!("Narrate {url}?"))
        .default(true)
        .interact()?;
    if !confirmed {
        println!("{}", style("Aborted").yellow());
        return Ok(());
    }

    let config =
        PipelineConfig::new(url, gemini_api_key, elevenlabs_api_key).with_crawl_depth(max_depth);
    run_pipeline(&config, out_dir).await
}

async fn summarize(
    gemini_api_key: &str,
    input: Option<PathBuf>,
    out_dir: &Path,
) -> anyhow::Result<()> {
    let sink = FsArtifactSink::new(out_dir);
    let input = input.unwrap_or_else(|| sink.consolidated_text_path());

    let article = tokio::fs::read_to_string(&input)
        .await
        .with_context(|| format!("Failed to read article text from {}", input.display()))?;

    let script = GeminiClient::new(gemini_api_key)
        .generate_script(truncate_chars(&article, MAX_PROMPT_CHARS))
        .await?
        .text;

    sink.save_narration_script(&script).await?;

    println!(
        "{} {}",
        style("Narration script written to").green(),
        sink.narration_script_path().display()
    );

    Ok(())
}

async fn synthesize(
    elevenlabs_api_key: &str,
    script: Option<PathBuf>,
    out_dir: &Path,
) -> anyhow::Result<()> {
    let sink = FsArtifactSink::new(out_dir);
    let script = script.unwrap_or_else(|| sink.narration_script_path());

    let text = tokio::fs::read_to_string(&script)
        .await
        .with_context(|| format!("Failed to read narration script from {}", script.display()))?;

    let audio = ElevenLabsClient::new(elevenlabs_api_key)
        .synthesize(SpeechRequest {
            text,
            voice_id: DEFAULT_VOICE_ID.to_string(),
            voice_settings: VoiceSettings::default(),
        })
        .await?;

    sink.save_audio(&audio.bytes).await?;

    println!(
        "{} {}",
        style("Narration audio written to").green(),
        sink.audio_path().display()
    );

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    match cli.command {
        Command::Run { url, max_depth } => {
            let gemini_api_key = cli.gemini_api_key.context("GEMINI_API_KEY not set")?;
            let elevenlabs_api_key = cli.elevenlabs_api_key.context("ELEVENLABS_API_KEY not set")?;

            let config = PipelineConfig::new(url, gemini_api_key, elevenlabs_api_key)
                .with_crawl_depth(max_depth);
            tracing::info!(url = %config.article_url, "Running pipeline once...");
            run_pipeline(&config, &cli.out_dir).await?;
        }
        Command::Interactive => {
            run_interactive(cli.gemini_api_key, cli.elevenlabs_api_key, &cli.out_dir).await?;
        }
        Command::Summarize { input } => {
            let gemini_api_key = cli.gemini_api_key.context("GEMINI_API_KEY not set")?;
            summarize(&gemini_api_key, input, &cli.out_dir).await?;
        }
        Command::Synthesize { script } => {
            let elevenlabs_api_key = cli.elevenlabs_api_key.context("ELEVENLABS_API_KEY not set")?;
            synthesize(&elevenlabs_api_key, script, &cli.out_dir).await?;
        }
    }

    Ok(())
}
