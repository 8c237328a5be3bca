use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use recap_pulse::{
    ollama::OllamaClient, openai::OpenAIClient, tracing::init_tracing_subscriber,
    FallbackSummarizerBuilder, RetryConfig, SummarizerConfig,
};
use recap_transcript::{TranscriptInput, VideoTranscript};

#[derive(Parser)]
#[command(name = "recap-pulse", about = "Video transcript summarizer")]
struct Cli {
    /// OpenAI API key for the primary provider
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_key: String,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    openai_base_url: String,

    /// Chat model used by the primary provider
    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-3.5-turbo")]
    openai_model: String,

    /// Base URL of the local Ollama server (secondary provider)
    #[arg(long, env = "OLLAMA_BASE_URL", default_value = "http://localhost:11434")]
    ollama_base_url: String,

    /// Model used by the secondary provider
    #[arg(long, env = "OLLAMA_MODEL", default_value = "llama2")]
    ollama_model: String,

    /// Per-call provider timeout in seconds
    #[arg(long, env = "PROVIDER_TIMEOUT_SECS", default_value = "60")]
    timeout_secs: u64,

    /// Largest accepted point count
    #[arg(long, env = "MAX_POINTS_LIMIT", default_value = "10")]
    max_points_limit: usize,

    /// Retries per provider after the first attempt
    #[arg(long, env = "RETRY_MAX_RETRIES", default_value = "2")]
    max_retries: u32,

    /// Delay before the first retry, in milliseconds
    #[arg(long, env = "RETRY_BASE_DELAY_MS", default_value = "500")]
    base_delay_ms: u64,

    /// Factor applied to the delay after each failed attempt
    #[arg(long, env = "RETRY_BACKOFF_MULTIPLIER", default_value = "2.0")]
    backoff_multiplier: f64,

    /// Upper bound for any single retry delay, in milliseconds
    #[arg(long, env = "RETRY_MAX_DELAY_MS", default_value = "10000")]
    max_delay_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize a transcript file and print the summary as JSON
    Summarize {
        /// Path to a transcript JSON document (`videoInfo` + `segments`)
        #[arg(long)]
        transcript: PathBuf,

        /// Number of points to ask for
        #[arg(long, default_value_t = SummarizerConfig::DEFAULT_MAX_POINTS)]
        max_points: usize,
    },
}

impl Cli {
    fn summarizer_config(&self) -> SummarizerConfig {
        SummarizerConfig {
            max_points_limit: self.max_points_limit,
            retry: RetryConfig {
                max_retries: self.max_retries,
                base_delay: Duration::from_millis(self.base_delay_ms),
                backoff_multiplier: self.backoff_multiplier,
                max_delay: Duration::from_millis(self.max_delay_ms),
            },
        }
    }
}

async fn read_transcript(path: &Path) -> anyhow::Result<TranscriptInput> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read transcript file {}", path.display()))?;
    let transcript = serde_json::from_str::<VideoTranscript>(&raw)
        .with_context(|| format!("Invalid transcript document {}", path.display()))?;

    Ok(transcript.into())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let timeout = Duration::from_secs(cli.timeout_secs);
    let primary = OpenAIClient::new(&cli.openai_key)
        .with_base_url(&cli.openai_base_url)
        .with_model(&cli.openai_model)
        .with_timeout(timeout);
    let secondary = OllamaClient::new()
        .with_base_url(&cli.ollama_base_url)
        .with_model(&cli.ollama_model)
        .with_timeout(timeout);

    let summarizer = FallbackSummarizerBuilder::new()
        .primary(primary)
        .secondary(secondary)
        .config(cli.summarizer_config())
        .build();

    match cli.command {
        Command::Summarize {
            transcript,
            max_points,
        } => {
            let input = read_transcript(&transcript).await?;
            tracing::info!(video_id = %input.video_id, max_points, "Summarizing transcript");

            let summary = summarizer.summarize(&input, max_points).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
