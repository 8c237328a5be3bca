mod config;
mod error;
mod llm;
pub mod points;
pub mod prompt;
pub mod retry;
mod service;
mod summarizer;
pub mod tracing;
pub mod types;

pub use config::SummarizerConfig;
pub use error::{ProviderError, SummarizeError, ValidationError};
pub use llm::{ollama, openai, TextGenerator};
pub use retry::{RetryConfig, RetryPolicy};
pub use service::VideoSummaryService;
pub use summarizer::{builder::FallbackSummarizerBuilder, FallbackSummarizer};
pub use types::{ProviderResponse, ProviderTier, SummarizationRequest, VideoSummary};
