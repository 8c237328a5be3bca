pub mod builder;

use chrono::{DateTime, Utc};
use recap_transcript::TranscriptInput;

use crate::{
    points::extract_points,
    prompt::build_prompt,
    retry::RetryPolicy,
    types::{ProviderResponse, ProviderTier, SummarizationRequest, VideoSummary},
    ProviderError, SummarizeError, SummarizerConfig, TextGenerator,
};

/// Two-tier summarizer: the primary provider is retried until its budget is
/// spent, then the secondary provider gets its own full retry budget.
#[derive(Debug)]
pub struct FallbackSummarizer<P, S>
where
    P: TextGenerator + Send + Sync + 'static,
    S: TextGenerator + Send + Sync + 'static,
{
    primary: P,
    secondary: S,
    retry_policy: RetryPolicy,
    max_points_limit: usize,
}

impl<P, S> FallbackSummarizer<P, S>
where
    P: TextGenerator + Send + Sync + 'static,
    S: TextGenerator + Send + Sync + 'static,
{
    pub fn new(primary: P, secondary: S, config: SummarizerConfig) -> Self {
        FallbackSummarizer {
            primary,
            secondary,
            retry_policy: RetryPolicy::new(config.retry),
            max_points_limit: config.max_points_limit,
        }
    }

    pub fn max_points_limit(&self) -> usize {
        self.max_points_limit
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Summarizes `transcript` into at most roughly `max_points` points.
    ///
    /// Fails with [`SummarizeError::Validation`] before any provider call when
    /// the request is out of range, and with [`SummarizeError::Exhausted`]
    /// carrying the secondary provider's error when both tiers fail.
    #[tracing::instrument(skip(self, transcript), fields(video_id = %transcript.video_id))]
    pub async fn summarize(
        &self,
        transcript: &TranscriptInput,
        max_points: usize,
    ) -> Result<VideoSummary, SummarizeError> {
        let request = SummarizationRequest::new(transcript, max_points, self.max_points_limit)
            .inspect_err(|e| tracing::warn!(error = %e, "Rejected summarization request"))?;

        let (tier, response, generated_at) = match self
            .generate_with_retry(&self.primary, ProviderTier::Primary, &request)
            .await
        {
            Ok((response, generated_at)) => (ProviderTier::Primary, response, generated_at),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    provider = P::PROVIDER_NAME,
                    fallback = S::PROVIDER_NAME,
                    "Primary provider exhausted, falling back to secondary"
                );

                let (response, generated_at) = self
                    .generate_with_retry(&self.secondary, ProviderTier::Secondary, &request)
                    .await
                    .map_err(|source| {
                        tracing::error!(
                            error = %source,
                            provider = S::PROVIDER_NAME,
                            "Secondary provider exhausted, giving up"
                        );
                        SummarizeError::Exhausted { source }
                    })?;

                (ProviderTier::Secondary, response, generated_at)
            }
        };

        let summary_points = extract_points(&response.raw_text);
        tracing::info!(%tier, points = summary_points.len(), "Summary generated");

        Ok(VideoSummary {
            video_info: request.transcript().video_metadata.clone(),
            summary_points,
            full_summary: response.raw_text,
            generated_at,
            provider: tier,
        })
    }

    /// Runs one tier to completion. The timestamp is taken when the call
    /// that succeeded returns.
    #[tracing::instrument(skip(self, generator, request), fields(provider = G::PROVIDER_NAME))]
    async fn generate_with_retry<G: TextGenerator>(
        &self,
        generator: &G,
        tier: ProviderTier,
        request: &SummarizationRequest<'_>,
    ) -> Result<(ProviderResponse, DateTime<Utc>), ProviderError> {
        let prompt = build_prompt(
            G::PROMPT_STYLE,
            &request.transcript().full_text,
            request.max_points(),
        );

        let response = self
            .retry_policy
            .execute(|| generator.generate(&prompt))
            .await?;

        Ok((response, Utc::now()))
    }
}
