use recap_transcript::{TranscriptInput, TranscriptSource, VideoInfo, VideoTranscript};

use crate::{
    types::validate_max_points, FallbackSummarizer, SummarizeError, TextGenerator,
    ValidationError, VideoSummary,
};

/// Summarizes videos by URL: fetches the transcript through `T` and hands it
/// to the fallback summarizer.
#[derive(Debug)]
pub struct VideoSummaryService<T, P, S>
where
    T: TranscriptSource + Send + Sync + 'static,
    P: TextGenerator + Send + Sync + 'static,
    S: TextGenerator + Send + Sync + 'static,
{
    source: T,
    summarizer: FallbackSummarizer<P, S>,
}

impl<T, P, S> VideoSummaryService<T, P, S>
where
    T: TranscriptSource + Send + Sync + 'static,
    P: TextGenerator + Send + Sync + 'static,
    S: TextGenerator + Send + Sync + 'static,
{
    pub fn new(source: T, summarizer: FallbackSummarizer<P, S>) -> Self {
        Self { source, summarizer }
    }

    pub fn summarizer(&self) -> &FallbackSummarizer<P, S> {
        &self.summarizer
    }

    /// Metadata for `video_url`, retried like any other outbound call.
    #[tracing::instrument(skip(self))]
    pub async fn video_info(&self, video_url: &str) -> Result<VideoInfo, SummarizeError> {
        ensure_video_url(video_url)?;

        self.summarizer
            .retry_policy()
            .execute(|| self.source.get_video_info(video_url))
            .await
            .map_err(SummarizeError::Transcript)
    }

    /// Whether the source has a transcript for `video_url`.
    #[tracing::instrument(skip(self))]
    pub async fn check_transcript(&self, video_url: &str) -> Result<bool, SummarizeError> {
        ensure_video_url(video_url)?;
        self.has_transcript(video_url).await
    }

    /// Full transcript for `video_url`; fails with
    /// [`SummarizeError::TranscriptUnavailable`] when the video has none.
    #[tracing::instrument(skip(self))]
    pub async fn transcript(&self, video_url: &str) -> Result<VideoTranscript, SummarizeError> {
        ensure_video_url(video_url)?;
        self.fetch_transcript(video_url).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn summarize_video(
        &self,
        video_url: &str,
        max_points: usize,
    ) -> Result<VideoSummary, SummarizeError> {
        ensure_video_url(video_url)?;
        validate_max_points(max_points, self.summarizer.max_points_limit())?;

        let transcript = self.fetch_transcript(video_url).await?;

        self.summarizer
            .summarize(&TranscriptInput::from(transcript), max_points)
            .await
    }

    async fn has_transcript(&self, video_url: &str) -> Result<bool, SummarizeError> {
        self.summarizer
            .retry_policy()
            .execute(|| self.source.has_transcript(video_url))
            .await
            .map_err(SummarizeError::Transcript)
    }

    async fn fetch_transcript(&self, video_url: &str) -> Result<VideoTranscript, SummarizeError> {
        if !self.has_transcript(video_url).await? {
            tracing::warn!("Video has no transcript");
            return Err(SummarizeError::TranscriptUnavailable {
                video_url: video_url.to_string(),
            });
        }

        let transcript = self
            .summarizer
            .retry_policy()
            .execute(|| self.source.get_transcript(video_url))
            .await
            .map_err(SummarizeError::Transcript)?;
        tracing::debug!(segments = transcript.segments.len(), "Transcript retrieved");

        Ok(transcript)
    }
}

fn ensure_video_url(video_url: &str) -> Result<(), ValidationError> {
    if video_url.trim().is_empty() {
        return Err(ValidationError::EmptyVideoUrl);
    }
    Ok(())
}
