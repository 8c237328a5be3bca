use std::future::Future;

use crate::{VideoInfo, VideoTranscript};

/// Retrieval side of the system: metadata and captions for a video URL.
pub trait TranscriptSource {
    fn get_video_info(
        &self,
        video_url: &str,
    ) -> impl Future<Output = anyhow::Result<VideoInfo>> + Send;

    fn get_transcript(
        &self,
        video_url: &str,
    ) -> impl Future<Output = anyhow::Result<VideoTranscript>> + Send;

    fn has_transcript(
        &self,
        video_url: &str,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

impl<T: TranscriptSource + Send + Sync> TranscriptSource for &T {
    async fn get_video_info(&self, video_url: &str) -> anyhow::Result<VideoInfo> {
        (**self).get_video_info(video_url).await
    }

    async fn get_transcript(&self, video_url: &str) -> anyhow::Result<VideoTranscript> {
        (**self).get_transcript(video_url).await
    }

    async fn has_transcript(&self, video_url: &str) -> anyhow::Result<bool> {
        (**self).has_transcript(video_url).await
    }
}
