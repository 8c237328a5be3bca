use std::sync::{Arc, Mutex};

use recap_transcript::{TranscriptSegment, TranscriptSource, VideoInfo, VideoTranscript};

#[derive(Clone)]
pub struct MockTranscriptSource {
    pub transcript: VideoTranscript,
    pub has_transcript: bool,
    /// Number of leading calls that fail before the source recovers
    pub failures_before_success: usize,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockTranscriptSource {
    pub fn new(video_id: &str, texts: &[&str]) -> Self {
        let segments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| TranscriptSegment {
                start: i as f64 * 5.0,
                end: (i + 1) as f64 * 5.0,
                text: text.to_string(),
            })
            .collect();

        Self {
            transcript: VideoTranscript {
                video_info: VideoInfo {
                    id: video_id.to_string(),
                    title: format!("Video {video_id}"),
                    author: "Mock Channel".into(),
                    duration: 600,
                    ..Default::default()
                },
                segments,
            },
            has_transcript: true,
            failures_before_success: 0,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn without_transcript(mut self) -> Self {
        self.has_transcript = false;
        self
    }

    pub fn flaky(mut self, failures_before_success: usize) -> Self {
        self.failures_before_success = failures_before_success;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> anyhow::Result<()> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        if calls.len() <= self.failures_before_success {
            anyhow::bail!("transcript backend unavailable");
        }
        Ok(())
    }
}

impl TranscriptSource for MockTranscriptSource {
    async fn get_video_info(&self, video_url: &str) -> anyhow::Result<VideoInfo> {
        self.record(format!("info {video_url}"))?;
        Ok(self.transcript.video_info.clone())
    }

    async fn get_transcript(&self, video_url: &str) -> anyhow::Result<VideoTranscript> {
        self.record(format!("transcript {video_url}"))?;
        Ok(self.transcript.clone())
    }

    async fn has_transcript(&self, video_url: &str) -> anyhow::Result<bool> {
        self.record(format!("has_transcript {video_url}"))?;
        Ok(self.has_transcript)
    }
}
