use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Video metadata carried through the pipeline untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Duration in whole seconds
    pub duration: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_url: String,
    pub upload_date: DateTime<Utc>,
    pub view_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// A transcript as returned by the retrieval side: timed caption segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoTranscript {
    pub video_info: VideoInfo,
    #[serde(default)]
    pub segments: Vec<TranscriptSegment>,
}

impl VideoTranscript {
    /// Segment texts joined by a single space.
    pub fn full_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.trim())
            .filter(|text| !text.is_empty())
            .join(" ")
    }
}

/// Read-only input to the summarizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptInput {
    pub video_id: String,
    pub video_metadata: VideoInfo,
    pub full_text: String,
}

impl TranscriptInput {
    pub fn new(video_metadata: VideoInfo, full_text: impl Into<String>) -> Self {
        Self {
            video_id: video_metadata.id.clone(),
            video_metadata,
            full_text: full_text.into(),
        }
    }
}

impl From<VideoTranscript> for TranscriptInput {
    fn from(transcript: VideoTranscript) -> Self {
        let full_text = transcript.full_text();
        TranscriptInput::new(transcript.video_info, full_text)
    }
}
