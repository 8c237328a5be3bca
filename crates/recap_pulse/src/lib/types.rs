use std::fmt;

use chrono::{DateTime, Utc};
use recap_transcript::{TranscriptInput, VideoInfo};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Position of a provider in the fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderTier {
    Primary,
    Secondary,
}

impl fmt::Display for ProviderTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderTier::Primary => f.write_str("primary"),
            ProviderTier::Secondary => f.write_str("secondary"),
        }
    }
}

/// Unstructured text returned by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub raw_text: String,
}

impl ProviderResponse {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }
}

/// A transcript paired with a point count that has been checked against the
/// configured limit.
#[derive(Debug, Clone)]
pub struct SummarizationRequest<'a> {
    transcript: &'a TranscriptInput,
    max_points: usize,
}

impl<'a> SummarizationRequest<'a> {
    pub fn new(
        transcript: &'a TranscriptInput,
        max_points: usize,
        max_points_limit: usize,
    ) -> Result<Self, ValidationError> {
        validate_max_points(max_points, max_points_limit)?;
        if transcript.video_id.trim().is_empty() {
            return Err(ValidationError::EmptyVideoId);
        }

        Ok(Self {
            transcript,
            max_points,
        })
    }

    pub fn transcript(&self) -> &TranscriptInput {
        self.transcript
    }

    pub fn max_points(&self) -> usize {
        self.max_points
    }
}

/// Checks `max_points` against the inclusive range `1..=max_points_limit`.
pub(crate) fn validate_max_points(
    max_points: usize,
    max_points_limit: usize,
) -> Result<(), ValidationError> {
    if (1..=max_points_limit).contains(&max_points) {
        Ok(())
    } else {
        Err(ValidationError::MaxPointsOutOfRange {
            value: max_points,
            max: max_points_limit,
        })
    }
}

/// Terminal output of one successful summarization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub video_info: VideoInfo,
    pub summary_points: Vec<String>,
    pub full_summary: String,
    pub generated_at: DateTime<Utc>,
    pub provider: ProviderTier,
}
