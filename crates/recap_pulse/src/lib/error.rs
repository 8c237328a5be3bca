/// Failure of a single call to a text-generation provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    /// HTTP status of the failed call, when the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Request(e) => e.status().map(|s| s.as_u16()),
            ProviderError::Api { status, .. } => Some(*status),
            ProviderError::MalformedResponse(_) => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ProviderError::Request(e) if e.is_timeout())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("max points must be between 1 and {max}, got {value}")]
    MaxPointsOutOfRange { value: usize, max: usize },
    #[error("video url is required")]
    EmptyVideoUrl,
    #[error("transcript has no video id")]
    EmptyVideoId,
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),
    #[error("All providers failed, last error: {source}")]
    Exhausted {
        #[source]
        source: ProviderError,
    },
    #[error("Transcript unavailable for {video_url}")]
    TranscriptUnavailable { video_url: String },
    #[error("Failed to retrieve transcript: {0:#}")]
    Transcript(anyhow::Error),
}
