use crate::retry::RetryConfig;

/// Process-wide summarizer settings; fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizerConfig {
    /// Upper bound accepted for a request's `max_points`
    pub max_points_limit: usize,
    pub retry: RetryConfig,
}

impl SummarizerConfig {
    pub const DEFAULT_MAX_POINTS_LIMIT: usize = 10;
    pub const DEFAULT_MAX_POINTS: usize = 5;
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            max_points_limit: Self::DEFAULT_MAX_POINTS_LIMIT,
            retry: RetryConfig::default(),
        }
    }
}
