use crate::{FallbackSummarizer, RetryConfig, SummarizerConfig, TextGenerator};

pub struct FallbackSummarizerBuilder<P = (), S = ()> {
    primary: P,
    secondary: S,
    config: SummarizerConfig,
}

impl FallbackSummarizerBuilder {
    pub fn new() -> Self {
        Self {
            primary: (),
            secondary: (),
            config: SummarizerConfig::default(),
        }
    }
}

impl Default for FallbackSummarizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, S> FallbackSummarizerBuilder<P, S> {
    pub fn primary<P2: TextGenerator + Send + Sync + 'static>(
        self,
        primary: P2,
    ) -> FallbackSummarizerBuilder<P2, S> {
        FallbackSummarizerBuilder {
            primary,
            secondary: self.secondary,
            config: self.config,
        }
    }

    pub fn secondary<S2: TextGenerator + Send + Sync + 'static>(
        self,
        secondary: S2,
    ) -> FallbackSummarizerBuilder<P, S2> {
        FallbackSummarizerBuilder {
            primary: self.primary,
            secondary,
            config: self.config,
        }
    }

    pub fn config(mut self, config: SummarizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.config.retry = retry;
        self
    }

    pub fn max_points_limit(mut self, max_points_limit: usize) -> Self {
        self.config.max_points_limit = max_points_limit;
        self
    }
}

impl<P, S> FallbackSummarizerBuilder<P, S>
where
    P: TextGenerator + Send + Sync + 'static,
    S: TextGenerator + Send + Sync + 'static,
{
    pub fn build(self) -> FallbackSummarizer<P, S> {
        FallbackSummarizer::new(self.primary, self.secondary, self.config)
    }
}
