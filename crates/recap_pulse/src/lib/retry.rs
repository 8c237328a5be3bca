//! Bounded retry with exponential backoff for outbound calls.

use std::{fmt::Display, future::Future, time::Duration};

#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Retries after the first attempt; an operation runs at most `max_retries + 1` times
    pub max_retries: u32,
    pub base_delay: Duration,
    pub backoff_multiplier: f64,
    /// Cap applied to every computed delay
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(500),
            backoff_multiplier: 2.0,
            max_delay: Duration::from_secs(10),
        }
    }
}

/// Stateless retry executor; each [`RetryPolicy::execute`] call keeps its own
/// attempt counter.
#[derive(Debug, Clone, Default)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Policy that runs the operation exactly once.
    pub fn no_retry() -> Self {
        Self::new(RetryConfig {
            max_retries: 0,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Delay before the retry that follows failed attempt number `attempt` (0-based):
    /// `min(base * multiplier^attempt, max_delay)`, in whole milliseconds.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let base_ms = self.config.base_delay.as_millis() as f64;
        let max_ms = self.config.max_delay.as_millis() as f64;
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let delay_ms = (base_ms * self.config.backoff_multiplier.powi(exponent)).round();

        // NaN and infinity both collapse onto the cap
        if delay_ms.is_finite() && delay_ms < max_ms {
            Duration::from_millis(delay_ms.max(0.0) as u64)
        } else {
            self.config.max_delay
        }
    }

    /// Runs `op` until it succeeds or the retry budget is spent, sleeping
    /// between attempts. The last error is returned as is.
    pub async fn execute<T, E, F, Fut>(&self, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut attempt = 0;
        loop {
            match op().await {
                Ok(value) => {
                    if attempt > 0 {
                        tracing::info!(attempt, "Operation succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(e) if attempt < self.config.max_retries => {
                    let delay = self.delay_for(attempt);
                    tracing::warn!(
                        error = %e,
                        attempt,
                        max_retries = self.config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "Attempt failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!(error = %e, attempt, "Retries exhausted");
                    return Err(e);
                }
            }
        }
    }
}
