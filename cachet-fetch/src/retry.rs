//! Retry strategy for the default HTTP transport.
//!
//! Retrying is a transport concern: caching strategies issue a single
//! logical call and never re-dial on their own.

use std::time::Duration;

/// Strategy for retrying failed requests.
#[derive(Debug, Clone)]
pub struct RetryStrategy {
    /// Maximum number of attempts (1 = no retries).
    pub max_attempts: u32,
    /// Base delay between retries.
    pub base_delay: Duration,
    /// Whether to use exponential backoff.
    pub exponential_backoff: bool,
    /// Maximum delay between retries.
    pub max_delay: Duration,
}

impl RetryStrategy {
    /// Creates a new retry strategy.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay: Duration::from_millis(500),
            exponential_backoff: true,
            max_delay: Duration::from_secs(30),
        }
    }

    /// Disables retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
            exponential_backoff: false,
            max_delay: Duration::ZERO,
        }
    }

    /// Sets the base delay.
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Enables or disables exponential backoff.
    pub fn with_exponential_backoff(mut self, enabled: bool) -> Self {
        self.exponential_backoff = enabled;
        self
    }

    /// Calculates the delay before the next attempt.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay = if self.exponential_backoff {
            self.base_delay
                .saturating_mul(2_u32.saturating_pow(attempt.saturating_sub(1)))
        } else {
            self.base_delay
        };

        delay.min(self.max_delay)
    }

    /// Determines if a request error should be retried.
    ///
    /// Only connection errors and timeouts are retried; anything the server
    /// actually answered is handed back as a response.
    pub fn should_retry(&self, error: &reqwest::Error) -> bool {
        error.is_connect() || error.is_timeout()
    }
}

impl Default for RetryStrategy {
    fn default() -> Self {
        Self::new(3)
    }
}
