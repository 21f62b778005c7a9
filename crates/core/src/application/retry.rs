// Retry logic for store cycles
use crate::error::{AppError, Result};
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

/// Default attempts per cycle (first try included)
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default base delay between attempts
pub const DEFAULT_BASE_DELAY_MS: u64 = 20;

/// Default ceiling for a single backoff sleep
///
/// Mutating cycles sleep while holding the queue's lock, so this bounds how
/// long one failing request can stall the queue between attempts.
pub const DEFAULT_MAX_DELAY_MS: u64 = 1_000;

/// Retry decision result
#[derive(Debug, PartialEq, Eq)]
pub enum RetryDecision {
    /// Run the cycle again after this many ms
    Retry(u64),
    /// Surface the error to the caller
    GiveUp,
}

/// Bounded retry policy for fetch-apply-replace cycles
///
/// Determines if a failed cycle should be re-run based on:
/// - Whether the error is retryable at all (storage fault or version conflict)
/// - Current attempt count
/// - Backoff factor for exponential delay, capped at `max_delay_ms`
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
    backoff_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_BASE_DELAY_MS)
    }
}

impl RetryPolicy {
    /// Create a new retry policy
    ///
    /// # Arguments
    /// * `max_attempts` - Total attempts including the first one (min 1)
    /// * `base_delay_ms` - Delay before the first retry
    pub fn new(max_attempts: u32, base_delay_ms: u64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay_ms,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
            backoff_factor: 2.0,
        }
    }

    /// Override the per-sleep ceiling
    pub fn with_max_delay(mut self, max_delay_ms: u64) -> Self {
        self.max_delay_ms = max_delay_ms;
        self
    }

    /// Policy that never retries
    pub fn no_retry() -> Self {
        Self::new(1, 0)
    }

    /// Decide what to do after `attempt` (1-based) failed with `err`
    ///
    /// Backoff formula:
    /// delay = min(base_delay * (backoff_factor ^ (attempt - 1)) * (1.0 ± 0.1), max_delay)
    pub fn should_retry(&self, attempt: u32, err: &AppError) -> RetryDecision {
        if !err.is_retryable() {
            return RetryDecision::GiveUp;
        }

        if attempt >= self.max_attempts {
            warn!(
                attempt = attempt,
                max_attempts = self.max_attempts,
                error = %err,
                "Max retry attempts reached"
            );
            return RetryDecision::GiveUp;
        }

        let exponent = attempt.saturating_sub(1) as i32;
        let base_delay_ms = self.base_delay_ms as f64 * self.backoff_factor.powi(exponent);

        // ±10% jitter so colliding writers do not retry in lockstep
        let jitter_factor = rand::thread_rng().gen_range(0.9..=1.1);
        let delay_ms = ((base_delay_ms * jitter_factor) as u64).min(self.max_delay_ms);

        RetryDecision::Retry(delay_ms)
    }

    /// Run `attempt_fn` until it succeeds, fails terminally, or attempts run out
    pub async fn run<T, F, Fut>(&self, operation: &str, mut attempt_fn: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 1;
        loop {
            let err = match attempt_fn().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            match self.should_retry(attempt, &err) {
                RetryDecision::Retry(delay_ms) => {
                    info!(
                        operation = operation,
                        attempt = attempt,
                        delay_ms = delay_ms,
                        error = %err,
                        "Retrying queue cycle"
                    );
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    attempt += 1;
                }
                RetryDecision::GiveUp => return Err(err),
            }
        }
    }
}
