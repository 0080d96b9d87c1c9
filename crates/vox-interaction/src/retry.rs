//! Bounded retry around a completion backend.
//!
//! The retry loop is a plain iteration over attempts: each attempt returns a
//! `Result`, a retryable failure waits and tries again, and the terminal
//! failure carries the attempt count plus the last provider error. Backoff is
//! linear (`backoff * attempt_number`), favoring predictable worst-case
//! latency over exponential growth for a low-QPS interactive tool.

use crate::completion::{CompletionBackend, CompletionError, CompletionRequest, ProviderError};
use std::time::Duration;
use tracing::{debug, warn};
use vox_core::config::{DEFAULT_BACKOFF, DEFAULT_MAX_RETRIES};

/// Wraps a [`CompletionBackend`] with bounded retry and linear backoff.
///
/// A call blocks for at most
/// `(max_retries + 1) * network timeout + backoff * (1 + 2 + ... + max_retries)`;
/// cancellation mid-flight is the caller's concern. No response is cached.
pub struct ResilientClient<B: CompletionBackend> {
    backend: B,
    max_retries: u32,
    backoff: Duration,
}

impl<B: CompletionBackend> ResilientClient<B> {
    /// Creates a client with the workspace default retry budget.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff: DEFAULT_BACKOFF,
        }
    }

    /// Overrides the number of retries after the first attempt.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Overrides the base backoff delay.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Issues the request, retrying retryable failures up to the budget.
    ///
    /// Makes at most `max_retries + 1` attempts. The n-th failed attempt
    /// sleeps `backoff * n` before the next one, or the provider-suggested
    /// `retry-after` delay when that is longer. Non-retryable failures
    /// short-circuit immediately. The terminal error is typed and
    /// distinguishable from a successful empty completion.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let total_attempts = self.max_retries.saturating_add(1);
        let mut last_error: Option<ProviderError> = None;

        for attempt in 1..=total_attempts {
            match self.backend.complete(request).await {
                Ok(text) => {
                    debug!(attempt, model = %request.model, "completion succeeded");
                    return Ok(text);
                }
                Err(err) => {
                    warn!(
                        attempt,
                        total_attempts,
                        model = %request.model,
                        error = %err,
                        "completion attempt failed"
                    );

                    if !err.is_retryable() {
                        return Err(CompletionError {
                            attempts: attempt,
                            last: err,
                        });
                    }

                    let suggested = err.retry_after();
                    last_error = Some(err);

                    if attempt < total_attempts {
                        let delay = self.backoff * attempt;
                        let delay = suggested.filter(|s| *s > delay).unwrap_or(delay);
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(CompletionError {
            attempts: total_attempts,
            last: last_error.expect("loop ran at least once"),
        })
    }
}
