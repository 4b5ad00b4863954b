//! Bounded retry policy for probe fetches
//!
//! A `RetryPolicy` runs an async operation up to `max_attempts` times,
//! sleeping between attempts according to its `Backoff`, and returns a tagged
//! `RetryOutcome` instead of propagating the error. `RetryingFetcher` applies
//! a policy around any `ResourceFetcher`.

use log::debug;
use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::{FetchError, FetchedPage, ResourceFetcher};
use crate::config::{BackoffKind, ScanConfig};

/// Errors that know whether another attempt could help
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

/// Wait between consecutive attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Same wait every time
    Fixed(Duration),
    /// `base * 2^(n-1)` after the n-th failure, never above `max`
    Exponential { base: Duration, max: Duration },
}

impl Backoff {
    /// Delay to wait after `failed_attempts` failures (1-based)
    #[must_use]
    pub fn delay_for(&self, failed_attempts: u32) -> Duration {
        match *self {
            Self::Fixed(delay) => delay,
            Self::Exponential { base, max } => {
                let shift = failed_attempts.saturating_sub(1).min(31);
                base.saturating_mul(1u32 << shift).min(max)
            }
        }
    }
}

/// Result of running an operation under a `RetryPolicy`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryOutcome<T, E> {
    Success { value: T, attempts: u32 },
    Failure { error: E, attempts: u32 },
}

impl<T, E> RetryOutcome<T, E> {
    /// Number of attempts actually made
    #[must_use]
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Success { attempts, .. } | Self::Failure { attempts, .. } => *attempts,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Drop the attempt count and return a plain `Result`
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success { value, .. } => Ok(value),
            Self::Failure { error, .. } => Err(error),
        }
    }
}

/// Attempt budget plus backoff shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Backoff,
}

impl RetryPolicy {
    /// `max_attempts` is clamped to at least one attempt
    #[must_use]
    pub fn new(max_attempts: u32, backoff: Backoff) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Single attempt, no waiting
    #[must_use]
    pub fn none() -> Self {
        Self::new(1, Backoff::Fixed(Duration::ZERO))
    }

    #[must_use]
    pub fn from_config(config: &ScanConfig) -> Self {
        let backoff = match config.retry_backoff_kind() {
            BackoffKind::Fixed => Backoff::Fixed(config.retry_backoff()),
            BackoffKind::Exponential => Backoff::Exponential {
                base: config.retry_backoff(),
                max: config.retry_backoff_max(),
            },
        };
        Self::new(config.retry_attempts(), backoff)
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub fn backoff(&self) -> Backoff {
        self.backoff
    }

    /// Run `operation` until it succeeds, fails permanently, or the attempt
    /// budget is spent. The closure receives the 1-based attempt number.
    pub async fn run<T, E, F, Fut>(&self, mut operation: F) -> RetryOutcome<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Retryable + Display,
    {
        let mut attempt = 1;
        loop {
            match operation(attempt).await {
                Ok(value) => {
                    return RetryOutcome::Success {
                        value,
                        attempts: attempt,
                    };
                }
                Err(error) => {
                    if attempt >= self.max_attempts || !error.is_retryable() {
                        debug!("Giving up after {attempt} attempt(s): {error}");
                        return RetryOutcome::Failure {
                            error,
                            attempts: attempt,
                        };
                    }

                    let delay = self.backoff.delay_for(attempt);
                    debug!(
                        "Attempt {attempt}/{} failed: {error}; retrying in {delay:?}",
                        self.max_attempts
                    );
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    attempt += 1;
                }
            }
        }
    }
}

/// Decorates a fetcher with a `RetryPolicy` and counts raw attempts
#[derive(Debug)]
pub struct RetryingFetcher<F> {
    inner: F,
    policy: RetryPolicy,
    attempts: AtomicU64,
}

impl<F: ResourceFetcher> RetryingFetcher<F> {
    #[must_use]
    pub fn new(inner: F, policy: RetryPolicy) -> Self {
        Self {
            inner,
            policy,
            attempts: AtomicU64::new(0),
        }
    }

    /// Total fetch attempts issued so far, retries included
    #[must_use]
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    #[must_use]
    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: ResourceFetcher> ResourceFetcher for RetryingFetcher<F> {
    async fn fetch(&self, identifier: u64) -> Result<FetchedPage, FetchError> {
        let outcome = self
            .policy
            .run(|_attempt| {
                self.attempts.fetch_add(1, Ordering::Relaxed);
                self.inner.fetch(identifier)
            })
            .await;

        if let RetryOutcome::Failure { error, attempts } = &outcome
            && *attempts > 1
        {
            debug!("Identifier {identifier} failed after {attempts} attempts: {error}");
        }
        outcome.into_result()
    }

    fn attempts_issued(&self) -> Option<u64> {
        Some(self.attempts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponential_backoff_doubles_and_caps() {
        let backoff = Backoff::Exponential {
            base: Duration::from_millis(100),
            max: Duration::from_millis(350),
        };
        assert_eq!(backoff.delay_for(1), Duration::from_millis(100));
        assert_eq!(backoff.delay_for(2), Duration::from_millis(200));
        assert_eq!(backoff.delay_for(3), Duration::from_millis(350));
        assert_eq!(backoff.delay_for(40), Duration::from_millis(350));
    }

    #[test]
    fn fixed_backoff_is_constant() {
        let backoff = Backoff::Fixed(Duration::from_millis(600));
        assert_eq!(backoff.delay_for(1), backoff.delay_for(5));
    }

    #[test]
    fn policy_never_allows_zero_attempts() {
        assert_eq!(RetryPolicy::new(0, Backoff::Fixed(Duration::ZERO)).max_attempts(), 1);
    }
}
