//! Resource fetching for identifier probes
//!
//! The scanner only sees the `ResourceFetcher` contract: one identifier in,
//! one page (or a `FetchError`) out. `HttpFetcher` is the network
//! implementation; `RetryingFetcher` adds a bounded retry policy around any
//! fetcher.

pub mod errors;
pub mod http;
pub mod retry;

use std::future::Future;

pub use errors::FetchError;
pub use http::HttpFetcher;
pub use retry::{Backoff, RetryOutcome, RetryPolicy, Retryable, RetryingFetcher};

/// A fetched resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Identifier the page was requested for
    pub identifier: u64,
    /// HTTP status code of the response
    pub status: u16,
    /// Response body decoded as text
    pub body: String,
}

/// Fetch the resource behind one identifier.
///
/// Implementations must report every unusable response (network failure,
/// timeout, non-success status) as a `FetchError`; the scanner counts those as
/// misses and moves on.
pub trait ResourceFetcher: Send + Sync {
    fn fetch(
        &self,
        identifier: u64,
    ) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;

    /// Raw fetch attempts issued so far, retries included, if tracked
    fn attempts_issued(&self) -> Option<u64> {
        None
    }
}

impl<F: ResourceFetcher> ResourceFetcher for std::sync::Arc<F> {
    fn fetch(
        &self,
        identifier: u64,
    ) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send {
        (**self).fetch(identifier)
    }

    fn attempts_issued(&self) -> Option<u64> {
        (**self).attempts_issued()
    }
}
