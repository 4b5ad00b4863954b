//! Simple async scan execution
//!
//! Wires the network fetcher, the configured retry policy and log-based
//! progress reporting around a `Scanner`.

use anyhow::Result;

use super::progress::LogProgress;
use super::scan_types::ScanReport;
use super::scanner::Scanner;
use crate::config::ScanConfig;
use crate::fetcher::{HttpFetcher, RetryPolicy, RetryingFetcher};

/// Scan over HTTP with retries and summary logging.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be built; the scan itself
/// never fails.
pub async fn scan_impl(config: ScanConfig) -> Result<ScanReport> {
    let fetcher = RetryingFetcher::new(
        HttpFetcher::from_config(&config)?,
        RetryPolicy::from_config(&config),
    );
    let progress = LogProgress::from_config(&config);

    Ok(Scanner::new(config, fetcher)
        .with_progress(progress)
        .run()
        .await)
}
