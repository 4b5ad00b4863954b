//! Shared configuration constants for barscan
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Licensee detail page on the State Bar of California directory.
///
/// `{id}` is replaced by the bar number being probed.
pub const DEFAULT_URL_TEMPLATE: &str = "https://apps.calbar.ca.gov/attorney/Licensee/Detail/{id}";

/// Identifying user agent sent with every probe
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (portfolio-scraper; CA Bar directory; educational use)";

/// Starting bar number for a fresh scan.
///
/// Any known-valid bar number works; the scanner walks upward from here.
pub const DEFAULT_START_IDENTIFIER: u64 = 48_697;

/// Starting identifier for the single-probe diagnostic
pub const DEFAULT_PROBE_IDENTIFIER: u64 = 150_000;

/// Number of records to collect before stopping
pub const DEFAULT_TARGET_HIT_COUNT: usize = 1_000;

/// Hard stop after this many probes
pub const DEFAULT_MAX_PROBES: usize = 250_000;

/// Politeness delay after every probe: 280 ms
///
/// Applied per lane, so concurrent lanes multiply the request rate.
pub const DEFAULT_PER_PROBE_DELAY_MS: u64 = 280;

/// Consecutive unproductive probes before the scanner treats the region as sparse
pub const DEFAULT_SPARSE_THRESHOLD: u64 = 1_500;

/// Identifiers skipped on a sparse jump
pub const DEFAULT_JUMP_SIZE: u64 = 10_000;

/// Per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 7;

/// Fetch attempts per identifier (first try included)
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 2;

/// Fixed wait between fetch attempts: 600 ms
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 600;

/// Ceiling for exponential backoff
pub const DEFAULT_RETRY_BACKOFF_MAX_MS: u64 = 10_000;

/// Identifiers owned by each lane when scanning concurrently
pub const DEFAULT_LANE_SPAN: u64 = 100_000;

/// Probes between `[progress]` lines
pub const DEFAULT_PROGRESS_INTERVAL: usize = 400;

/// Hits between `[found]` lines
pub const DEFAULT_HIT_REPORT_INTERVAL: usize = 25;

/// Leading hits logged in full as a sanity preview
pub const DEFAULT_SAMPLE_HITS: usize = 3;
