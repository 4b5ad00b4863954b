//! Core configuration types for identifier-space scanning
//!
//! This module contains the main `ScanConfig` struct that defines every
//! parameter a scan, its fetcher and its progress reporting consume.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::{
    DEFAULT_HIT_REPORT_INTERVAL, DEFAULT_JUMP_SIZE, DEFAULT_LANE_SPAN, DEFAULT_MAX_PROBES,
    DEFAULT_PER_PROBE_DELAY_MS, DEFAULT_PROGRESS_INTERVAL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_BACKOFF_MAX_MS, DEFAULT_RETRY_BACKOFF_MS,
    DEFAULT_SAMPLE_HITS, DEFAULT_SPARSE_THRESHOLD, DEFAULT_START_IDENTIFIER,
    DEFAULT_TARGET_HIT_COUNT, DEFAULT_URL_TEMPLATE, DEFAULT_USER_AGENT,
};

/// Shape of the wait between fetch attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackoffKind {
    /// Same wait before every retry
    #[default]
    Fixed,
    /// Wait doubles after each failed attempt, capped at `retry_backoff_max_ms`
    Exponential,
}

/// Main configuration struct for a scan.
///
/// Built once at process start and shared read-only by the scanner,
/// the fetcher and the progress reporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Probe URL with an `{id}` placeholder
    pub(crate) url_template: String,
    pub(crate) user_agent: String,
    pub(crate) start_identifier: u64,
    pub(crate) target_hit_count: usize,
    pub(crate) max_probes: usize,
    pub(crate) per_probe_delay_ms: u64,

    /// Probes without a hit before the scanner leaps ahead
    pub(crate) sparse_threshold: u64,

    /// Identifiers skipped past the normal successor on a sparse jump
    pub(crate) jump_size: u64,

    pub(crate) request_timeout_secs: u64,

    /// Fetch attempts per identifier, the first try included
    pub(crate) retry_attempts: u32,
    pub(crate) retry_backoff_ms: u64,
    pub(crate) retry_backoff: BackoffKind,
    pub(crate) retry_backoff_max_ms: u64,

    /// Concurrent lanes, each owning a disjoint identifier sub-range.
    ///
    /// 1 reproduces the strictly sequential walker.
    pub(crate) lanes: usize,
    pub(crate) lane_span: u64,

    pub(crate) progress_interval: usize,
    pub(crate) hit_report_interval: usize,
    pub(crate) sample_hits: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            start_identifier: DEFAULT_START_IDENTIFIER,
            target_hit_count: DEFAULT_TARGET_HIT_COUNT,
            max_probes: DEFAULT_MAX_PROBES,
            per_probe_delay_ms: DEFAULT_PER_PROBE_DELAY_MS,
            sparse_threshold: DEFAULT_SPARSE_THRESHOLD,
            jump_size: DEFAULT_JUMP_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
            retry_backoff: BackoffKind::Fixed,
            retry_backoff_max_ms: DEFAULT_RETRY_BACKOFF_MAX_MS,
            lanes: 1,
            lane_span: DEFAULT_LANE_SPAN,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            hit_report_interval: DEFAULT_HIT_REPORT_INTERVAL,
            sample_hits: DEFAULT_SAMPLE_HITS,
        }
    }
}

impl ScanConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Keys missing from the file take their defaults. The result goes through
    /// the same validation as `ScanConfigBuilder::build`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// describes an invalid configuration.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reopen a validated configuration for editing.
    ///
    /// The builder starts in the `Complete` state, so `build()` is available
    /// immediately and re-validates any overrides.
    #[must_use]
    pub fn into_builder(self) -> super::ScanConfigBuilder<super::Complete> {
        super::ScanConfigBuilder::from_config(self)
    }
}
