//! Getter methods for `ScanConfig`
//!
//! This module provides all the accessor methods for retrieving configuration
//! values from a `ScanConfig` instance.

use std::time::Duration;

use super::types::{BackoffKind, ScanConfig};

impl ScanConfig {
    #[must_use]
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn start_identifier(&self) -> u64 {
        self.start_identifier
    }

    #[must_use]
    pub fn target_hit_count(&self) -> usize {
        self.target_hit_count
    }

    #[must_use]
    pub fn max_probes(&self) -> usize {
        self.max_probes
    }

    #[must_use]
    pub fn per_probe_delay(&self) -> Duration {
        Duration::from_millis(self.per_probe_delay_ms)
    }

    #[must_use]
    pub fn sparse_threshold(&self) -> u64 {
        self.sparse_threshold
    }

    #[must_use]
    pub fn jump_size(&self) -> u64 {
        self.jump_size
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn retry_attempts(&self) -> u32 {
        self.retry_attempts
    }

    #[must_use]
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    #[must_use]
    pub fn retry_backoff_kind(&self) -> BackoffKind {
        self.retry_backoff
    }

    #[must_use]
    pub fn retry_backoff_max(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_max_ms)
    }

    #[must_use]
    pub fn lanes(&self) -> usize {
        self.lanes
    }

    #[must_use]
    pub fn lane_span(&self) -> u64 {
        self.lane_span
    }

    #[must_use]
    pub fn progress_interval(&self) -> usize {
        self.progress_interval
    }

    #[must_use]
    pub fn hit_report_interval(&self) -> usize {
        self.hit_report_interval
    }

    #[must_use]
    pub fn sample_hits(&self) -> usize {
        self.sample_hits
    }
}
