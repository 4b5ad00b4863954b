//! Progress reporting abstraction for scans
//!
//! Defines the `ScanProgress` trait for lifecycle event reporting and provides
//! a no-op implementation plus the interval-based `LogProgress` used by the
//! command-line tool. Reports carry counts only, never per-probe error detail.

use tracing::info;

use super::scan_types::{ProbeOutcome, ScanSummary};
use crate::config::ScanConfig;
use crate::page_extractor::Record;

/// One finished probe, as seen by a progress reporter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeEvent {
    pub lane: usize,
    pub identifier: u64,
    pub outcome: ProbeOutcome,
    /// Probes issued across all lanes, this one included
    pub probes: usize,
    /// Hits kept across all lanes so far
    pub hits: usize,
}

/// Trait for reporting scan progress at key lifecycle events
///
/// Implementations can log, update a UI, or record events for tests.
pub trait ScanProgress: Send + Sync {
    /// Report that the scan is starting
    fn report_started(&self, config: &ScanConfig);

    /// Report a finished probe
    fn report_probe(&self, event: &ProbeEvent);

    /// Report a kept record; `hits` is its 1-based ordinal
    fn report_hit(&self, record: &Record, hits: usize);

    /// Report a sparse-range jump
    fn report_jump(&self, lane: usize, from: u64, to: u64);

    /// Report the final summary
    fn report_completed(&self, summary: &ScanSummary);
}

/// Progress reporter that does nothing
///
/// All methods are no-ops and will be inlined away by the compiler.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpProgress;

impl ScanProgress for NoOpProgress {
    #[inline(always)]
    fn report_started(&self, _config: &ScanConfig) {}

    #[inline(always)]
    fn report_probe(&self, _event: &ProbeEvent) {}

    #[inline(always)]
    fn report_hit(&self, _record: &Record, _hits: usize) {}

    #[inline(always)]
    fn report_jump(&self, _lane: usize, _from: u64, _to: u64) {}

    #[inline(always)]
    fn report_completed(&self, _summary: &ScanSummary) {}
}

/// Summary-level log lines at fixed intervals
#[derive(Debug, Clone)]
pub struct LogProgress {
    progress_interval: usize,
    hit_report_interval: usize,
    sample_hits: usize,
    target_hits: usize,
}

impl LogProgress {
    #[must_use]
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            progress_interval: config.progress_interval(),
            hit_report_interval: config.hit_report_interval(),
            sample_hits: config.sample_hits(),
            target_hits: config.target_hit_count(),
        }
    }
}

/// `count` is a positive multiple of `interval` (interval 0 disables)
fn on_interval(count: usize, interval: usize) -> bool {
    interval > 0 && count > 0 && count % interval == 0
}

impl ScanProgress for LogProgress {
    fn report_started(&self, config: &ScanConfig) {
        info!(
            start = config.start_identifier(),
            target = config.target_hit_count(),
            max_probes = config.max_probes(),
            lanes = config.lanes(),
            "[start] seeking from {} for {} rows (max_scan={})",
            config.start_identifier(),
            config.target_hit_count(),
            config.max_probes()
        );
    }

    fn report_probe(&self, event: &ProbeEvent) {
        if on_interval(event.probes, self.progress_interval) {
            info!(
                "[progress] scanned ~{}, found {} (last id {})",
                event.probes, event.hits, event.identifier
            );
        }
    }

    fn report_hit(&self, record: &Record, hits: usize) {
        if hits <= self.sample_hits {
            info!("[sample] {record:?}");
        }
        if on_interval(hits, self.hit_report_interval) {
            info!(
                "[found] {}/{} (id {})",
                hits, self.target_hits, record.identifier
            );
        }
    }

    fn report_jump(&self, lane: usize, from: u64, to: u64) {
        info!(lane, "[jump] sparse range detected; jumping from {from} -> {to}");
    }

    fn report_completed(&self, summary: &ScanSummary) {
        info!(
            outcome = %summary.outcome,
            jumps = summary.jumps,
            fetch_attempts = ?summary.fetch_attempts,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "[done] scanned ~{}, found {}",
            summary.probes,
            summary.hits
        );
    }
}

#[cfg(test)]
mod tests {
    use super::on_interval;

    #[test]
    fn interval_zero_is_disabled() {
        assert!(!on_interval(400, 0));
        assert!(on_interval(800, 400));
        assert!(!on_interval(0, 400));
        assert!(!on_interval(401, 400));
    }
}
