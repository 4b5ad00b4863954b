//! Seek-and-scan engine
//!
//! A `Scanner` walks the identifier space in one or more lanes. Each lane
//! runs the same loop: reserve a probe from the shared budget, fetch, extract,
//! advance its cursor (jumping over sparse runs), sleep the per-probe delay.
//! With a single lane this is the strictly sequential walker; with several,
//! lanes own disjoint sub-ranges and coordinate only through `ScanBudget`.

use futures::future::join_all;
use std::time::Instant;
use tracing::debug;

use super::budget::ScanBudget;
use super::cursor::ScanCursor;
use super::progress::{NoOpProgress, ProbeEvent, ScanProgress};
use super::scan_types::{Advance, ProbeOutcome, ScanMode, ScanOutcome, ScanReport, ScanSummary};
use crate::config::ScanConfig;
use crate::fetcher::ResourceFetcher;
use crate::page_extractor::{Record, extract_record};

/// What one lane produced
#[derive(Debug, Default)]
struct LaneResult {
    records: Vec<Record>,
    jumps: usize,
}

/// Identifier-space scanner over a `ResourceFetcher`
pub struct Scanner<F, P = NoOpProgress> {
    config: ScanConfig,
    fetcher: F,
    progress: P,
}

impl<F: ResourceFetcher> Scanner<F, NoOpProgress> {
    #[must_use]
    pub fn new(config: ScanConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            progress: NoOpProgress,
        }
    }
}

impl<F: ResourceFetcher, P: ScanProgress> Scanner<F, P> {
    /// Replace the progress reporter
    #[must_use]
    pub fn with_progress<Q: ScanProgress>(self, progress: Q) -> Scanner<F, Q> {
        Scanner {
            config: self.config,
            fetcher: self.fetcher,
            progress,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    #[must_use]
    pub fn progress(&self) -> &P {
        &self.progress
    }

    /// Run the scan to completion.
    ///
    /// Never fails: individual probe failures are misses, and both ways of
    /// stopping (target reached, budget exhausted) return the records found.
    pub async fn run(&self) -> ScanReport {
        let started = Instant::now();
        self.progress.report_started(&self.config);

        let budget = ScanBudget::new(self.config.max_probes(), self.config.target_hit_count());
        let lanes = join_all(
            self.lane_cursors()
                .into_iter()
                .enumerate()
                .map(|(lane, cursor)| self.run_lane(lane, cursor, &budget)),
        )
        .await;

        let mut records = Vec::with_capacity(budget.hits());
        let mut jumps = 0;
        for lane in lanes {
            jumps += lane.jumps;
            records.extend(lane.records);
        }

        let probes = budget.probes();
        let hits = records.len();
        let summary = ScanSummary {
            probes,
            hits,
            misses: probes.saturating_sub(hits),
            jumps,
            fetch_attempts: self.fetcher.attempts_issued(),
            outcome: if budget.target_reached() {
                ScanOutcome::TargetReached
            } else {
                ScanOutcome::BudgetExhausted
            },
            elapsed: started.elapsed(),
        };

        self.progress.report_completed(&summary);
        ScanReport { records, summary }
    }

    /// One cursor per lane; every lane but the last is bounded to `lane_span`
    fn lane_cursors(&self) -> Vec<ScanCursor> {
        let lanes = self.config.lanes().max(1);
        let span = self.config.lane_span();
        (0..lanes)
            .map(|lane| {
                let start = self
                    .config
                    .start_identifier()
                    .saturating_add(span.saturating_mul(lane as u64));
                let cursor = ScanCursor::new(
                    start,
                    self.config.sparse_threshold(),
                    self.config.jump_size(),
                );
                if lane + 1 < lanes {
                    cursor.with_end(start.saturating_add(span))
                } else {
                    cursor
                }
            })
            .collect()
    }

    async fn run_lane(&self, lane: usize, mut cursor: ScanCursor, budget: &ScanBudget) -> LaneResult {
        let delay = self.config.per_probe_delay();
        let mut result = LaneResult::default();
        let mut mode = ScanMode::Scanning;

        loop {
            mode = match mode {
                ScanMode::Done => break,
                ScanMode::SparseJumping { from, to } => {
                    result.jumps += 1;
                    self.progress.report_jump(lane, from, to);
                    ScanMode::Scanning
                }
                ScanMode::Scanning => {
                    if cursor.is_exhausted() {
                        debug!(lane, end = ?cursor.end(), "lane range exhausted");
                        ScanMode::Done
                    } else if let Some(probe_ordinal) = budget.try_reserve_probe() {
                        let identifier = cursor.identifier();
                        let mut target_filled_elsewhere = false;

                        let outcome = match self.probe(identifier).await {
                            Ok(record) => match budget.try_reserve_hit() {
                                Some(hit_ordinal) => {
                                    self.progress.report_hit(&record, hit_ordinal);
                                    result.records.push(record);
                                    ProbeOutcome::Hit
                                }
                                None => {
                                    debug!(lane, identifier, "target already filled; discarding hit");
                                    target_filled_elsewhere = true;
                                    ProbeOutcome::Hit
                                }
                            },
                            Err(miss) => miss,
                        };

                        let advance = cursor.advance(outcome);
                        debug!(lane, identifier, %outcome, next = advance.next(), "probe");
                        self.progress.report_probe(&ProbeEvent {
                            lane,
                            identifier,
                            outcome,
                            probes: probe_ordinal,
                            hits: budget.hits(),
                        });

                        if !delay.is_zero() {
                            tokio::time::sleep(delay).await;
                        }

                        match advance {
                            _ if target_filled_elsewhere => ScanMode::Done,
                            Advance::Jump { from, to } => ScanMode::SparseJumping { from, to },
                            Advance::Step { .. } => ScanMode::Scanning,
                        }
                    } else {
                        ScanMode::Done
                    }
                }
            };
        }

        debug!(
            lane,
            probes = cursor.probes(),
            hits = cursor.hits(),
            kept = result.records.len(),
            "lane finished"
        );
        result
    }

    /// Fetch and extract one identifier; any failure is a miss
    async fn probe(&self, identifier: u64) -> Result<Record, ProbeOutcome> {
        match self.fetcher.fetch(identifier).await {
            Ok(page) => extract_record(&page.body).ok_or(ProbeOutcome::Unparsed),
            Err(error) => {
                debug!(identifier, %error, "fetch failed");
                Err(ProbeOutcome::Unreachable)
            }
        }
    }
}
