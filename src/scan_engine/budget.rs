//! Shared probe and hit budget
//!
//! Every lane reserves a probe slot before fetching and a hit slot before
//! keeping a record. Reservations are compare-and-swap loops, so neither
//! `max_probes` nor `target_hit_count` can be overshot however many lanes
//! race on them.

use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
pub struct ScanBudget {
    probes: AtomicUsize,
    hits: AtomicUsize,
    max_probes: usize,
    target_hits: usize,
}

impl ScanBudget {
    #[must_use]
    pub fn new(max_probes: usize, target_hits: usize) -> Self {
        Self {
            probes: AtomicUsize::new(0),
            hits: AtomicUsize::new(0),
            max_probes,
            target_hits,
        }
    }

    /// Reserve the next probe. Returns its 1-based ordinal, or `None` once
    /// the target is met or the probe budget is spent.
    pub fn try_reserve_probe(&self) -> Option<usize> {
        if self.target_reached() {
            return None;
        }
        self.probes
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |issued| {
                (issued < self.max_probes).then_some(issued + 1)
            })
            .ok()
            .map(|previous| previous + 1)
    }

    /// Reserve a hit slot. Returns the 1-based hit ordinal, or `None` when
    /// the target was already filled by another lane.
    pub fn try_reserve_hit(&self) -> Option<usize> {
        self.hits
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |found| {
                (found < self.target_hits).then_some(found + 1)
            })
            .ok()
            .map(|previous| previous + 1)
    }

    #[must_use]
    pub fn target_reached(&self) -> bool {
        self.hits.load(Ordering::SeqCst) >= self.target_hits
    }

    #[must_use]
    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn max_probes(&self) -> usize {
        self.max_probes
    }

    #[must_use]
    pub fn target_hits(&self) -> usize {
        self.target_hits
    }
}
