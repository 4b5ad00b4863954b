//! Core types for identifier-space scanning.

use std::fmt;
use std::time::Duration;

use crate::page_extractor::Record;

/// State of one scanning lane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Probing identifiers one by one
    Scanning,
    /// Transient: a sparse run was detected on the last probe and the cursor
    /// leapt from `from` to `to`
    SparseJumping { from: u64, to: u64 },
    /// Target reached, budget exhausted, or lane range walked off
    Done,
}

/// What a single probe produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Name and identifier both extracted
    Hit,
    /// Page fetched but the name/identifier pattern was absent
    Unparsed,
    /// Fetch failed after retries (network, timeout, non-200)
    Unreachable,
}

impl ProbeOutcome {
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit)
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => write!(f, "hit"),
            Self::Unparsed => write!(f, "unparsed"),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// How the cursor moved after a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Step { to: u64 },
    Jump { from: u64, to: u64 },
}

impl Advance {
    /// Identifier of the next probe
    #[must_use]
    pub const fn next(&self) -> u64 {
        match self {
            Self::Step { to } | Self::Jump { to, .. } => *to,
        }
    }
}

/// Why the scan stopped. Both are successful terminations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    TargetReached,
    BudgetExhausted,
}

impl fmt::Display for ScanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetReached => write!(f, "target reached"),
            Self::BudgetExhausted => write!(f, "probe budget exhausted"),
        }
    }
}

/// Aggregate counts for a finished scan.
///
/// `probes` counts identifiers probed, not HTTP requests; retries show up
/// only in `fetch_attempts`. `misses` makes no distinction between
/// unreachable and unparsed pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub probes: usize,
    pub hits: usize,
    pub misses: usize,
    pub jumps: usize,
    pub fetch_attempts: Option<u64>,
    pub outcome: ScanOutcome,
    pub elapsed: Duration,
}

/// Records plus summary
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Discovery order within a lane, lanes in identifier order
    pub records: Vec<Record>,
    pub summary: ScanSummary,
}
