//! Scan cursor and the sparse-jump policy.

use super::scan_types::{Advance, ProbeOutcome};

/// Per-lane mutable scan position.
///
/// `since_last_hit` counts every probe (hit or miss). A hit resets it before
/// the threshold check, so a hit never jumps. Once it reaches
/// `sparse_threshold` on a probe whose fetch succeeded, the next identifier
/// skips `jump_size` identifiers past the normal successor and the counter
/// resets. An unreachable probe always steps by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCursor {
    identifier: u64,
    since_last_hit: u64,
    probes: usize,
    hits: usize,
    sparse_threshold: u64,
    jump_size: u64,
    /// Exclusive end of the lane's range
    end: Option<u64>,
}

impl ScanCursor {
    #[must_use]
    pub fn new(start_identifier: u64, sparse_threshold: u64, jump_size: u64) -> Self {
        Self {
            identifier: start_identifier,
            since_last_hit: 0,
            probes: 0,
            hits: 0,
            sparse_threshold: sparse_threshold.max(1),
            jump_size,
            end: None,
        }
    }

    /// Bound the cursor to identifiers below `end`
    #[must_use]
    pub fn with_end(mut self, end: u64) -> Self {
        self.end = Some(end);
        self
    }

    /// Identifier of the next probe
    #[must_use]
    pub fn identifier(&self) -> u64 {
        self.identifier
    }

    #[must_use]
    pub fn since_last_hit(&self) -> u64 {
        self.since_last_hit
    }

    #[must_use]
    pub fn probes(&self) -> usize {
        self.probes
    }

    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits
    }

    #[must_use]
    pub fn end(&self) -> Option<u64> {
        self.end
    }

    /// The cursor has walked past the end of its range
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.end.is_some_and(|end| self.identifier >= end)
    }

    /// Record the outcome of the probe at `identifier()` and move on
    pub fn advance(&mut self, outcome: ProbeOutcome) -> Advance {
        self.probes += 1;
        self.since_last_hit += 1;

        if outcome.is_hit() {
            self.hits += 1;
            self.since_last_hit = 0;
        }

        let from = self.identifier;
        // Failed fetches feed the counter but never trigger the jump themselves
        if outcome != ProbeOutcome::Unreachable && self.since_last_hit >= self.sparse_threshold {
            self.since_last_hit = 0;
            self.identifier = from.saturating_add(1).saturating_add(self.jump_size);
            Advance::Jump {
                from,
                to: self.identifier,
            }
        } else {
            self.identifier = from.saturating_add(1);
            Advance::Step {
                to: self.identifier,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_misses_jump_past_successor() {
        let mut cursor = ScanCursor::new(100, 3, 50);
        assert_eq!(cursor.advance(ProbeOutcome::Unparsed), Advance::Step { to: 101 });
        assert_eq!(cursor.advance(ProbeOutcome::Unparsed), Advance::Step { to: 102 });
        assert_eq!(
            cursor.advance(ProbeOutcome::Unparsed),
            Advance::Jump { from: 102, to: 153 }
        );
        assert_eq!(cursor.since_last_hit(), 0);
        assert_eq!(cursor.probes(), 3);
    }

    #[test]
    fn hit_on_threshold_probe_never_jumps() {
        let mut cursor = ScanCursor::new(10, 3, 1000);
        cursor.advance(ProbeOutcome::Unparsed);
        cursor.advance(ProbeOutcome::Unparsed);
        assert_eq!(cursor.advance(ProbeOutcome::Hit), Advance::Step { to: 13 });
        assert_eq!(cursor.since_last_hit(), 0);
        assert_eq!(cursor.hits(), 1);
    }

    #[test]
    fn threshold_of_one_jumps_after_every_miss() {
        let mut cursor = ScanCursor::new(0, 1, 9);
        assert_eq!(cursor.advance(ProbeOutcome::Unparsed), Advance::Jump { from: 0, to: 10 });
        assert_eq!(cursor.advance(ProbeOutcome::Hit), Advance::Step { to: 11 });
    }

    #[test]
    fn unreachable_probe_steps_but_keeps_counting() {
        let mut cursor = ScanCursor::new(0, 2, 10);
        assert_eq!(cursor.advance(ProbeOutcome::Unreachable), Advance::Step { to: 1 });
        assert_eq!(cursor.advance(ProbeOutcome::Unreachable), Advance::Step { to: 2 });
        assert_eq!(cursor.advance(ProbeOutcome::Unreachable), Advance::Step { to: 3 });
        assert_eq!(cursor.since_last_hit(), 3);
        assert_eq!(
            cursor.advance(ProbeOutcome::Unparsed),
            Advance::Jump { from: 3, to: 14 }
        );
        assert_eq!(cursor.since_last_hit(), 0);
    }

    #[test]
    fn bounded_cursor_reports_exhaustion() {
        let mut cursor = ScanCursor::new(5, 10, 0).with_end(7);
        assert!(!cursor.is_exhausted());
        cursor.advance(ProbeOutcome::Unparsed);
        cursor.advance(ProbeOutcome::Unparsed);
        assert!(cursor.is_exhausted());
    }
}
