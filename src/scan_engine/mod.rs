//! Scan Engine Module
//!
//! This module contains the identifier-space scanner: the cursor and its
//! sparse-jump policy, the shared probe/hit budget, progress reporting, and
//! the lane runner that ties them to a `ResourceFetcher`.

// Sub-modules
pub mod budget;
pub mod cursor;
pub mod execution;
pub mod progress;
pub mod scan_types;
pub mod scanner;

// Re-exports for public API
pub use budget::ScanBudget;
pub use cursor::ScanCursor;
pub use execution::scan_impl;
pub use progress::{LogProgress, NoOpProgress, ProbeEvent, ScanProgress};
pub use scan_types::{
    Advance, ProbeOutcome, ScanMode, ScanOutcome, ScanReport, ScanSummary,
};
pub use scanner::Scanner;
