//! Configuration module for identifier-space scanning
//!
//! This module provides the `ScanConfig` struct and its type-safe builder
//! for configuring scans with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{Complete, ScanConfigBuilder, WithUrlTemplate};
pub use types::{BackoffKind, ScanConfig};
