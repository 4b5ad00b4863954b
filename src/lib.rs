pub mod config;
pub mod export;
pub mod fetcher;
pub mod page_extractor;
pub mod scan_engine;
pub mod utils;

pub use config::{BackoffKind, ScanConfig};
pub use export::{ExportError, ExportFormat, export_records, write_csv, write_xlsx};
pub use fetcher::{
    Backoff, FetchError, FetchedPage, HttpFetcher, ResourceFetcher, RetryOutcome, RetryPolicy,
    RetryingFetcher,
};
pub use page_extractor::{
    AddressParts, ProfilePage, RECORD_COLUMNS, Record, decompose_address, extract_email,
    extract_label_value, extract_name_and_id, extract_record,
};
pub use scan_engine::{
    LogProgress, NoOpProgress, ProbeEvent, ProbeOutcome, ScanCursor, ScanOutcome, ScanProgress,
    ScanReport, ScanSummary, Scanner,
};

/// Scan over HTTP with the configured retry policy and summary logging
pub async fn scan(config: ScanConfig) -> anyhow::Result<ScanReport> {
    scan_engine::scan_impl(config).await
}
