//! Test utilities and helper functions for the barscan test suite

use kodegen_tools_barscan::config::{Complete, ScanConfigBuilder};
use kodegen_tools_barscan::{
    FetchError, FetchedPage, ProbeEvent, Record, ResourceFetcher, ScanConfig, ScanProgress,
    ScanSummary,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Template used by every in-memory scan; never actually requested
#[allow(dead_code)]
pub const TEST_TEMPLATE: &str = "https://directory.test/detail/{id}";

/// Builder preloaded for fast in-memory scans: no delay, no retries
#[allow(dead_code)]
pub fn fast_config(start: u64) -> ScanConfigBuilder<Complete> {
    ScanConfig::builder()
        .url_template(TEST_TEMPLATE)
        .start_identifier(start)
        .per_probe_delay_ms(0)
        .retry_attempts(1)
        .retry_backoff_ms(0)
}

/// Full profile page in the directory's usual layout
#[allow(dead_code)]
pub fn profile_html(name: &str, id: u64) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Attorney Profile</title></head>
<body>
    <h3>{name} #{id}</h3>
    <p>License Status: Active</p>
    <p>Address: Acme LLP, 123 Main St, Springfield, CA 90001-1234</p>
    <p>Phone: 555-123-4567 | Fax: 555-765-4321</p>
    <p>Email: <a href="mailto:counsel{id}@example.com">counsel{id}@example.com</a></p>
    <p>Admitted to the Bar: 6/1/1999</p>
</body>
</html>"#
    )
}

/// Profile page carrying only the `Name #Number` header
#[allow(dead_code)]
pub fn minimal_profile_html(name: &str, id: u64) -> String {
    format!("<html><body><h1>{name} #{id}</h1></body></html>")
}

/// Page the directory serves for an unassigned number
#[allow(dead_code)]
pub fn not_found_html() -> String {
    "<html><head><title>Attorney Search</title></head>\
     <body><h1>Attorney Search</h1><p>No licensee was found.</p></body></html>"
        .to_string()
}

/// In-memory fetcher: known identifiers return their page, unknown ones the
/// directory's "not found" page
#[derive(Default)]
#[allow(dead_code)]
pub struct MockFetcher {
    pages: HashMap<u64, String>,
    unreachable: HashSet<u64>,
    unreachable_everywhere: bool,
    requested: Mutex<Vec<u64>>,
}

#[allow(dead_code)]
impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a full profile page for `id`
    pub fn with_profile(mut self, id: u64) -> Self {
        self.pages.insert(id, profile_html("Test Licensee", id));
        self
    }

    pub fn with_profiles(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        for id in ids {
            self.pages.insert(id, profile_html("Test Licensee", id));
        }
        self
    }

    pub fn with_page(mut self, id: u64, body: impl Into<String>) -> Self {
        self.pages.insert(id, body.into());
        self
    }

    /// Fail `id` with a network error instead of serving a page
    pub fn with_unreachable(mut self, id: u64) -> Self {
        self.unreachable.insert(id);
        self
    }

    /// Fail every identifier with a network error
    pub fn all_unreachable(mut self) -> Self {
        self.unreachable_everywhere = true;
        self
    }

    /// Identifiers requested so far, in request order
    pub fn requested(&self) -> Vec<u64> {
        self.requested.lock().unwrap().clone()
    }
}

impl ResourceFetcher for MockFetcher {
    async fn fetch(&self, identifier: u64) -> Result<FetchedPage, FetchError> {
        self.requested.lock().unwrap().push(identifier);

        if self.unreachable_everywhere || self.unreachable.contains(&identifier) {
            return Err(FetchError::Network("connection reset".to_string()));
        }
        let body = self
            .pages
            .get(&identifier)
            .cloned()
            .unwrap_or_else(not_found_html);
        Ok(FetchedPage {
            identifier,
            status: 200,
            body,
        })
    }
}

/// Fetcher that fails the first `failures` attempts of every identifier
#[allow(dead_code)]
pub struct FlakyFetcher {
    failures: u64,
    error: FetchError,
    calls: Mutex<HashMap<u64, u64>>,
    total_calls: AtomicU64,
}

#[allow(dead_code)]
impl FlakyFetcher {
    pub fn new(failures: u64, error: FetchError) -> Self {
        Self {
            failures,
            error,
            calls: Mutex::new(HashMap::new()),
            total_calls: AtomicU64::new(0),
        }
    }

    pub fn total_calls(&self) -> u64 {
        self.total_calls.load(Ordering::SeqCst)
    }

    pub fn calls_for(&self, identifier: u64) -> u64 {
        self.calls
            .lock()
            .unwrap()
            .get(&identifier)
            .copied()
            .unwrap_or(0)
    }
}

impl ResourceFetcher for FlakyFetcher {
    async fn fetch(&self, identifier: u64) -> Result<FetchedPage, FetchError> {
        self.total_calls.fetch_add(1, Ordering::SeqCst);
        let seen = {
            let mut calls = self.calls.lock().unwrap();
            let entry = calls.entry(identifier).or_insert(0);
            *entry += 1;
            *entry
        };

        if seen <= self.failures {
            return Err(self.error.clone());
        }
        Ok(FetchedPage {
            identifier,
            status: 200,
            body: profile_html("Flaky Licensee", identifier),
        })
    }
}

/// Progress reporter that records every event
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingProgress {
    pub started: Mutex<usize>,
    pub probes: Mutex<Vec<ProbeEvent>>,
    pub hits: Mutex<Vec<(u64, usize)>>,
    pub jumps: Mutex<Vec<(usize, u64, u64)>>,
    pub completed: Mutex<Vec<ScanSummary>>,
}

impl ScanProgress for RecordingProgress {
    fn report_started(&self, _config: &ScanConfig) {
        *self.started.lock().unwrap() += 1;
    }

    fn report_probe(&self, event: &ProbeEvent) {
        self.probes.lock().unwrap().push(*event);
    }

    fn report_hit(&self, record: &Record, hits: usize) {
        self.hits.lock().unwrap().push((record.identifier, hits));
    }

    fn report_jump(&self, lane: usize, from: u64, to: u64) {
        self.jumps.lock().unwrap().push((lane, from, to));
    }

    fn report_completed(&self, summary: &ScanSummary) {
        self.completed.lock().unwrap().push(summary.clone());
    }
}
