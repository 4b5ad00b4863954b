//! Scanner behavior against an in-memory fetcher

use kodegen_tools_barscan::{
    Backoff, FetchError, RetryPolicy, RetryingFetcher, ScanOutcome, Scanner,
};
use std::sync::Arc;
use std::time::Duration;

mod common;
use common::{FlakyFetcher, MockFetcher, RecordingProgress, fast_config, minimal_profile_html};

#[tokio::test]
async fn test_zero_probe_budget_finishes_immediately() {
    let config = fast_config(1_000).max_probes(0).build().unwrap();
    let fetcher = Arc::new(MockFetcher::new().with_profile(1_000));

    let report = Scanner::new(config, Arc::clone(&fetcher)).run().await;

    assert!(fetcher.requested().is_empty());
    assert!(report.records.is_empty());
    assert_eq!(report.summary.probes, 0);
    assert_eq!(report.summary.outcome, ScanOutcome::BudgetExhausted);
}

#[tokio::test]
async fn test_stops_exactly_at_target() {
    let config = fast_config(500)
        .target_hit_count(4)
        .max_probes(100)
        .build()
        .unwrap();
    let fetcher = Arc::new(MockFetcher::new().with_profiles(500..600));

    let report = Scanner::new(config, Arc::clone(&fetcher)).run().await;

    assert_eq!(report.records.len(), 4);
    assert_eq!(report.summary.probes, 4);
    assert_eq!(report.summary.outcome, ScanOutcome::TargetReached);
    assert_eq!(fetcher.requested(), vec![500, 501, 502, 503]);
}

#[tokio::test]
async fn test_budget_exhausted_counts_every_probe_as_miss() {
    let config = fast_config(10).max_probes(10).build().unwrap();
    let fetcher = Arc::new(MockFetcher::new());

    let report = Scanner::new(config, Arc::clone(&fetcher)).run().await;

    assert!(report.records.is_empty());
    assert_eq!(report.summary.probes, 10);
    assert_eq!(report.summary.misses, 10);
    assert_eq!(report.summary.hits, 0);
    assert_eq!(report.summary.outcome, ScanOutcome::BudgetExhausted);
    assert_eq!(fetcher.requested(), (10..20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_sparse_run_jumps_past_successor() {
    // Five misses from 1000, then the next probe lands on 1004 + 1 + 100
    let config = fast_config(1_000)
        .sparse_threshold(5)
        .jump_size(100)
        .max_probes(6)
        .build()
        .unwrap();
    let fetcher = Arc::new(MockFetcher::new());

    let report = Scanner::new(config, Arc::clone(&fetcher)).run().await;

    assert_eq!(
        fetcher.requested(),
        vec![1_000, 1_001, 1_002, 1_003, 1_004, 1_105]
    );
    assert_eq!(report.summary.jumps, 1);
}

#[tokio::test]
async fn test_hit_resets_sparse_counter() {
    let config = fast_config(1_000)
        .sparse_threshold(3)
        .jump_size(50)
        .max_probes(7)
        .build()
        .unwrap();
    let fetcher = Arc::new(MockFetcher::new().with_profile(1_002));

    let report = Scanner::new(config, Arc::clone(&fetcher)).run().await;

    // 1002 is the third probe but a hit, so no jump; three misses after it do jump
    assert_eq!(
        fetcher.requested(),
        vec![1_000, 1_001, 1_002, 1_003, 1_004, 1_005, 1_056]
    );
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.summary.jumps, 1);
}

#[tokio::test]
async fn test_finds_sparse_hits_in_order() {
    let config = fast_config(150_000)
        .target_hit_count(3)
        .max_probes(10_000)
        .build()
        .unwrap();
    let fetcher = Arc::new(
        MockFetcher::new()
            .with_profile(150_010)
            .with_profile(150_250)
            .with_unreachable(150_300)
            .with_page(150_499, minimal_profile_html("Roe Doe", 150_499)),
    );

    let report = Scanner::new(config, Arc::clone(&fetcher)).run().await;

    let ids: Vec<u64> = report.records.iter().map(|r| r.identifier).collect();
    assert_eq!(ids, vec![150_010, 150_250, 150_499]);
    assert_eq!(report.summary.outcome, ScanOutcome::TargetReached);
    assert_eq!(report.summary.probes, 500);
    assert_eq!(report.summary.misses, 497);

    let full = &report.records[0];
    assert_eq!(full.display_name, "Test Licensee");
    assert_eq!(full.status, "Active");
    assert_eq!(full.city, "Springfield");
    assert_eq!(full.postal_code, "90001-1234");

    let sparse = &report.records[2];
    assert_eq!(sparse.display_name, "Roe Doe");
    assert_eq!(sparse.firm, "");
    assert_eq!(sparse.address, "");
    assert_eq!(sparse.phone, "");
    assert_eq!(sparse.email, "");
    assert_eq!(sparse.status, "");
    assert_eq!(sparse.admission_date, "");
}

#[tokio::test]
async fn test_unparsed_page_is_a_miss() {
    let config = fast_config(1).max_probes(3).build().unwrap();
    let fetcher = MockFetcher::new().with_page(2, common::not_found_html());

    let report = Scanner::new(config, fetcher).run().await;

    assert!(report.records.is_empty());
    assert_eq!(report.summary.misses, 3);
}

#[tokio::test]
async fn test_fetch_failures_never_jump() {
    let config = fast_config(0)
        .sparse_threshold(3)
        .jump_size(10)
        .max_probes(5)
        .build()
        .unwrap();
    let fetcher = Arc::new(MockFetcher::new().all_unreachable());

    let report = Scanner::new(config, Arc::clone(&fetcher)).run().await;

    assert_eq!(fetcher.requested(), vec![0, 1, 2, 3, 4]);
    assert_eq!(report.summary.misses, 5);
    assert_eq!(report.summary.jumps, 0);
}

#[tokio::test]
async fn test_fetch_failures_feed_jump_on_next_fetched_page() {
    let config = fast_config(1_000)
        .sparse_threshold(3)
        .jump_size(10)
        .max_probes(5)
        .build()
        .unwrap();
    let fetcher = Arc::new(
        MockFetcher::new()
            .with_unreachable(1_000)
            .with_unreachable(1_001)
            .with_unreachable(1_002),
    );

    let report = Scanner::new(config, Arc::clone(&fetcher)).run().await;

    // Four misses in a row by 1003; its page was fetched, so it jumps to 1003 + 1 + 10
    assert_eq!(
        fetcher.requested(),
        vec![1_000, 1_001, 1_002, 1_003, 1_014]
    );
    assert_eq!(report.summary.jumps, 1);
}

#[tokio::test]
async fn test_lanes_never_overshoot_target() {
    let config = fast_config(1_000)
        .lanes(4)
        .lane_span(10)
        .target_hit_count(5)
        .max_probes(1_000)
        .build()
        .unwrap();
    let fetcher = MockFetcher::new().with_profiles(1_000..1_100);

    let report = Scanner::new(config, fetcher).run().await;

    assert_eq!(report.records.len(), 5);
    assert_eq!(report.summary.probes, 5);
    assert_eq!(report.summary.hits, 5);
    assert_eq!(report.summary.outcome, ScanOutcome::TargetReached);
}

#[tokio::test]
async fn test_lanes_share_probe_budget() {
    let config = fast_config(0)
        .lanes(3)
        .lane_span(100)
        .max_probes(20)
        .build()
        .unwrap();
    let fetcher = Arc::new(MockFetcher::new());

    let report = Scanner::new(config, Arc::clone(&fetcher)).run().await;

    assert_eq!(report.summary.probes, 20);
    assert_eq!(fetcher.requested().len(), 20);
}

#[tokio::test]
async fn test_bounded_lane_stops_at_range_end() {
    let config = fast_config(0)
        .lanes(2)
        .lane_span(3)
        .max_probes(10)
        .build()
        .unwrap();
    let fetcher = Arc::new(MockFetcher::new());

    Scanner::new(config, Arc::clone(&fetcher)).run().await;

    let mut requested = fetcher.requested();
    requested.sort_unstable();
    assert_eq!(requested, (0..10).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_lane_results_are_ordered_by_lane() {
    let config = fast_config(1_000)
        .lanes(2)
        .lane_span(5)
        .target_hit_count(10)
        .max_probes(10)
        .build()
        .unwrap();
    let fetcher = MockFetcher::new().with_profiles([1_008, 1_001, 1_006, 1_003]);

    let report = Scanner::new(config, fetcher).run().await;

    let ids: Vec<u64> = report.records.iter().map(|r| r.identifier).collect();
    assert_eq!(ids, vec![1_001, 1_003, 1_006, 1_008]);
}

#[tokio::test]
async fn test_progress_receives_lifecycle_events() {
    let config = fast_config(100)
        .sparse_threshold(2)
        .jump_size(5)
        .target_hit_count(2)
        .max_probes(50)
        .build()
        .unwrap();
    let fetcher = MockFetcher::new().with_profile(100).with_profile(108);

    let scanner = Scanner::new(config, fetcher).with_progress(RecordingProgress::default());
    let report = scanner.run().await;
    let progress = scanner.progress();

    // 100 hit, 101 and 102 miss, jump to 108, hit
    assert_eq!(*progress.started.lock().unwrap(), 1);
    assert_eq!(*progress.hits.lock().unwrap(), vec![(100, 1), (108, 2)]);
    assert_eq!(*progress.jumps.lock().unwrap(), vec![(0, 102, 108)]);
    assert_eq!(progress.probes.lock().unwrap().len(), 4);
    assert_eq!(*progress.completed.lock().unwrap(), vec![report.summary]);
}

#[tokio::test]
async fn test_retried_fetches_are_counted_separately() {
    let config = fast_config(700).target_hit_count(3).build().unwrap();
    let policy = RetryPolicy::new(2, Backoff::Fixed(Duration::ZERO));
    let fetcher = RetryingFetcher::new(FlakyFetcher::new(1, FetchError::Timeout), policy);

    let report = Scanner::new(config, fetcher).run().await;

    assert_eq!(report.records.len(), 3);
    assert_eq!(report.summary.probes, 3);
    assert_eq!(report.summary.fetch_attempts, Some(6));
}
