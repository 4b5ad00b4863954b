// Seek-and-scan directory scraper
//
// `scan` walks the identifier space from a starting bar number, collects
// profile records and writes them to CSV/XLSX. `probe` fetches one identifier
// and prints what the extractor sees, for checking a template or a layout.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kodegen_tools_barscan::config::{BackoffKind, ScanConfig, ScanConfigBuilder};
use kodegen_tools_barscan::page_extractor::{ProfilePage, record_from_page};
use kodegen_tools_barscan::utils::{
    DEFAULT_PROBE_IDENTIFIER, DEFAULT_START_IDENTIFIER, DEFAULT_URL_TEMPLATE, safe_truncate_chars,
};
use kodegen_tools_barscan::{ExportFormat, HttpFetcher, export_records};

#[derive(Parser)]
#[command(
    name = "kodegen-barscan",
    about = "Seek-and-scan scraper for sparse directory identifier spaces",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the identifier space and export the records found.
    Scan(ScanArgs),

    /// Fetch a single identifier and print what the extractor sees.
    Probe {
        /// Identifier to fetch.
        #[arg(default_value_t = DEFAULT_PROBE_IDENTIFIER)]
        identifier: u64,

        /// Probe URL with an {id} placeholder.
        #[arg(long, env = "BARSCAN_URL_TEMPLATE", default_value = DEFAULT_URL_TEMPLATE)]
        url_template: String,

        /// Request timeout in seconds.
        #[arg(long, default_value_t = 8)]
        timeout_secs: u64,
    },
}

#[derive(Args)]
struct ScanArgs {
    /// JSON config file; flags below override its values.
    #[arg(long, env = "BARSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Probe URL with an {id} placeholder.
    #[arg(long, env = "BARSCAN_URL_TEMPLATE")]
    url_template: Option<String>,

    /// First identifier to probe.
    #[arg(long, env = "BARSCAN_START")]
    start: Option<u64>,

    /// Stop after this many records.
    #[arg(long, env = "BARSCAN_TARGET")]
    target: Option<usize>,

    /// Stop after this many probes.
    #[arg(long, env = "BARSCAN_MAX_PROBES")]
    max_probes: Option<usize>,

    /// Delay after every probe, in milliseconds.
    #[arg(long, env = "BARSCAN_DELAY_MS")]
    delay_ms: Option<u64>,

    /// Probes without a hit before jumping ahead.
    #[arg(long, env = "BARSCAN_SPARSE_THRESHOLD")]
    sparse_threshold: Option<u64>,

    /// Identifiers skipped on a sparse jump.
    #[arg(long, env = "BARSCAN_JUMP_SIZE")]
    jump_size: Option<u64>,

    /// Request timeout in seconds.
    #[arg(long, env = "BARSCAN_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Fetch attempts per identifier.
    #[arg(long, env = "BARSCAN_RETRIES")]
    retries: Option<u32>,

    /// Wait between fetch attempts, in milliseconds.
    #[arg(long, env = "BARSCAN_RETRY_BACKOFF_MS")]
    retry_backoff_ms: Option<u64>,

    /// Double the wait after each failed attempt.
    #[arg(long)]
    exponential_backoff: bool,

    /// Concurrent lanes over disjoint identifier ranges.
    #[arg(long, env = "BARSCAN_LANES")]
    lanes: Option<usize>,

    /// Identifiers per lane when scanning with several lanes.
    #[arg(long, env = "BARSCAN_LANE_SPAN")]
    lane_span: Option<u64>,

    /// Output directory.
    #[arg(long, default_value = "outputs")]
    out_dir: PathBuf,

    /// Output file name without extension.
    #[arg(long, default_value = "CA_Bar")]
    stem: String,

    /// Output formats (csv, xlsx).
    #[arg(
        long = "format",
        value_delimiter = ',',
        value_parser = parse_format,
        default_values_t = [ExportFormat::Xlsx, ExportFormat::Csv]
    )]
    formats: Vec<ExportFormat>,
}

fn parse_format(value: &str) -> Result<ExportFormat, String> {
    value.parse().map_err(|e: kodegen_tools_barscan::ExportError| e.to_string())
}

impl ScanArgs {
    fn apply<S>(&self, mut builder: ScanConfigBuilder<S>) -> ScanConfigBuilder<S> {
        if let Some(target) = self.target {
            builder = builder.target_hit_count(target);
        }
        if let Some(max) = self.max_probes {
            builder = builder.max_probes(max);
        }
        if let Some(delay) = self.delay_ms {
            builder = builder.per_probe_delay_ms(delay);
        }
        if let Some(threshold) = self.sparse_threshold {
            builder = builder.sparse_threshold(threshold);
        }
        if let Some(jump) = self.jump_size {
            builder = builder.jump_size(jump);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.request_timeout_secs(secs);
        }
        if let Some(retries) = self.retries {
            builder = builder.retry_attempts(retries);
        }
        if let Some(backoff) = self.retry_backoff_ms {
            builder = builder.retry_backoff_ms(backoff);
        }
        if self.exponential_backoff {
            builder = builder.retry_backoff(BackoffKind::Exponential);
        }
        if let Some(lanes) = self.lanes {
            builder = builder.lanes(lanes);
        }
        if let Some(span) = self.lane_span {
            builder = builder.lane_span(span);
        }
        builder
    }

    fn to_config(&self) -> Result<ScanConfig> {
        let builder = match &self.config {
            Some(path) => {
                let mut builder = ScanConfig::from_json_file(path)?.into_builder();
                if let Some(template) = &self.url_template {
                    builder = builder.with_url_template(template.clone());
                }
                if let Some(start) = self.start {
                    builder = builder.restart_at(start);
                }
                builder
            }
            None => ScanConfig::builder()
                .url_template(
                    self.url_template
                        .clone()
                        .unwrap_or_else(|| DEFAULT_URL_TEMPLATE.to_string()),
                )
                .start_identifier(self.start.unwrap_or(DEFAULT_START_IDENTIFIER)),
        };
        self.apply(builder).build().context("Invalid scan configuration")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scan(args) => run_scan(args).await,
        Commands::Probe {
            identifier,
            url_template,
            timeout_secs,
        } => run_probe(identifier, &url_template, timeout_secs).await,
    }
}

async fn run_scan(args: ScanArgs) -> Result<()> {
    let config = args.to_config()?;
    let report = kodegen_tools_barscan::scan(config).await?;

    let written = export_records(&args.out_dir, &args.stem, &report.records, &args.formats)
        .context("Failed to write scan results")?;
    let paths: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
    info!("[saved] {} rows -> {}", report.records.len(), paths.join(" / "));
    Ok(())
}

async fn run_probe(identifier: u64, url_template: &str, timeout_secs: u64) -> Result<()> {
    let probe_config = ScanConfig::builder()
        .url_template(url_template)
        .start_identifier(identifier)
        .request_timeout_secs(timeout_secs)
        .user_agent("Mozilla/5.0 (portfolio-check)")
        .build()?;
    let fetcher = HttpFetcher::from_config(&probe_config)?;

    let page = fetcher
        .fetch_any_status(identifier)
        .await
        .with_context(|| format!("Failed to fetch identifier {identifier}"))?;

    println!("HTTP: {}", page.status);
    if page.status != 200 {
        return Ok(());
    }

    let profile = ProfilePage::parse(&page.body);
    let header = profile.first_header();
    println!(
        "Header: {}",
        header.as_deref().map_or("(no header)", |h| safe_truncate_chars(h, 200))
    );
    match record_from_page(&profile) {
        Some(record) => println!("Record: {record:#?}"),
        None => println!("Record: (miss: no name/number pattern)"),
    }
    Ok(())
}
