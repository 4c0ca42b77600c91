//! PR-Ledger main entry point
//!
//! Command-line interface for collecting, re-opening, and capturing merged
//! pull requests.

use anyhow::{anyhow, bail, Context};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use clap::{Parser, Subcommand};
use pr_ledger::capture::{capture_pr_page, CaptureFormat, CaptureOptions};
use pr_ledger::collector::collect_merged_prs;
use pr_ledger::config::{resolve_config, Config};
use pr_ledger::output::{derive_csv_path, write_csv};
use pr_ledger::{opener, roster, GhCli};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// PR-Ledger: a merged pull request evidence collector
#[derive(Parser, Debug)]
#[command(name = "pr-ledger")]
#[command(version = "1.0.0")]
#[command(about = "Collects merged pull request evidence into CSV ledgers", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch merged PRs and save them to a CSV ledger
    List {
        /// Start date in YYYY-MM-DD format
        #[arg(short, long, value_name = "DATE")]
        since: String,

        /// GitHub repository in owner/repo format
        #[arg(short, long)]
        repo: String,

        /// Optional search term to filter PRs
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Open PR URLs from a CSV ledger in the default browser
    Open {
        /// CSV file containing PR URLs
        #[arg(short, long, value_name = "FILE")]
        urls: PathBuf,
    },

    /// Capture PR pages from a CSV ledger as PDFs or screenshots
    Capture {
        /// CSV file containing PR URLs
        #[arg(short, long, value_name = "FILE")]
        urls: PathBuf,

        /// Capture format: 'pdf' or 'png' (overrides config)
        #[arg(short, long)]
        format: Option<String>,

        /// Output directory for captures (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seconds to wait for page load (overrides config)
        #[arg(short, long)]
        wait: Option<u64>,

        /// Capture the full page height
        #[arg(long)]
        fullpage: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Commands::List {
            since,
            repo,
            search,
        } => handle_list(&config, &since, &repo, &search).await,

        Commands::Open { urls } => {
            opener::open_prs_from_csv(&urls).await?;
            Ok(())
        }

        Commands::Capture {
            urls,
            format,
            output,
            wait,
            fullpage,
        } => handle_capture(&config, &urls, format, output, wait, fullpage).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pr_ledger=info,warn"),
            1 => EnvFilter::new("pr_ledger=debug,info"),
            2 => EnvFilter::new("pr_ledger=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Parses a YYYY-MM-DD start date, rejecting dates in the future.
fn parse_since(since: &str) -> anyhow::Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(since, "%Y-%m-%d")
        .map_err(|e| anyhow!("invalid date '{}': {} (expected YYYY-MM-DD)", since, e))?;

    let since = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    if since > Utc::now() {
        bail!("start date {} is in the future", date);
    }

    Ok(since)
}

/// Handles the `list` subcommand: collect merged PRs and write the ledger
async fn handle_list(
    config: &Config,
    since: &str,
    repo: &str,
    search: &str,
) -> anyhow::Result<()> {
    let since = parse_since(since)?;

    println!(
        "Fetching PRs merged since {} for {}...",
        since.format("%Y-%m-%d"),
        repo
    );
    if !search.is_empty() {
        println!("Filtering for search term: {}", search);
    }

    let backend = GhCli::new(config.backend.program.clone());
    let collection = collect_merged_prs(&backend, since, repo, search).await?;

    for warning in &collection.warnings {
        eprintln!("Warning: window {}: {}", warning.window, warning.message);
    }

    if collection.records.is_empty() {
        println!("No PRs found for the specified criteria.");
        return Ok(());
    }

    let path = derive_csv_path(Path::new(&config.output.csv_directory), repo, since, search);
    write_csv(&collection.records, &path)?;

    println!(
        "Saved {} PRs to {}",
        collection.records.len(),
        path.display()
    );
    if !collection.warnings.is_empty() {
        println!(
            "Completed with {} warnings; results may be incomplete.",
            collection.warnings.len()
        );
    }

    Ok(())
}

/// Handles the `capture` subcommand: render each PR page from the ledger
async fn handle_capture(
    config: &Config,
    urls_file: &Path,
    format: Option<String>,
    output: Option<PathBuf>,
    wait: Option<u64>,
    fullpage: bool,
) -> anyhow::Result<()> {
    let format_name = format.unwrap_or_else(|| config.capture.format.clone());
    let format = CaptureFormat::parse(&format_name)
        .ok_or_else(|| anyhow!("invalid format '{}': must be 'pdf' or 'png'", format_name))?;

    let options = CaptureOptions {
        format,
        output_dir: output.unwrap_or_else(|| PathBuf::from(&config.capture.output_directory)),
        wait_seconds: wait.unwrap_or(config.capture.wait_seconds),
        full_page: fullpage || config.capture.full_page,
        browser: config.capture.browser.clone(),
    };

    let urls = roster::read_pr_urls(urls_file)?;
    let total = urls.len();

    for (i, url) in urls.iter().enumerate() {
        println!("Capturing PR {}/{}: {}", i + 1, total, url);

        match capture_pr_page(url, &options).await {
            Ok(path) => println!("  Saved to {}", path.display()),
            Err(e) => eprintln!("  Error capturing {}: {}", url, e),
        }
    }

    Ok(())
}
