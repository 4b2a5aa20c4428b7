//! Kahu main entry point
//!
//! Command-line interface for the Kahu breadth-first web crawler.

use anyhow::Context;
use clap::Parser;
use kahu::config::load_config;
use kahu::crawler::{crawl, CrawlOutcome};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Kahu: a breadth-first web crawler for the .nz web
///
/// Kahu explores a seed set of URLs breadth-first, honoring per-site
/// exclusion directives and a wall-clock time budget, and records per-page
/// metadata and aggregate statistics to plain-text logs.
#[derive(Parser, Debug)]
#[command(name = "kahu")]
#[command(version = "1.0.0")]
#[command(about = "A breadth-first web crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the seed file named in the configuration
    #[arg(long, value_name = "FILE")]
    seed_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let mut config = load_config(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    if let Some(seed_file) = &cli.seed_file {
        tracing::info!("Seed file overridden: {}", seed_file.display());
        config.seeds.file = seed_file.to_string_lossy().into_owned();
    }

    tracing::info!(
        "Crawling domains matching '{}' with a {}s budget",
        config.crawler.domain_filter,
        config.crawler.time_budget_secs
    );

    let log_path = config.output.log_path.clone();
    let outcome = crawl(config).await.context("crawl failed")?;

    match outcome {
        CrawlOutcome::Drained => tracing::info!("Frontier drained; crawl complete"),
        CrawlOutcome::TimedOut => tracing::info!("Time budget exhausted; crawl stopped"),
    }
    println!("Crawl finished; log written to {}", log_path);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("kahu=info,warn"),
            1 => EnvFilter::new("kahu=debug,info"),
            2 => EnvFilter::new("kahu=trace,debug"),
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
