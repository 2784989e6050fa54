//! Shelter-Scout main entry point
//!
//! This is the command-line interface for the Shelter-Scout crawler.

use anyhow::Context;
use clap::Parser;
use shelter_scout::config::load_config;
use shelter_scout::crawler::crawl;
use shelter_scout::output::{JsonLinesSink, RecordSink};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Shelter-Scout: a pet-adoption shelter crawler
///
/// Shelter-Scout discovers shelter sub-sites from the organization
/// directory, walks their paginated animal listings, and emits one
/// normalized record per animal profile.
#[derive(Parser, Debug)]
#[command(name = "shelter-scout")]
#[command(version = "0.1.0")]
#[command(about = "A pet-adoption shelter crawler", long_about = None)]
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

    /// Validate config and show what would be crawled without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    // Records go to stdout when the configured path is "-"
    let sink: Arc<dyn RecordSink> = if config.output.records_path == "-" {
        Arc::new(JsonLinesSink::stdout())
    } else {
        let path = Path::new(&config.output.records_path);
        Arc::new(
            JsonLinesSink::create(path)
                .with_context(|| format!("failed to open {}", config.output.records_path))?,
        )
    };

    crawl(config, sink).await?;
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("shelter_scout=info,warn"),
            1 => EnvFilter::new("shelter_scout=debug,info"),
            2 => EnvFilter::new("shelter_scout=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows the crawl plan
fn handle_dry_run(config: &shelter_scout::config::Config) {
    println!("=== Shelter-Scout Dry Run ===\n");

    println!("Crawler:");
    println!("  Directory URL: {}", config.crawler.directory_url);
    println!(
        "  Max concurrent fetches: {}",
        config.crawler.max_concurrent_fetches
    );
    println!("  Request timeout: {}s", config.crawler.request_timeout_secs);
    println!("  Connect timeout: {}s", config.crawler.connect_timeout_secs);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nOutput:");
    println!("  Records: {}", config.output.records_path);

    println!("\nListing paths probed per shelter:");
    for path in shelter_scout::url::LISTING_PATHS {
        println!("  - {}", path);
    }

    println!("\n✓ Configuration is valid");
}
