//! Pagelift main entry point
//!
//! Command-line interface for the pagelift single-page scraper: fetch one
//! URL, extract title and body text, and write a JSON result record.

use clap::Parser;
use pagelift::config::{load_dotenv, FetchConfig};
use pagelift::output::{default_output_path, write_record};
use pagelift::record::Status;
use pagelift::scrape::scrape_with_config;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Scrape a single website and save extracted content as JSON
///
/// Fetches the given URL, extracts the page title and visible body text,
/// and writes a structured JSON record. The process exits 0 when the
/// scrape succeeded and 1 when it failed; a failed scrape still produces
/// an output file for downstream tooling.
#[derive(Parser, Debug)]
#[command(name = "pagelift")]
#[command(version)]
#[command(about = "Scrape a single web page into a JSON record", long_about = None)]
struct Cli {
    /// Full URL to scrape (e.g. https://example.com)
    #[arg(long)]
    url: String,

    /// Output JSON file path (defaults to outputs/scraped_<timestamp>.json)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);
    load_dotenv();

    match run(cli).await {
        Ok(Status::Success) => ExitCode::SUCCESS,
        Ok(Status::Failed) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(2)
        }
    }
}

/// Runs one scrape invocation and returns the record's status
///
/// Only pre-flight configuration errors and output write failures surface
/// as errors here; a failed scrape is an `Ok(Status::Failed)` with the
/// record already written.
async fn run(cli: Cli) -> pagelift::Result<Status> {
    // Configuration errors abort before any fetch is attempted.
    let config = FetchConfig::from_env()?;
    let output_path = cli.output.unwrap_or_else(default_output_path);

    let record = scrape_with_config(&cli.url, &config).await;

    write_record(&record, &output_path)?;
    tracing::info!("Output saved to {}", output_path.display());

    Ok(record.status)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagelift=info,warn"),
            1 => EnvFilter::new("pagelift=debug,info"),
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
