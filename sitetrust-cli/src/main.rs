//! Sitetrust - URL trust scoring from the terminal
//!
//! Main entry point: parse the CLI, wire up logging, run one analysis and
//! render the report.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use sitetrust_core::{Analyzer, SimulatedSource};

mod report;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "sitetrust",
    about = "Trust scoring for URLs over named security signals",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one URL and print its trust report
    Analyze {
        /// Target URL or bare hostname (https:// is assumed when omitted)
        url: String,

        /// Emit the report as JSON instead of a rendered table
        #[clap(long)]
        json: bool,

        /// Seed the simulated signal source for reproducible runs
        #[clap(long)]
        seed: Option<u64>,

        /// Deadline for signal collection, in seconds
        #[clap(long, default_value_t = 10)]
        timeout_seconds: u64,
    },
}

/// Initialize tracing from the --log-level flag.
///
/// RUST_LOG takes precedence when set, matching the usual env-filter
/// behavior. Logs go to stderr so stdout stays clean for report output.
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    match cli.command {
        Command::Analyze {
            url,
            json,
            seed,
            timeout_seconds,
        } => analyze_command(url, json, seed, timeout_seconds).await,
    }
}

async fn analyze_command(
    url: String,
    json: bool,
    seed: Option<u64>,
    timeout_seconds: u64,
) -> Result<()> {
    let source = match seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded simulated source");
            SimulatedSource::seeded(seed)
        }
        None => SimulatedSource::new(),
    };

    let analyzer = Arc::new(
        Analyzer::new(Box::new(source)).timeout(Duration::from_secs(timeout_seconds)),
    );

    // The pending analysis is a task handle, so a frontend embedding this
    // flow can abort it; the CLI just waits
    let task = analyzer.spawn(url);

    match task.join().await {
        Ok(report) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report::render(&report));
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
