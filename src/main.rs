//! mergepick binary entry point

mod cli;

use anstream::eprintln;
use clap::Parser;
use cli::merge::{MergeOptions, run_merge};
use cli::style::Stylize;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Pick a private GitHub repository and merge its latest pull request
#[derive(Debug, Parser)]
#[command(name = "mergepick", version, about)]
struct Cli {
    /// GitHub Enterprise host (API served from https://<HOST>/api/v3)
    #[arg(long)]
    host: Option<String>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = MergeOptions { host: cli.host };
    match run_merge(&options).await {
        Ok(outcome) => {
            debug!(?outcome, "session finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", "Error:".error());
            ExitCode::FAILURE
        }
    }
}
