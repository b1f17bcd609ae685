//! # fips256 CLI entry point
//!
//! Parses arguments, resolves settings, and hands the ordered inputs to the
//! batch runner.
//!
//! Exit status: 0 when every input hashed, 1 when any input failed, 2 on
//! usage or configuration errors.

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches};
use tracing_subscriber::EnvFilter;

use fips256_cli::{collect_inputs, run_batch, Cli};

fn main() -> ExitCode {
    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(2);
        }
    };

    let inputs = collect_inputs(&matches);
    tracing::debug!(inputs = inputs.len(), ?settings, "starting batch");

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run_batch(&inputs, &settings, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
