//! # Command-Line Arguments
//!
//! Strings are positional; files are given with `-f`. The two may be
//! interleaved, and results come back in the order the inputs appeared, so
//! inputs are rebuilt from clap's argument indices rather than from the two
//! derived vectors.

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, ArgMatches, Parser};

use crate::config::{CliConfig, OutputFormat};
use crate::input::Input;

/// Compute SHA-256 digests of strings, files, and standard input.
#[derive(Parser, Debug)]
#[command(name = "fips256", version, about, long_about = None)]
#[command(group(
    ArgGroup::new("inputs")
        .required(true)
        .multiple(true)
        .args(["messages", "files"])
))]
pub struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (overrides the configuration file).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show a progress bar on stderr.
    #[arg(long)]
    pub progress: bool,

    /// Stop at the first input that cannot be read.
    #[arg(long)]
    pub fail_fast: bool,

    /// Strings to hash.
    #[arg(value_name = "MESSAGE")]
    pub messages: Vec<String>,

    /// File to hash; `-` reads standard input. May be repeated.
    #[arg(short = 'f', long = "file", value_name = "FILE", action = ArgAction::Append)]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Resolve the effective settings: configuration file, then flags.
    pub fn settings(&self) -> anyhow::Result<CliConfig> {
        let base = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        Ok(base.with_overrides(self.format, self.progress, self.fail_fast))
    }
}

/// Rebuild the inputs in command-line order.
pub fn collect_inputs(matches: &ArgMatches) -> Vec<Input> {
    let mut indexed: Vec<(usize, Input)> = Vec::new();

    if let (Some(values), Some(indices)) = (
        matches.get_many::<String>("messages"),
        matches.indices_of("messages"),
    ) {
        indexed.extend(indices.zip(values.cloned().map(Input::Text)));
    }

    if let (Some(values), Some(indices)) = (
        matches.get_many::<PathBuf>("files"),
        matches.indices_of("files"),
    ) {
        indexed.extend(indices.zip(values.cloned().map(Input::from_file_arg)));
    }

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, input)| input).collect()
}
