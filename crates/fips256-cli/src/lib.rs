//! # fips256-cli — Command-Line Driver
//!
//! Provides the `fips256` binary, a thin caller-side layer over
//! [`fips256_core::hash`]. Argument parsing is separated from the batch
//! runner so both can be exercised without a process boundary.
//!
//! ```bash
//! fips256 abc                       # hash a string
//! fips256 -f ./test.txt             # hash a file
//! fips256 abc -f a.bin -f - hello   # mixed batch, stdin included
//! fips256 --format json -f a.bin    # JSON lines
//! ```
//!
//! ## Modules
//!
//! - [`args`] — clap definitions and ordered input collection.
//! - [`config`] — YAML configuration file and flag overrides.
//! - [`input`] — what a single input is and how it is hashed.
//! - [`output`] — text and JSON-lines rendering of results.
//! - [`batch`] — sequential batch runner with progress reporting.

pub mod args;
pub mod batch;
pub mod config;
pub mod input;
pub mod output;

pub use args::{collect_inputs, Cli};
pub use batch::{run_batch, BatchSummary};
pub use config::{CliConfig, OutputFormat};
pub use input::{Input, InputKind};
