//! # Batch Runner
//!
//! Hashes each input in command-line order. Inputs are independent: an
//! unreadable file is reported and the batch moves on, unless `fail_fast` is
//! set.

use std::io::Write;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::CliConfig;
use crate::input::Input;
use crate::output::{write_record, HashRecord};

/// Counts reported after a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Inputs that produced a digest.
    pub hashed: usize,
    /// Inputs that could not be read.
    pub failed: usize,
    /// Inputs never attempted because the batch stopped early.
    pub skipped: usize,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.skipped == 0
    }
}

/// Hash every input, writing one record per attempted input.
///
/// Errors from the writers are returned; per-input read errors are not.
pub fn run_batch(
    inputs: &[Input],
    config: &CliConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<BatchSummary> {
    let bar = progress_bar(inputs.len(), config.progress)?;
    let mut summary = BatchSummary::default();

    for (i, input) in inputs.iter().enumerate() {
        bar.set_message(input.to_string());

        let record = match input.hash() {
            Ok(digest) => {
                tracing::debug!(%input, %digest, "hashed input");
                summary.hashed += 1;
                HashRecord::success(input, digest)
            }
            Err(e) => {
                tracing::debug!(%input, error = %e, "input failed");
                summary.failed += 1;
                HashRecord::failure(input, e)
            }
        };

        bar.suspend(|| write_record(&record, config.format, &mut *out, &mut *err))?;
        bar.inc(1);

        if record.is_failure() && config.fail_fast {
            summary.skipped = inputs.len() - i - 1;
            tracing::info!(skipped = summary.skipped, "stopping at first failure");
            break;
        }
    }

    bar.finish_and_clear();
    tracing::info!(
        hashed = summary.hashed,
        failed = summary.failed,
        "batch complete"
    );
    Ok(summary)
}

fn progress_bar(len: usize, enabled: bool) -> Result<ProgressBar> {
    if !enabled {
        return Ok(ProgressBar::hidden());
    }
    let bar = ProgressBar::new(len as u64);
    bar.set_style(ProgressStyle::with_template(
        "{spinner} [{pos}/{len}] {wide_msg}",
    )?);
    Ok(bar)
}
