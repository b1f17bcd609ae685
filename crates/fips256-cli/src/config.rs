//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every field has a default, so
//! an empty file is valid. Command-line flags override file values.
//!
//! ```yaml
//! format: json
//! progress: true
//! fail_fast: false
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<digest>  <label>`, one line per input.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Effective settings for a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Draw a progress bar on stderr.
    pub progress: bool,
    /// Stop at the first input that cannot be read.
    pub fail_fast: bool,
}

impl CliConfig {
    /// Parse configuration from YAML text. Blank text yields the defaults.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Apply command-line overrides. Boolean flags can only switch a
    /// behavior on; an explicit `--format` replaces the file's format.
    pub fn with_overrides(
        mut self,
        format: Option<OutputFormat>,
        progress: bool,
        fail_fast: bool,
    ) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self.progress |= progress;
        self.fail_fast |= fail_fast;
        self
    }
}
