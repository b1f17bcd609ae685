//! # Result Rendering
//!
//! Text output mirrors the `sha256sum` layout; JSON output is one object per
//! line so batches can be piped into line-oriented tools.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::input::{Input, InputKind};

/// Outcome of hashing one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashRecord {
    pub input: String,
    pub kind: InputKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HashRecord {
    pub fn success(input: &Input, digest: String) -> Self {
        Self {
            input: input.to_string(),
            kind: input.kind(),
            digest: Some(digest),
            error: None,
        }
    }

    pub fn failure(input: &Input, error: impl ToString) -> Self {
        Self {
            input: input.to_string(),
            kind: input.kind(),
            digest: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Write `record` in `format`.
///
/// In text mode failures go to `err` so stdout stays parseable; in JSON mode
/// every record goes to `out`.
pub fn write_record(
    record: &HashRecord,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    match (format, &record.digest, &record.error) {
        (OutputFormat::Json, _, _) => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)?;
        }
        (OutputFormat::Text, Some(digest), _) => {
            writeln!(out, "{digest}  {}", record.input)?;
        }
        (OutputFormat::Text, None, error) => {
            let reason = error.as_deref().unwrap_or("unknown error");
            writeln!(err, "fips256: {}: {reason}", record.input)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    fn render(record: &HashRecord, format: OutputFormat) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        write_record(record, format, &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_text_success() {
        let record = HashRecord::success(&Input::Text("abc".into()), ABC.into());
        let (out, err) = render(&record, OutputFormat::Text);
        assert_eq!(out, format!("{ABC}  \"abc\"\n"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_text_failure_goes_to_stderr() {
        let input = Input::File(PathBuf::from("nope.bin"));
        let record = HashRecord::failure(&input, "cannot open nope.bin: not found");
        assert!(record.is_failure());
        let (out, err) = render(&record, OutputFormat::Text);
        assert!(out.is_empty());
        assert_eq!(err, "fips256: nope.bin: cannot open nope.bin: not found\n");
    }

    #[test]
    fn test_json_success() {
        let record = HashRecord::success(&Input::Text("abc".into()), ABC.into());
        let (out, _) = render(&record, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["input"], "\"abc\"");
        assert_eq!(value["kind"], "string");
        assert_eq!(value["digest"], ABC);
        assert!(value.get("error").is_none());
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_json_failure() {
        let record = HashRecord::failure(&Input::Stdin, "read failed: broken pipe");
        let (out, err) = render(&record, OutputFormat::Json);
        assert!(err.is_empty());
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["kind"], "stdin");
        assert_eq!(value["error"], "read failed: broken pipe");
        assert!(value.get("digest").is_none());
    }
}
