//! # Inputs
//!
//! One command-line input: a literal string, a file, or standard input.

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

use fips256_core::ReadError;

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// A single thing to hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Hash the UTF-8 bytes of this string.
    Text(String),
    /// Hash the contents of this file.
    File(PathBuf),
    /// Hash everything on standard input.
    Stdin,
}

/// Input category reported in JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    String,
    File,
    Stdin,
}

impl Input {
    /// Classify a `-f` argument; `-` means standard input.
    pub fn from_file_arg(path: PathBuf) -> Self {
        if path.as_os_str() == STDIN_PATH {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }

    pub fn kind(&self) -> InputKind {
        match self {
            Self::Text(_) => InputKind::String,
            Self::File(_) => InputKind::File,
            Self::Stdin => InputKind::Stdin,
        }
    }

    /// Hash this input. Only file and stdin inputs can fail.
    pub fn hash(&self) -> Result<String, ReadError> {
        match self {
            Self::Text(s) => Ok(fips256_core::hash(s.as_bytes())),
            Self::File(path) => fips256_core::hash_file(path),
            Self::Stdin => fips256_core::hash_reader(io::stdin().lock()),
        }
    }
}

/// The label printed next to the digest: quoted strings, plain paths.
impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str(STDIN_PATH),
        }
    }
}
