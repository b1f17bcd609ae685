//! # Error Types
//!
//! The hashing pipeline is total over any finite byte sequence, so the only
//! failures come from obtaining the bytes ([`ReadError`]) or from parsing a
//! digest back out of text ([`DigestParseError`]).

use std::path::PathBuf;

use thiserror::Error;

/// The input stream could not be opened or read to exhaustion.
///
/// Reported to the caller as-is; nothing is retried.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The named source could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading from an open stream failed.
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),
}

/// A string is not a valid hex-encoded SHA-256 digest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestParseError {
    /// Wrong number of hex characters.
    #[error("invalid digest length: expected 64 hex characters, got {0}")]
    InvalidLength(usize),

    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex character at position {position}")]
    InvalidHex {
        /// Byte offset of the offending character.
        position: usize,
    },
}
