//! # Top-Level Driver
//!
//! Entry points that run a whole message through the pipeline:
//! segment → expand → compress per block → serialize.
//!
//! The byte-slice entry points are pure. The stream entry points read their
//! source to exhaustion first; the whole message must be in memory before
//! padding begins.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::block::segment;
use crate::compress::{compress, HashState};
use crate::digest::Digest;
use crate::error::ReadError;
use crate::schedule::expand;

/// Compute the SHA-256 digest of `message`.
pub fn digest(message: &[u8]) -> Digest {
    let blocks = segment(message);
    tracing::trace!(bytes = message.len(), blocks = blocks.len(), "hashing message");

    blocks
        .iter()
        .fold(HashState::initial(), |state, block| {
            compress(&expand(block), &state)
        })
        .to_digest()
}

/// Compute the SHA-256 digest of `message` as 64 lowercase hex characters.
pub fn hash(message: &[u8]) -> String {
    digest(message).to_hex()
}

/// Read `reader` to exhaustion and hash its contents.
///
/// Equivalent to [`hash`] over the bytes read. A read failure surfaces as
/// [`ReadError::Read`] and no digest is produced.
pub fn hash_reader<R: Read>(mut reader: R) -> Result<String, ReadError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    tracing::debug!(bytes = buf.len(), "read stream");
    Ok(hash(&buf))
}

/// Open the file at `path` and hash its contents.
///
/// Fails with [`ReadError::Open`] (carrying the path) if the file cannot be
/// opened, or [`ReadError::Read`] if reading it fails.
pub fn hash_file(path: impl AsRef<Path>) -> Result<String, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "opened file");
    hash_reader(file)
}
