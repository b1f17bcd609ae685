//! # Block Segmenter — Message Padding and Parsing
//!
//! Pads a complete message per FIPS 180-4 §5.1.1 and parses it into 64-byte
//! blocks (§5.2.1).
//!
//! ## Padding Rule
//!
//! After the message comes a single `1` bit (the byte `0x80`, since input is
//! always byte-aligned), then zero bytes until 56 bytes remain before the next
//! block boundary, then the message length in bits as a big-endian `u64`.
//!
//! ## Length Classes
//!
//! With `r = len % 64`:
//!
//! - `r < 56`: the marker and the length suffix fit in the final block.
//! - `56 <= r < 64`: the final block carries the tail and the marker; one more
//!   block carries only zeros and the length suffix.
//! - `r == 0` (including the empty message): one extra block starting with the
//!   marker in byte 0 and ending with the length suffix.
//!
//! No partial block ever leaves this module.

use crate::constants::{BLOCK_SIZE, LENGTH_SUFFIX_SIZE};

/// One 512-bit message block.
pub type Block = [u8; BLOCK_SIZE];

/// Marker byte carrying the single `1` bit appended after the message.
const END_MARKER: u8 = 0x80;

/// Offset of the length suffix within the final block.
const SUFFIX_OFFSET: usize = BLOCK_SIZE - LENGTH_SUFFIX_SIZE;

/// Number of blocks [`segment`] emits for a message of `len` bytes.
pub fn block_count(len: usize) -> usize {
    // Message + marker + suffix, rounded up to whole blocks.
    (len + 1 + LENGTH_SUFFIX_SIZE).div_ceil(BLOCK_SIZE)
}

/// Pad `message` and split it into an ordered sequence of 64-byte blocks.
///
/// Message bytes come first, in their original order. The last 8 bytes of the
/// last block hold the message length in bits, big-endian.
pub fn segment(message: &[u8]) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(block_count(message.len()));

    let mut chunks = message.chunks_exact(BLOCK_SIZE);
    for chunk in chunks.by_ref() {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        blocks.push(block);
    }

    let tail = chunks.remainder();
    let mut last = [0u8; BLOCK_SIZE];
    last[..tail.len()].copy_from_slice(tail);
    last[tail.len()] = END_MARKER;

    if tail.len() >= SUFFIX_OFFSET {
        // No room left for the suffix: spill into a block of its own.
        blocks.push(last);
        last = [0u8; BLOCK_SIZE];
    }

    last[SUFFIX_OFFSET..].copy_from_slice(&bit_length(message.len()).to_be_bytes());
    blocks.push(last);

    debug_assert_eq!(blocks.len(), block_count(message.len()));
    blocks
}

/// Message length in bits. Lengths whose bit count exceeds `u64` wrap, which
/// only affects messages beyond 2 EiB.
fn bit_length(len: usize) -> u64 {
    (len as u64).wrapping_mul(8)
}
