//! # Reference Vector Tests
//!
//! Checks the pipeline against the FIPS 180-4 / NIST example vectors and, for
//! the padding boundary lengths and arbitrary inputs, against the `sha2`
//! crate as an independent reference implementation.

use fips256_core::{digest, hash, hash_reader, segment, BLOCK_SIZE};
use proptest::prelude::*;
use sha2::{Digest as _, Sha256};

/// Reference digest from the `sha2` crate.
fn reference_hex(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

// ---------------------------------------------------------------------------
// NIST example vectors
// ---------------------------------------------------------------------------

#[test]
fn test_nist_empty() {
    assert_eq!(
        hash(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_nist_abc() {
    assert_eq!(
        hash(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_nist_two_block_message() {
    let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    assert_eq!(msg.len(), 56);
    assert_eq!(segment(msg).len(), 2);
    assert_eq!(
        hash(msg),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn test_nist_896_bit_message() {
    let msg = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
    assert_eq!(
        hash(msg),
        "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1"
    );
}

#[test]
fn test_nist_one_million_a() {
    let msg = vec![b'a'; 1_000_000];
    assert_eq!(
        hash(&msg),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test]
fn test_quick_brown_fox() {
    assert_eq!(
        hash(b"The quick brown fox jumps over the lazy dog"),
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
    );
}

// ---------------------------------------------------------------------------
// Padding boundaries
// ---------------------------------------------------------------------------

#[test]
fn test_padding_boundaries_match_reference() {
    for len in [1, 54, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 129, 1000] {
        let msg: Vec<u8> = (0..len).map(|i| (i * 7 + 3) as u8).collect();
        assert_eq!(hash(&msg), reference_hex(&msg), "length {len}");
    }
}

#[test]
fn test_every_length_up_to_three_blocks() {
    for len in 0..=3 * BLOCK_SIZE {
        let msg = vec![0xa5u8; len];
        assert_eq!(hash(&msg), reference_hex(&msg), "length {len}");
    }
}

#[test]
fn test_single_bit_flip_changes_digest() {
    let msg = vec![0u8; 100];
    let mut flipped = msg.clone();
    flipped[99] ^= 1;
    assert_ne!(digest(&msg), digest(&flipped));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Output is always 64 lowercase hex characters.
    #[test]
    fn hash_is_64_lowercase_hex(msg in proptest::collection::vec(any::<u8>(), 0..300)) {
        let hex = hash(&msg);
        prop_assert_eq!(hex.len(), 64);
        prop_assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    /// Agrees with the `sha2` crate on arbitrary input.
    #[test]
    fn hash_matches_reference(msg in proptest::collection::vec(any::<u8>(), 0..600)) {
        prop_assert_eq!(hash(&msg), reference_hex(&msg));
    }

    /// Hashing a stream equals hashing the bytes it yields.
    #[test]
    fn reader_equals_bytes(msg in proptest::collection::vec(any::<u8>(), 0..300)) {
        prop_assert_eq!(hash_reader(msg.as_slice()).unwrap(), hash(&msg));
    }
}
