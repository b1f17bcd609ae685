//! # fips256-core — SHA-256 Digest Pipeline
//!
//! Computes the SHA-256 digest (FIPS 180-4) of a complete byte sequence and
//! renders it as 64 lowercase hex characters.
//!
//! ## Pipeline
//!
//! The message flows bottom-up through three stages:
//!
//! 1. **Block Segmenter** ([`block::segment`]) pads the message and splits it
//!    into 64-byte blocks.
//! 2. **Schedule Expander** ([`schedule::expand`]) turns one block into a
//!    64-word message schedule.
//! 3. **Compressor** ([`compress::compress`]) folds one schedule into the
//!    running 8-word [`HashState`].
//!
//! The final state is serialized as a [`Digest`]. The state threads through
//! the blocks strictly in order; nothing else is carried between blocks.
//!
//! ```
//! assert_eq!(
//!     fips256_core::hash(b"abc"),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - The only fallible operations are the I/O entry points
//!   ([`hash_reader`], [`hash_file`]); the pipeline itself is total.

pub mod block;
pub mod compress;
pub mod constants;
pub mod digest;
pub mod error;
pub mod hash;
pub mod ops;
pub mod schedule;

// Re-export primary types for ergonomic imports.
pub use block::{block_count, segment, Block};
pub use compress::{compress, HashState};
pub use constants::{BLOCK_SIZE, DIGEST_SIZE, INITIAL_HASH, ROUND_CONSTANTS};
pub use digest::Digest;
pub use error::{DigestParseError, ReadError};
pub use hash::{digest, hash, hash_file, hash_reader};
pub use schedule::{expand, MessageSchedule};
