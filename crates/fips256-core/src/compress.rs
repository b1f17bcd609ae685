//! # Compressor — The 64-Round Compression Function
//!
//! Folds one [`MessageSchedule`] into the running [`HashState`]
//! (FIPS 180-4 §6.2.2 steps 2–4).
//!
//! ## Hot Path
//!
//! This loop runs 64 times per block. The eight working registers live in
//! locals; nothing is allocated per round or per block.

use crate::constants::{DIGEST_SIZE, INITIAL_HASH, ROUNDS, ROUND_CONSTANTS};
use crate::digest::Digest;
use crate::ops::{big_sigma0, big_sigma1, ch, maj};
use crate::schedule::MessageSchedule;

/// The 8-word running accumulator threaded through the blocks of one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashState([u32; 8]);

impl HashState {
    /// The state every message starts from ([`INITIAL_HASH`]).
    pub const fn initial() -> Self {
        Self(INITIAL_HASH)
    }

    /// Wrap raw state words.
    pub const fn from_words(words: [u32; 8]) -> Self {
        Self(words)
    }

    /// The raw state words, `a` through `h`.
    pub const fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// Serialize the state as 8 big-endian words.
    pub fn to_digest(&self) -> Digest {
        let mut bytes = [0u8; DIGEST_SIZE];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.0) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Digest::new(bytes)
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Apply the 64 compression rounds of `schedule` to `state`, returning the
/// new state. Neither argument is modified.
pub fn compress(schedule: &MessageSchedule, state: &HashState) -> HashState {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state.0;

    for i in 0..ROUNDS {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(ROUND_CONSTANTS[i])
            .wrapping_add(schedule[i]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    let mut out = state.0;
    for (word, reg) in out.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(reg);
    }
    HashState(out)
}
