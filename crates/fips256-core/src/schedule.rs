//! # Schedule Expander
//!
//! Expands one 64-byte block into the 64-word message schedule of
//! FIPS 180-4 §6.2.2 step 1.

use crate::block::Block;
use crate::constants::ROUNDS;
use crate::ops::{small_sigma0, small_sigma1};

/// The 64 words consumed by one block's compression rounds.
pub type MessageSchedule = [u32; ROUNDS];

/// Expand `block` into its message schedule.
///
/// Words 0..16 are the block's bytes repacked big-endian, four at a time.
/// Each later word is `σ1(w[i-2]) + w[i-7] + σ0(w[i-15]) + w[i-16]`, mod 2^32.
pub fn expand(block: &Block) -> MessageSchedule {
    let mut w = [0u32; ROUNDS];

    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    for i in 16..ROUNDS {
        w[i] = small_sigma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }

    w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::segment;

    #[test]
    fn test_first_words_are_big_endian() {
        let mut block = [0u8; 64];
        block[..8].copy_from_slice(&[0x01, 0x02, 0x03, 0x04, 0xde, 0xad, 0xbe, 0xef]);
        block[63] = 0xff;
        let w = expand(&block);
        assert_eq!(w[0], 0x0102_0304);
        assert_eq!(w[1], 0xdead_beef);
        assert_eq!(w[15], 0x0000_00ff);
    }

    #[test]
    fn test_zero_block_expands_to_zero() {
        assert_eq!(expand(&[0u8; 64]), [0u32; 64]);
    }

    #[test]
    fn test_abc_schedule_known_words() {
        // FIPS 180-4 example "abc": W[0] is the message, W[15] its bit length.
        let blocks = segment(b"abc");
        let w = expand(&blocks[0]);
        assert_eq!(w[0], 0x6162_6380);
        assert!(w[1..15].iter().all(|&x| x == 0));
        assert_eq!(w[15], 0x0000_0018);
        assert_eq!(w[16], 0x6162_6380);
        assert_eq!(w[17], 0x000f_0000);
        assert_eq!(w[63], 0x12b1_edeb);
    }

    #[test]
    fn test_recurrence_holds_for_every_word() {
        let block: Block = core::array::from_fn(|i| (i as u8).wrapping_mul(37));
        let w = expand(&block);
        for i in 16..64 {
            let expected = small_sigma1(w[i - 2])
                .wrapping_add(w[i - 7])
                .wrapping_add(small_sigma0(w[i - 15]))
                .wrapping_add(w[i - 16]);
            assert_eq!(w[i], expected, "word {i}");
        }
    }
}
