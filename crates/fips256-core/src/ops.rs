//! # Bitwise Primitives
//!
//! The logical functions of FIPS 180-4 §4.1.2, written as direct formulas
//! over 32-bit words. Rotation and shift use the native `u32` operations.

/// σ0 — schedule mixing of `w[i-15]`.
#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1 — schedule mixing of `w[i-2]`.
#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Σ0 — round mixing of register `a`.
#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1 — round mixing of register `e`.
#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// Ch — each bit of `x` selects the bit of `y` (set) or `z` (clear).
#[inline(always)]
pub fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// Maj — each output bit is the majority of the three input bits.
#[inline(always)]
pub fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}
