//! Whole-value bitwise operations.
//!
//! Lane width is irrelevant here: every lane view of a bitwise result agrees,
//! so these work on the full 64-bit pattern directly.

use crate::m64::M64;

/// Bitwise AND of two vectors.
#[inline(always)]
pub fn and_si64(a: M64, b: M64) -> M64 {
    M64::from_u64(a.to_u64() & b.to_u64())
}

/// Bitwise AND of `b` with the complement of `a` (`!a & b`).
#[inline(always)]
pub fn andnot_si64(a: M64, b: M64) -> M64 {
    M64::from_u64(!a.to_u64() & b.to_u64())
}

/// Bitwise OR of two vectors.
#[inline(always)]
pub fn or_si64(a: M64, b: M64) -> M64 {
    M64::from_u64(a.to_u64() | b.to_u64())
}

/// Bitwise XOR of two vectors.
#[inline(always)]
pub fn xor_si64(a: M64, b: M64) -> M64 {
    M64::from_u64(a.to_u64() ^ b.to_u64())
}
