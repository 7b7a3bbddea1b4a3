//! Whole-value bitwise operations, forwarded to SSE2.

use std::arch::x86_64::*;

use super::{load, store};
use crate::m64::M64;

/// Bitwise AND (`pand`).
#[inline(always)]
pub fn and_si64(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_and_si128(load(a), load(b)) })
}

/// Bitwise AND-NOT, `!a & b` (`pandn`).
#[inline(always)]
pub fn andnot_si64(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_andnot_si128(load(a), load(b)) })
}

/// Bitwise OR (`por`).
#[inline(always)]
pub fn or_si64(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_or_si128(load(a), load(b)) })
}

/// Bitwise XOR (`pxor`).
#[inline(always)]
pub fn xor_si64(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_xor_si128(load(a), load(b)) })
}
