//! Shifts, forwarded to SSE2.
//!
//! The by-vector-count instructions (`psllw` and friends) already define the
//! out-of-range cases the way the portable path does: logical shifts by at
//! least the lane width produce zero, arithmetic right shifts saturate the
//! count and sign-fill. The by-immediate forms reuse the same instructions
//! with the count moved into a register, because Rust's immediate-shift
//! intrinsics take a const generic that a runtime count cannot feed; for the
//! caller-guaranteed in-range counts the results are identical.

use std::arch::x86_64::*;

use super::{load, store};
use crate::m64::M64;

#[inline(always)]
fn count_reg(count: u32) -> __m128i {
    // SAFETY: sse2 is statically available on every x86_64 target.
    unsafe { _mm_cvtsi32_si128(count as i32) }
}

/// Shifts 16-bit lanes left by a vector count (`psllw`).
#[inline(always)]
pub fn sll_pi16(a: M64, count: M64) -> M64 {
    store(unsafe { _mm_sll_epi16(load(a), load(count)) })
}

/// Shifts 32-bit lanes left by a vector count (`pslld`).
#[inline(always)]
pub fn sll_pi32(a: M64, count: M64) -> M64 {
    store(unsafe { _mm_sll_epi32(load(a), load(count)) })
}

/// Shifts the whole 64-bit value left by a vector count (`psllq`).
#[inline(always)]
pub fn sll_si64(a: M64, count: M64) -> M64 {
    store(unsafe { _mm_sll_epi64(load(a), load(count)) })
}

/// Shifts 16-bit lanes right logically by a vector count (`psrlw`).
#[inline(always)]
pub fn srl_pi16(a: M64, count: M64) -> M64 {
    store(unsafe { _mm_srl_epi16(load(a), load(count)) })
}

/// Shifts 32-bit lanes right logically by a vector count (`psrld`).
#[inline(always)]
pub fn srl_pi32(a: M64, count: M64) -> M64 {
    store(unsafe { _mm_srl_epi32(load(a), load(count)) })
}

/// Shifts the whole 64-bit value right logically by a vector count
/// (`psrlq`).
#[inline(always)]
pub fn srl_si64(a: M64, count: M64) -> M64 {
    store(unsafe { _mm_srl_epi64(load(a), load(count)) })
}

/// Shifts signed 16-bit lanes right arithmetically by a vector count
/// (`psraw`). The instruction reads the count as unsigned, so a negative
/// count saturates to full sign-fill, same as the portable path.
#[inline(always)]
pub fn sra_pi16(a: M64, count: M64) -> M64 {
    store(unsafe { _mm_sra_epi16(load(a), load(count)) })
}

/// Shifts signed 32-bit lanes right arithmetically by a vector count
/// (`psrad`).
#[inline(always)]
pub fn sra_pi32(a: M64, count: M64) -> M64 {
    store(unsafe { _mm_sra_epi32(load(a), load(count)) })
}

/// Shifts 16-bit lanes left by an immediate count in `0..16`.
#[inline(always)]
pub fn slli_pi16(a: M64, count: u32) -> M64 {
    debug_assert!(count < 16, "immediate shift count out of range");
    store(unsafe { _mm_sll_epi16(load(a), count_reg(count)) })
}

/// Shifts 32-bit lanes left by an immediate count in `0..32`.
#[inline(always)]
pub fn slli_pi32(a: M64, count: u32) -> M64 {
    debug_assert!(count < 32, "immediate shift count out of range");
    store(unsafe { _mm_sll_epi32(load(a), count_reg(count)) })
}

/// Shifts the whole 64-bit value left by an immediate count in `0..64`.
#[inline(always)]
pub fn slli_si64(a: M64, count: u32) -> M64 {
    debug_assert!(count < 64, "immediate shift count out of range");
    store(unsafe { _mm_sll_epi64(load(a), count_reg(count)) })
}

/// Shifts 16-bit lanes right logically by an immediate count in `0..16`.
#[inline(always)]
pub fn srli_pi16(a: M64, count: u32) -> M64 {
    debug_assert!(count < 16, "immediate shift count out of range");
    store(unsafe { _mm_srl_epi16(load(a), count_reg(count)) })
}

/// Shifts 32-bit lanes right logically by an immediate count in `0..32`.
#[inline(always)]
pub fn srli_pi32(a: M64, count: u32) -> M64 {
    debug_assert!(count < 32, "immediate shift count out of range");
    store(unsafe { _mm_srl_epi32(load(a), count_reg(count)) })
}

/// Shifts the whole 64-bit value right logically by an immediate count in
/// `0..64`.
#[inline(always)]
pub fn srli_si64(a: M64, count: u32) -> M64 {
    debug_assert!(count < 64, "immediate shift count out of range");
    store(unsafe { _mm_srl_epi64(load(a), count_reg(count)) })
}

/// Shifts signed 16-bit lanes right arithmetically by an immediate count in
/// `0..16`.
#[inline(always)]
pub fn srai_pi16(a: M64, count: u32) -> M64 {
    debug_assert!(count < 16, "immediate shift count out of range");
    store(unsafe { _mm_sra_epi16(load(a), count_reg(count)) })
}

/// Shifts signed 32-bit lanes right arithmetically by an immediate count in
/// `0..32`.
#[inline(always)]
pub fn srai_pi32(a: M64, count: u32) -> M64 {
    debug_assert!(count < 32, "immediate shift count out of range");
    store(unsafe { _mm_sra_epi32(load(a), count_reg(count)) })
}
