//! Widening interleaves, forwarded to SSE2.
//!
//! The low-half interleaves map directly onto `punpckl*`. The high-half
//! forms have no 64-bit-register counterpart in SSE2 (`punpckh*` reads the
//! high half of the 128-bit register, which is zero here), so each input's
//! high four bytes are first slid down with a 4-byte lane shift and then
//! interleaved with the low-half instruction.

use std::arch::x86_64::*;

use super::{load, store};
use crate::m64::M64;

#[inline(always)]
fn high_half(a: M64) -> __m128i {
    // SAFETY: sse2 is statically available on every x86_64 target.
    unsafe { _mm_srli_si128::<4>(load(a)) }
}

/// Interleaves the low four 8-bit lanes (`punpcklbw`).
#[inline(always)]
pub fn unpacklo_pi8(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_unpacklo_epi8(load(a), load(b)) })
}

/// Interleaves the low two 16-bit lanes (`punpcklwd`).
#[inline(always)]
pub fn unpacklo_pi16(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_unpacklo_epi16(load(a), load(b)) })
}

/// Interleaves the low 32-bit lanes (`punpckldq`).
#[inline(always)]
pub fn unpacklo_pi32(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_unpacklo_epi32(load(a), load(b)) })
}

/// Interleaves the high four 8-bit lanes (`punpckhbw`).
#[inline(always)]
pub fn unpackhi_pi8(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_unpacklo_epi8(high_half(a), high_half(b)) })
}

/// Interleaves the high two 16-bit lanes (`punpckhwd`).
#[inline(always)]
pub fn unpackhi_pi16(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_unpacklo_epi16(high_half(a), high_half(b)) })
}

/// Interleaves the high 32-bit lanes (`punpckhdq`).
#[inline(always)]
pub fn unpackhi_pi32(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_unpacklo_epi32(high_half(a), high_half(b)) })
}
