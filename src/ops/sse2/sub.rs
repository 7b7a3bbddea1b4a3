//! Wrapping and saturating subtraction, forwarded to SSE2.

use std::arch::x86_64::*;

use super::{load, store};
use crate::m64::M64;

/// Subtracts packed 8-bit lanes with wraparound (`psubb`).
#[inline(always)]
pub fn sub_pi8(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_sub_epi8(load(a), load(b)) })
}

/// Subtracts packed 16-bit lanes with wraparound (`psubw`).
#[inline(always)]
pub fn sub_pi16(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_sub_epi16(load(a), load(b)) })
}

/// Subtracts packed 32-bit lanes with wraparound (`psubd`).
#[inline(always)]
pub fn sub_pi32(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_sub_epi32(load(a), load(b)) })
}

/// Subtracts packed signed 8-bit lanes with saturation (`psubsb`).
#[inline(always)]
pub fn subs_pi8(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_subs_epi8(load(a), load(b)) })
}

/// Subtracts packed unsigned 8-bit lanes with saturation (`psubusb`).
#[inline(always)]
pub fn subs_pu8(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_subs_epu8(load(a), load(b)) })
}

/// Subtracts packed signed 16-bit lanes with saturation (`psubsw`).
#[inline(always)]
pub fn subs_pi16(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_subs_epi16(load(a), load(b)) })
}

/// Subtracts packed unsigned 16-bit lanes with saturation (`psubusw`).
#[inline(always)]
pub fn subs_pu16(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_subs_epu16(load(a), load(b)) })
}
