//! Wrapping and saturating addition, forwarded to SSE2.

use std::arch::x86_64::*;

use super::{load, store};
use crate::m64::M64;

/// Adds packed 8-bit lanes with wraparound (`paddb`).
#[inline(always)]
pub fn add_pi8(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_add_epi8(load(a), load(b)) })
}

/// Adds packed 16-bit lanes with wraparound (`paddw`).
#[inline(always)]
pub fn add_pi16(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_add_epi16(load(a), load(b)) })
}

/// Adds packed 32-bit lanes with wraparound (`paddd`).
#[inline(always)]
pub fn add_pi32(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_add_epi32(load(a), load(b)) })
}

/// Adds packed signed 8-bit lanes with saturation (`paddsb`).
#[inline(always)]
pub fn adds_pi8(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_adds_epi8(load(a), load(b)) })
}

/// Adds packed unsigned 8-bit lanes with saturation (`paddusb`).
#[inline(always)]
pub fn adds_pu8(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_adds_epu8(load(a), load(b)) })
}

/// Adds packed signed 16-bit lanes with saturation (`paddsw`).
#[inline(always)]
pub fn adds_pi16(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_adds_epi16(load(a), load(b)) })
}

/// Adds packed unsigned 16-bit lanes with saturation (`paddusw`).
#[inline(always)]
pub fn adds_pu16(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_adds_epu16(load(a), load(b)) })
}
