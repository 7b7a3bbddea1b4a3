//! Mask-producing comparisons, forwarded to SSE2.

use std::arch::x86_64::*;

use super::{load, store};
use crate::m64::M64;

/// Per-lane 8-bit equality mask (`pcmpeqb`).
#[inline(always)]
pub fn cmpeq_pi8(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_cmpeq_epi8(load(a), load(b)) })
}

/// Per-lane 16-bit equality mask (`pcmpeqw`).
#[inline(always)]
pub fn cmpeq_pi16(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_cmpeq_epi16(load(a), load(b)) })
}

/// Per-lane 32-bit equality mask (`pcmpeqd`).
#[inline(always)]
pub fn cmpeq_pi32(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_cmpeq_epi32(load(a), load(b)) })
}

/// Per-lane signed 8-bit greater-than mask (`pcmpgtb`).
#[inline(always)]
pub fn cmpgt_pi8(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_cmpgt_epi8(load(a), load(b)) })
}

/// Per-lane signed 16-bit greater-than mask (`pcmpgtw`).
#[inline(always)]
pub fn cmpgt_pi16(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_cmpgt_epi16(load(a), load(b)) })
}

/// Per-lane signed 32-bit greater-than mask (`pcmpgtd`).
#[inline(always)]
pub fn cmpgt_pi32(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_cmpgt_epi32(load(a), load(b)) })
}
