//! Narrowing packs, forwarded to SSE2.
//!
//! The 128-bit pack instructions narrow eight wide lanes at once, so the two
//! 64-bit inputs are first placed side by side in one register with
//! `punpcklqdq`; the packed result then comes out in the low 8 bytes in the
//! required order (all of `a`'s lanes before all of `b`'s).

use std::arch::x86_64::*;

use super::{load, store};
use crate::m64::M64;

#[inline(always)]
fn widen_pair(a: M64, b: M64) -> __m128i {
    // SAFETY: sse2 is statically available on every x86_64 target.
    unsafe { _mm_unpacklo_epi64(load(a), load(b)) }
}

/// Packs signed 16-bit lanes into signed 8-bit lanes with saturation
/// (`packsswb`).
#[inline(always)]
pub fn packs_pi16(a: M64, b: M64) -> M64 {
    let ab = widen_pair(a, b);
    store(unsafe { _mm_packs_epi16(ab, ab) })
}

/// Packs signed 32-bit lanes into signed 16-bit lanes with saturation
/// (`packssdw`).
#[inline(always)]
pub fn packs_pi32(a: M64, b: M64) -> M64 {
    let ab = widen_pair(a, b);
    store(unsafe { _mm_packs_epi32(ab, ab) })
}

/// Packs signed 16-bit lanes into unsigned 8-bit lanes with saturation
/// (`packuswb`).
#[inline(always)]
pub fn packs_pu16(a: M64, b: M64) -> M64 {
    let ab = widen_pair(a, b);
    store(unsafe { _mm_packus_epi16(ab, ab) })
}
