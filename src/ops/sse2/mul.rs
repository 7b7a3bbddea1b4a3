//! The 16-bit multiply family, forwarded to SSE2.

use std::arch::x86_64::*;

use super::{load, store};
use crate::m64::M64;

/// Pairwise multiply-add of signed 16-bit lanes into 32-bit lanes
/// (`pmaddwd`). The upper half of the register is zero, so its pair sums
/// are zero and fall outside the stored 8 bytes.
#[inline(always)]
pub fn madd_pi16(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_madd_epi16(load(a), load(b)) })
}

/// High 16 bits of each signed 16x16 product (`pmulhw`).
#[inline(always)]
pub fn mulhi_pi16(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_mulhi_epi16(load(a), load(b)) })
}

/// Low 16 bits of each 16x16 product (`pmullw`).
#[inline(always)]
pub fn mullo_pi16(a: M64, b: M64) -> M64 {
    store(unsafe { _mm_mullo_epi16(load(a), load(b)) })
}
