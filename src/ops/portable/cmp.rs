//! Per-lane comparisons producing mask results.
//!
//! A lane where the predicate holds becomes all-one bits, otherwise all-zero
//! bits. Never a bare `1`/`0`: the output is meant to be fed into the
//! bitwise operations as a select mask.

use crate::m64::M64;

/// Per-lane 8-bit equality mask.
#[inline(always)]
pub fn cmpeq_pi8(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i8(), b.to_i8());
    M64::from_i8(std::array::from_fn(|i| -((a[i] == b[i]) as i8)))
}

/// Per-lane 16-bit equality mask.
#[inline(always)]
pub fn cmpeq_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16(), b.to_i16());
    M64::from_i16(std::array::from_fn(|i| -((a[i] == b[i]) as i16)))
}

/// Per-lane 32-bit equality mask.
#[inline(always)]
pub fn cmpeq_pi32(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i32(), b.to_i32());
    M64::from_i32(std::array::from_fn(|i| -((a[i] == b[i]) as i32)))
}

/// Per-lane signed 8-bit greater-than mask.
#[inline(always)]
pub fn cmpgt_pi8(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i8(), b.to_i8());
    M64::from_i8(std::array::from_fn(|i| -((a[i] > b[i]) as i8)))
}

/// Per-lane signed 16-bit greater-than mask.
#[inline(always)]
pub fn cmpgt_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16(), b.to_i16());
    M64::from_i16(std::array::from_fn(|i| -((a[i] > b[i]) as i16)))
}

/// Per-lane signed 32-bit greater-than mask.
#[inline(always)]
pub fn cmpgt_pi32(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i32(), b.to_i32());
    M64::from_i32(std::array::from_fn(|i| -((a[i] > b[i]) as i32)))
}
