//! Widening interleaves.
//!
//! `unpacklo_*` alternates the low-half lanes of the two inputs
//! (a0, b0, a1, b1, ...), `unpackhi_*` does the same with the high-half
//! lanes. Total width stays 8 bytes; each element pairing doubles the
//! effective lane width.

use crate::m64::M64;

/// Interleaves the low four 8-bit lanes of `a` and `b`.
#[inline(always)]
pub fn unpacklo_pi8(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i8(), b.to_i8());
    M64::from_i8([a[0], b[0], a[1], b[1], a[2], b[2], a[3], b[3]])
}

/// Interleaves the low two 16-bit lanes of `a` and `b`.
#[inline(always)]
pub fn unpacklo_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16(), b.to_i16());
    M64::from_i16([a[0], b[0], a[1], b[1]])
}

/// Places the low 32-bit lane of `a` below the low lane of `b`.
#[inline(always)]
pub fn unpacklo_pi32(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i32(), b.to_i32());
    M64::from_i32([a[0], b[0]])
}

/// Interleaves the high four 8-bit lanes of `a` and `b`.
#[inline(always)]
pub fn unpackhi_pi8(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i8(), b.to_i8());
    M64::from_i8([a[4], b[4], a[5], b[5], a[6], b[6], a[7], b[7]])
}

/// Interleaves the high two 16-bit lanes of `a` and `b`.
#[inline(always)]
pub fn unpackhi_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16(), b.to_i16());
    M64::from_i16([a[2], b[2], a[3], b[3]])
}

/// Places the high 32-bit lane of `a` below the high lane of `b`.
#[inline(always)]
pub fn unpackhi_pi32(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i32(), b.to_i32());
    M64::from_i32([a[1], b[1]])
}
