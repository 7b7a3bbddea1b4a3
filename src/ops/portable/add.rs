//! Wrapping and saturating addition.

use crate::m64::M64;

/// Adds packed 8-bit lanes with wraparound.
#[inline(always)]
pub fn add_pi8(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i8(), b.to_i8());
    M64::from_i8(std::array::from_fn(|i| a[i].wrapping_add(b[i])))
}

/// Adds packed 16-bit lanes with wraparound.
#[inline(always)]
pub fn add_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16(), b.to_i16());
    M64::from_i16(std::array::from_fn(|i| a[i].wrapping_add(b[i])))
}

/// Adds packed 32-bit lanes with wraparound.
#[inline(always)]
pub fn add_pi32(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i32(), b.to_i32());
    M64::from_i32(std::array::from_fn(|i| a[i].wrapping_add(b[i])))
}

/// Adds packed signed 8-bit lanes, clamping to `[-128, 127]` on overflow.
#[inline(always)]
pub fn adds_pi8(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i8(), b.to_i8());
    M64::from_i8(std::array::from_fn(|i| a[i].saturating_add(b[i])))
}

/// Adds packed unsigned 8-bit lanes, clamping to `[0, 255]` on overflow.
#[inline(always)]
pub fn adds_pu8(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_u8(), b.to_u8());
    M64::from_u8(std::array::from_fn(|i| a[i].saturating_add(b[i])))
}

/// Adds packed signed 16-bit lanes, clamping to `[-32768, 32767]`.
#[inline(always)]
pub fn adds_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16(), b.to_i16());
    M64::from_i16(std::array::from_fn(|i| a[i].saturating_add(b[i])))
}

/// Adds packed unsigned 16-bit lanes, clamping to `[0, 65535]`.
#[inline(always)]
pub fn adds_pu16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_u16(), b.to_u16());
    M64::from_u16(std::array::from_fn(|i| a[i].saturating_add(b[i])))
}
