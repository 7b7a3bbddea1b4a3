//! Wrapping and saturating subtraction.

use crate::m64::M64;

/// Subtracts packed 8-bit lanes with wraparound.
#[inline(always)]
pub fn sub_pi8(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i8(), b.to_i8());
    M64::from_i8(std::array::from_fn(|i| a[i].wrapping_sub(b[i])))
}

/// Subtracts packed 16-bit lanes with wraparound.
#[inline(always)]
pub fn sub_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16(), b.to_i16());
    M64::from_i16(std::array::from_fn(|i| a[i].wrapping_sub(b[i])))
}

/// Subtracts packed 32-bit lanes with wraparound.
#[inline(always)]
pub fn sub_pi32(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i32(), b.to_i32());
    M64::from_i32(std::array::from_fn(|i| a[i].wrapping_sub(b[i])))
}

/// Subtracts packed signed 8-bit lanes, clamping to `[-128, 127]`.
#[inline(always)]
pub fn subs_pi8(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i8(), b.to_i8());
    M64::from_i8(std::array::from_fn(|i| a[i].saturating_sub(b[i])))
}

/// Subtracts packed unsigned 8-bit lanes, clamping at 0.
#[inline(always)]
pub fn subs_pu8(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_u8(), b.to_u8());
    M64::from_u8(std::array::from_fn(|i| a[i].saturating_sub(b[i])))
}

/// Subtracts packed signed 16-bit lanes, clamping to `[-32768, 32767]`.
#[inline(always)]
pub fn subs_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16(), b.to_i16());
    M64::from_i16(std::array::from_fn(|i| a[i].saturating_sub(b[i])))
}

/// Subtracts packed unsigned 16-bit lanes, clamping at 0.
#[inline(always)]
pub fn subs_pu16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_u16(), b.to_u16());
    M64::from_u16(std::array::from_fn(|i| a[i].saturating_sub(b[i])))
}
