//! The 16-bit multiply family.

use crate::m64::M64;

/// Multiplies adjacent pairs of signed 16-bit lanes and sums each pair into
/// a 32-bit lane (the `pmaddwd` dot-product-of-pairs).
///
/// The pair sum wraps like the hardware instruction does: both products
/// being `(-32768)²` yields `i32::MIN`, not a saturated value.
#[inline(always)]
pub fn madd_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16(), b.to_i16());
    M64::from_i32(std::array::from_fn(|i| {
        let lo = (a[2 * i] as i32) * (b[2 * i] as i32);
        let hi = (a[2 * i + 1] as i32) * (b[2 * i + 1] as i32);
        lo.wrapping_add(hi)
    }))
}

/// High 16 bits of each signed 16x16 -> 32 product.
#[inline(always)]
pub fn mulhi_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16(), b.to_i16());
    M64::from_i16(std::array::from_fn(|i| {
        (((a[i] as i32) * (b[i] as i32)) >> 16) as i16
    }))
}

/// Low 16 bits of each 16x16 product (wrapping multiply).
#[inline(always)]
pub fn mullo_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16(), b.to_i16());
    M64::from_i16(std::array::from_fn(|i| a[i].wrapping_mul(b[i])))
}
