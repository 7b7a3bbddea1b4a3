//! Narrowing packs with saturation.
//!
//! Each wide lane is clamped into the narrow lane's range independently, and
//! the first input's lanes land before the second input's lanes in the
//! result.

use crate::m64::M64;

#[inline(always)]
fn sat_i16_to_i8(lane: i16) -> i8 {
    lane.clamp(i8::MIN as i16, i8::MAX as i16) as i8
}

#[inline(always)]
fn sat_i32_to_i16(lane: i32) -> i16 {
    lane.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

#[inline(always)]
fn sat_i16_to_u8(lane: i16) -> u8 {
    lane.clamp(0, u8::MAX as i16) as u8
}

/// Packs two vectors of signed 16-bit lanes into one vector of signed 8-bit
/// lanes, saturating each lane to `[-128, 127]`.
#[inline(always)]
pub fn packs_pi16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16(), b.to_i16());
    M64::from_i8(std::array::from_fn(|i| {
        if i < 4 {
            sat_i16_to_i8(a[i])
        } else {
            sat_i16_to_i8(b[i - 4])
        }
    }))
}

/// Packs two vectors of signed 32-bit lanes into one vector of signed
/// 16-bit lanes, saturating each lane to `[-32768, 32767]`.
#[inline(always)]
pub fn packs_pi32(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i32(), b.to_i32());
    M64::from_i16(std::array::from_fn(|i| {
        if i < 2 {
            sat_i32_to_i16(a[i])
        } else {
            sat_i32_to_i16(b[i - 2])
        }
    }))
}

/// Packs two vectors of *signed* 16-bit lanes into one vector of unsigned
/// 8-bit lanes, saturating each lane to `[0, 255]` (negative lanes become 0).
#[inline(always)]
pub fn packs_pu16(a: M64, b: M64) -> M64 {
    let (a, b) = (a.to_i16(), b.to_i16());
    M64::from_u8(std::array::from_fn(|i| {
        if i < 4 {
            sat_i16_to_u8(a[i])
        } else {
            sat_i16_to_u8(b[i - 4])
        }
    }))
}
