//! Logical and arithmetic shifts.
//!
//! Two families per direction. The by-vector-count forms (`sll`, `srl`,
//! `sra`) take the count from the low 64 bits of a vector and explicitly
//! define the out-of-range cases: a logical shift by at least the lane width
//! is all-zero, an arithmetic right shift saturates to full sign-fill. The
//! by-immediate forms (`slli`, `srli`, `srai`) take a plain integer that the
//! caller guarantees to be within the lane width, checked only by
//! `debug_assert!` - the same contract the hardware immediate encodings
//! have. The asymmetry is deliberate; do not "fix" one family to match the
//! other.

use crate::m64::M64;

/// Shifts 16-bit lanes left by the low 64 bits of `count`; counts above 15
/// yield the all-zero vector.
#[inline(always)]
pub fn sll_pi16(a: M64, count: M64) -> M64 {
    let cnt = count.to_u64();
    if cnt > 15 {
        return M64::ZERO;
    }
    M64::from_u16(a.to_u16().map(|lane| lane << cnt))
}

/// Shifts 32-bit lanes left by the low 64 bits of `count`; counts above 31
/// yield the all-zero vector.
#[inline(always)]
pub fn sll_pi32(a: M64, count: M64) -> M64 {
    let cnt = count.to_u64();
    if cnt > 31 {
        return M64::ZERO;
    }
    M64::from_u32(a.to_u32().map(|lane| lane << cnt))
}

/// Shifts the whole 64-bit value left; counts above 63 yield zero.
#[inline(always)]
pub fn sll_si64(a: M64, count: M64) -> M64 {
    let cnt = count.to_u64();
    if cnt > 63 {
        return M64::ZERO;
    }
    M64::from_u64(a.to_u64() << cnt)
}

/// Shifts 16-bit lanes right logically (zero-fill); counts above 15 yield
/// the all-zero vector.
#[inline(always)]
pub fn srl_pi16(a: M64, count: M64) -> M64 {
    let cnt = count.to_u64();
    if cnt > 15 {
        return M64::ZERO;
    }
    M64::from_u16(a.to_u16().map(|lane| lane >> cnt))
}

/// Shifts 32-bit lanes right logically; counts above 31 yield the all-zero
/// vector.
#[inline(always)]
pub fn srl_pi32(a: M64, count: M64) -> M64 {
    let cnt = count.to_u64();
    if cnt > 31 {
        return M64::ZERO;
    }
    M64::from_u32(a.to_u32().map(|lane| lane >> cnt))
}

/// Shifts the whole 64-bit value right logically; counts above 63 yield
/// zero.
#[inline(always)]
pub fn srl_si64(a: M64, count: M64) -> M64 {
    let cnt = count.to_u64();
    if cnt > 63 {
        return M64::ZERO;
    }
    M64::from_u64(a.to_u64() >> cnt)
}

/// Shifts signed 16-bit lanes right arithmetically (sign-fill). The count is
/// read as a *signed* 64-bit value; negative or above-15 counts collapse
/// every lane to its sign (all-0 or all-1 bits).
#[inline(always)]
pub fn sra_pi16(a: M64, count: M64) -> M64 {
    let cnt = count.to_i64();
    let lanes = a.to_i16();
    if !(0..=15).contains(&cnt) {
        return M64::from_i16(lanes.map(|lane| if lane < 0 { -1 } else { 0 }));
    }
    M64::from_i16(lanes.map(|lane| lane >> cnt))
}

/// Shifts signed 32-bit lanes right arithmetically. The count is read as an
/// *unsigned* 64-bit value; counts above 31 collapse every lane to its sign.
#[inline(always)]
pub fn sra_pi32(a: M64, count: M64) -> M64 {
    let cnt = count.to_u64();
    let lanes = a.to_i32();
    if cnt > 31 {
        return M64::from_i32(lanes.map(|lane| if lane < 0 { -1 } else { 0 }));
    }
    M64::from_i32(lanes.map(|lane| lane >> cnt))
}

/// Shifts 16-bit lanes left by an immediate count in `0..16`.
#[inline(always)]
pub fn slli_pi16(a: M64, count: u32) -> M64 {
    debug_assert!(count < 16, "immediate shift count out of range");
    M64::from_u16(a.to_u16().map(|lane| lane << count))
}

/// Shifts 32-bit lanes left by an immediate count in `0..32`.
#[inline(always)]
pub fn slli_pi32(a: M64, count: u32) -> M64 {
    debug_assert!(count < 32, "immediate shift count out of range");
    M64::from_u32(a.to_u32().map(|lane| lane << count))
}

/// Shifts the whole 64-bit value left by an immediate count in `0..64`.
#[inline(always)]
pub fn slli_si64(a: M64, count: u32) -> M64 {
    debug_assert!(count < 64, "immediate shift count out of range");
    M64::from_u64(a.to_u64() << count)
}

/// Shifts 16-bit lanes right logically by an immediate count in `0..16`.
#[inline(always)]
pub fn srli_pi16(a: M64, count: u32) -> M64 {
    debug_assert!(count < 16, "immediate shift count out of range");
    M64::from_u16(a.to_u16().map(|lane| lane >> count))
}

/// Shifts 32-bit lanes right logically by an immediate count in `0..32`.
#[inline(always)]
pub fn srli_pi32(a: M64, count: u32) -> M64 {
    debug_assert!(count < 32, "immediate shift count out of range");
    M64::from_u32(a.to_u32().map(|lane| lane >> count))
}

/// Shifts the whole 64-bit value right logically by an immediate count in
/// `0..64`.
#[inline(always)]
pub fn srli_si64(a: M64, count: u32) -> M64 {
    debug_assert!(count < 64, "immediate shift count out of range");
    M64::from_u64(a.to_u64() >> count)
}

/// Shifts signed 16-bit lanes right arithmetically by an immediate count in
/// `0..16`.
#[inline(always)]
pub fn srai_pi16(a: M64, count: u32) -> M64 {
    debug_assert!(count < 16, "immediate shift count out of range");
    M64::from_i16(a.to_i16().map(|lane| lane >> count))
}

/// Shifts signed 32-bit lanes right arithmetically by an immediate count in
/// `0..32`.
#[inline(always)]
pub fn srai_pi32(a: M64, count: u32) -> M64 {
    debug_assert!(count < 32, "immediate shift count out of range");
    M64::from_i32(a.to_i32().map(|lane| lane >> count))
}
