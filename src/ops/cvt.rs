//! Scalar <-> vector conversion.
//!
//! Moving a scalar into the low lanes (zeroing the rest) and reading the low
//! 32 or 64 bits back out. Like construction, these are bit-pattern moves
//! shared by both backends.

use crate::m64::M64;

/// Places a 32-bit scalar into the low lane; the upper 32 bits are zero.
#[inline(always)]
pub fn cvtsi32_si64(a: i32) -> M64 {
    // Zero-extend: the upper lane must not pick up the sign.
    M64::from_u64(a as u32 as u64)
}

/// Reads the low 32 bits back out as a scalar.
#[inline(always)]
pub fn cvtsi64_si32(a: M64) -> i32 {
    a.to_i32()[0]
}

/// Reinterprets a 64-bit scalar as a vector.
#[inline(always)]
pub fn cvtsi64_m64(a: i64) -> M64 {
    M64::from_i64(a)
}

/// Reinterprets a vector as a 64-bit scalar.
#[inline(always)]
pub fn cvtm64_si64(a: M64) -> i64 {
    a.to_i64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cvtsi32_zero_extends() {
        let v = cvtsi32_si64(-1);
        assert_eq!(v.to_u64(), 0x0000_0000_ffff_ffff);
        assert_eq!(cvtsi64_si32(v), -1);
    }

    #[test]
    fn cvt64_round_trip() {
        let v = cvtsi64_m64(-2);
        assert_eq!(v.to_u64(), 0xffff_ffff_ffff_fffe);
        assert_eq!(cvtm64_si64(v), -2);
    }
}
