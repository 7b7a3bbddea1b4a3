//! The 8-byte packed vector value and its lane-width views.
//!
//! `M64` is the one data type every operation in this crate consumes and
//! produces. It is a plain 64-bit quantity that can be read and written
//! through any of five integer lane widths:
//!
//! | view            | lanes |
//! |-----------------|-------|
//! | `i8` / `u8`     | 8     |
//! | `i16` / `u16`   | 4     |
//! | `i32` / `u32`   | 2     |
//! | `i64` / `u64`   | 1     |
//!
//! Every view is a different decoding of the *same* bit pattern; none owns
//! separate storage. Lane 0 always sits in the least-significant bits, which
//! is the x86 lane convention (lowest memory address on a little-endian
//! target). Constructing an `M64` from signed lanes or from unsigned lanes
//! with the same bit patterns yields the same value.

use std::fmt;

/// Number of 8-bit lanes in an `M64`.
pub const LANES_8: usize = 8;
/// Number of 16-bit lanes in an `M64`.
pub const LANES_16: usize = 4;
/// Number of 32-bit lanes in an `M64`.
pub const LANES_32: usize = 2;

/// A 64-bit packed-integer vector value.
///
/// `M64` is an immutable value type: operations take their inputs by value
/// and return a fresh result, so sharing values across threads needs no
/// coordination. The in-memory representation is exactly 8 bytes with the
/// alignment of `u64`, which is what the native path's 64-bit register
/// loads require.
///
/// ```rust
/// use packed64::m64::M64;
///
/// let v = M64::from_i16([1, -2, 3, -4]);
/// assert_eq!(v.to_i16(), [1, -2, 3, -4]);
///
/// // Same bits, different lane width.
/// assert_eq!(v.to_u16(), [1, 0xfffe, 3, 0xfffc]);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct M64(u64);

// The native path reinterprets M64 as the low half of an XMM register
// bit-for-bit; that only works if the sizes agree.
const _: () = assert!(std::mem::size_of::<M64>() == 8);
const _: () = assert!(std::mem::align_of::<M64>() == 8);

impl M64 {
    /// The all-zero vector.
    pub const ZERO: M64 = M64(0);

    /// Builds a value directly from its 64-bit pattern.
    #[inline(always)]
    pub const fn from_u64(bits: u64) -> Self {
        M64(bits)
    }

    /// Returns the raw 64-bit pattern.
    #[inline(always)]
    pub const fn to_u64(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub const fn from_i64(bits: i64) -> Self {
        M64(bits as u64)
    }

    #[inline(always)]
    pub const fn to_i64(self) -> i64 {
        self.0 as i64
    }

    /// Builds a value from eight unsigned byte lanes, lane 0 first.
    #[inline(always)]
    pub const fn from_u8(lanes: [u8; LANES_8]) -> Self {
        M64(u64::from_le_bytes(lanes))
    }

    /// Reads the value as eight unsigned byte lanes, lane 0 first.
    #[inline(always)]
    pub const fn to_u8(self) -> [u8; LANES_8] {
        self.0.to_le_bytes()
    }

    #[inline(always)]
    pub fn from_i8(lanes: [i8; LANES_8]) -> Self {
        Self::from_u8(lanes.map(|lane| lane as u8))
    }

    #[inline(always)]
    pub fn to_i8(self) -> [i8; LANES_8] {
        self.to_u8().map(|lane| lane as i8)
    }

    /// Builds a value from four unsigned 16-bit lanes, lane 0 first.
    #[inline(always)]
    pub fn from_u16(lanes: [u16; LANES_16]) -> Self {
        let mut bits = 0u64;
        for (i, lane) in lanes.into_iter().enumerate() {
            bits |= (lane as u64) << (16 * i);
        }
        M64(bits)
    }

    /// Reads the value as four unsigned 16-bit lanes, lane 0 first.
    #[inline(always)]
    pub fn to_u16(self) -> [u16; LANES_16] {
        std::array::from_fn(|i| (self.0 >> (16 * i)) as u16)
    }

    #[inline(always)]
    pub fn from_i16(lanes: [i16; LANES_16]) -> Self {
        Self::from_u16(lanes.map(|lane| lane as u16))
    }

    #[inline(always)]
    pub fn to_i16(self) -> [i16; LANES_16] {
        self.to_u16().map(|lane| lane as i16)
    }

    /// Builds a value from two unsigned 32-bit lanes, lane 0 first.
    #[inline(always)]
    pub fn from_u32(lanes: [u32; LANES_32]) -> Self {
        M64((lanes[0] as u64) | ((lanes[1] as u64) << 32))
    }

    /// Reads the value as two unsigned 32-bit lanes, lane 0 first.
    #[inline(always)]
    pub fn to_u32(self) -> [u32; LANES_32] {
        [self.0 as u32, (self.0 >> 32) as u32]
    }

    #[inline(always)]
    pub fn from_i32(lanes: [i32; LANES_32]) -> Self {
        Self::from_u32(lanes.map(|lane| lane as u32))
    }

    #[inline(always)]
    pub fn to_i32(self) -> [i32; LANES_32] {
        self.to_u32().map(|lane| lane as i32)
    }
}

impl fmt::Debug for M64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M64({:#018x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_decode_one_bit_pattern() {
        let v = M64::from_u64(0x8070_6050_4030_2010);

        assert_eq!(v.to_u8(), [0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70, 0x80]);
        assert_eq!(v.to_u16(), [0x2010, 0x4030, 0x6050, 0x8070]);
        assert_eq!(v.to_u32(), [0x4030_2010, 0x8070_6050]);
        assert_eq!(v.to_i64(), 0x8070_6050_4030_2010u64 as i64);
    }

    #[test]
    fn signed_and_unsigned_construction_agree() {
        let signed = M64::from_i8([-1, 2, -3, 4, -5, 6, -7, 8]);
        let unsigned = M64::from_u8([0xff, 2, 0xfd, 4, 0xfb, 6, 0xf9, 8]);

        assert_eq!(signed, unsigned);
    }

    #[test]
    fn round_trips_per_width() {
        let v = M64::from_u64(0xdead_beef_0bad_cafe);

        assert_eq!(M64::from_u8(v.to_u8()), v);
        assert_eq!(M64::from_i8(v.to_i8()), v);
        assert_eq!(M64::from_u16(v.to_u16()), v);
        assert_eq!(M64::from_i16(v.to_i16()), v);
        assert_eq!(M64::from_u32(v.to_u32()), v);
        assert_eq!(M64::from_i32(v.to_i32()), v);
        assert_eq!(M64::from_i64(v.to_i64()), v);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(M64::default(), M64::ZERO);
        assert_eq!(M64::ZERO.to_u64(), 0);
    }
}
