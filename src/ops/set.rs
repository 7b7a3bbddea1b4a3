//! Vector construction.
//!
//! `set_*` takes its arguments most-significant lane first (so the argument
//! list reads like the value printed in hex), `setr_*` takes them in lane
//! order, `set1_*` broadcasts one scalar into every lane and `setzero_si64`
//! is the all-zero value. All of these just write a bit pattern; there is
//! nothing for a hardware instruction to compute, so both backends share
//! these definitions.

use crate::m64::M64;

/// Builds a vector from eight signed byte lanes, `e7` most significant.
#[inline(always)]
#[allow(clippy::too_many_arguments)]
pub fn set_pi8(e7: i8, e6: i8, e5: i8, e4: i8, e3: i8, e2: i8, e1: i8, e0: i8) -> M64 {
    M64::from_i8([e0, e1, e2, e3, e4, e5, e6, e7])
}

/// Builds a vector from eight unsigned byte lanes, `e7` most significant.
///
/// Produces the same bit pattern as [`set_pi8`] called with the
/// reinterpreted arguments.
#[inline(always)]
#[allow(clippy::too_many_arguments)]
pub fn set_pu8(e7: u8, e6: u8, e5: u8, e4: u8, e3: u8, e2: u8, e1: u8, e0: u8) -> M64 {
    M64::from_u8([e0, e1, e2, e3, e4, e5, e6, e7])
}

/// Builds a vector from four signed 16-bit lanes, `e3` most significant.
#[inline(always)]
pub fn set_pi16(e3: i16, e2: i16, e1: i16, e0: i16) -> M64 {
    M64::from_i16([e0, e1, e2, e3])
}

/// Builds a vector from four unsigned 16-bit lanes, `e3` most significant.
#[inline(always)]
pub fn set_pu16(e3: u16, e2: u16, e1: u16, e0: u16) -> M64 {
    M64::from_u16([e0, e1, e2, e3])
}

/// Builds a vector from two signed 32-bit lanes, `e1` most significant.
#[inline(always)]
pub fn set_pi32(e1: i32, e0: i32) -> M64 {
    M64::from_i32([e0, e1])
}

/// Broadcasts one byte into all eight lanes.
#[inline(always)]
pub fn set1_pi8(a: i8) -> M64 {
    M64::from_i8([a; 8])
}

/// Broadcasts one 16-bit value into all four lanes.
#[inline(always)]
pub fn set1_pi16(a: i16) -> M64 {
    M64::from_i16([a; 4])
}

/// Broadcasts one 32-bit value into both lanes.
#[inline(always)]
pub fn set1_pi32(a: i32) -> M64 {
    M64::from_i32([a; 2])
}

/// Builds a vector from eight signed byte lanes in lane order: the first
/// argument lands in lane 0.
#[inline(always)]
#[allow(clippy::too_many_arguments)]
pub fn setr_pi8(e0: i8, e1: i8, e2: i8, e3: i8, e4: i8, e5: i8, e6: i8, e7: i8) -> M64 {
    M64::from_i8([e0, e1, e2, e3, e4, e5, e6, e7])
}

/// Builds a vector from four signed 16-bit lanes in lane order.
#[inline(always)]
pub fn setr_pi16(e0: i16, e1: i16, e2: i16, e3: i16) -> M64 {
    M64::from_i16([e0, e1, e2, e3])
}

/// Builds a vector from two signed 32-bit lanes in lane order.
#[inline(always)]
pub fn setr_pi32(e0: i32, e1: i32) -> M64 {
    M64::from_i32([e0, e1])
}

/// The all-zero vector.
#[inline(always)]
pub fn setzero_si64() -> M64 {
    M64::ZERO
}
