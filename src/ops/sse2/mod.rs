//! Native path: SSE2 over the low 64 bits of an XMM register.
//!
//! Rust's `std::arch` no longer carries the MMX `__m64` intrinsics, so the
//! native vehicle for 64-bit packed operations is their SSE2 counterpart
//! applied to the low half of a `__m128i`; the upper half is zeroed on entry
//! and discarded on exit. SSE2 is baseline on x86_64, which is the only
//! target this module is compiled for (see `build.rs`), so invoking the
//! intrinsics needs no runtime feature check.
//!
//! Every function here must be byte-identical to its namesake in
//! [`super::portable`]; `tests/equivalence.rs` enforces that with randomized
//! sweeps.

use std::arch::x86_64::{__m128i, _mm_cvtsi128_si64, _mm_cvtsi64_si128};

use crate::m64::M64;

mod add;
mod cmp;
mod logic;
mod mul;
mod pack;
mod shift;
mod sub;
mod unpack;

pub use self::add::*;
pub use self::cmp::*;
pub use self::logic::*;
pub use self::mul::*;
pub use self::pack::*;
pub use self::shift::*;
pub use self::sub::*;
pub use self::unpack::*;

/// Moves the 8-byte value into the low half of an XMM register, upper half
/// zeroed. Bit-for-bit: lane 0 stays in the least-significant bits.
#[inline(always)]
pub(crate) fn load(a: M64) -> __m128i {
    // SAFETY: sse2 is statically available on every x86_64 target.
    unsafe { _mm_cvtsi64_si128(a.to_i64()) }
}

/// Reads the low 8 bytes back out of an XMM register.
#[inline(always)]
pub(crate) fn store(v: __m128i) -> M64 {
    // SAFETY: sse2 is statically available on every x86_64 target.
    M64::from_i64(unsafe { _mm_cvtsi128_si64(v) })
}
