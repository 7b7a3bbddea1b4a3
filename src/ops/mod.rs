//! The packed-integer operation set.
//!
//! Two interchangeable backends implement identical signatures:
//!
//! - [`portable`] computes every result lane-by-lane with scalar arithmetic
//!   and is compiled on every target. It is the reference semantics.
//! - [`sse2`] forwards every operation to the SSE2 instruction with the same
//!   semantics over the low 64 bits of an XMM register. It exists only on
//!   x86_64 builds where the native path was selected.
//!
//! The re-export below picks one backend as the public operation set; the
//! choice is fixed per build and never varies between calls. Construction
//! (`set*`, `setzero_si64`) and scalar conversion (`cvt*`) are pure
//! bit-pattern writers shared by both paths.

pub mod portable;

#[cfg(sse2)]
pub mod sse2;

mod cvt;
mod set;

#[cfg(sse2)]
pub use self::sse2::*;

#[cfg(not(sse2))]
pub use self::portable::*;

pub use self::cvt::*;
pub use self::set::*;
