//! Bit-exact emulation of the 64-bit packed-integer (MMX-style) vector
//! operation set.
//!
//! Numeric and codec pipelines written against 64-bit packed vectors get the
//! full operation set on every platform: on x86_64 each call forwards to the
//! SSE2 instruction computing the same result over the low 64 bits of an XMM
//! register, elsewhere the identical result is produced lane-by-lane with
//! scalar arithmetic. Which path is compiled is decided once at build time
//! (see `build.rs`, knob `PACKED64_BACKEND`); both paths are observably
//! indistinguishable.
//!
//! Every operation is a total, pure function: no allocation, no mutation of
//! inputs, no error outcome. Saturation clamps, wrapping wraps, out-of-range
//! vector shift counts produce the defined all-zero or sign-fill result.
//!
//! ```rust
//! use packed64::ops;
//!
//! let a = ops::set1_pi8(120);
//! let b = ops::set1_pi8(20);
//!
//! // Saturating add clamps, plain add wraps.
//! assert_eq!(ops::adds_pi8(a, b).to_i8(), [127; 8]);
//! assert_eq!(ops::add_pi8(a, b).to_i8(), [-116; 8]);
//! ```

pub mod m64;
pub mod ops;

pub use m64::M64;
