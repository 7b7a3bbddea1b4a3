//! Scalar per-lane reference implementations.
//!
//! This backend defines the semantics of every operation: the native path is
//! only correct insofar as it matches what these functions compute. It is
//! compiled on every target so that equivalence can be checked against the
//! SSE2 path whenever that one exists.

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
