//! The combinatorial drivers behind the emitters.
//!
//! Both surfaces of the generated code are produced by independent emitter
//! passes that never talk to each other; they agree because they consume
//! these sequences with the same arguments, in full, in order. Any change to
//! the iteration order here changes both surfaces identically, so the
//! declaration/definition pairing survives by construction.

mod compositions;
mod swizzles;

pub use compositions::{Compositions, compositions};
pub use swizzles::{AxisTuples, axis_tuples};
