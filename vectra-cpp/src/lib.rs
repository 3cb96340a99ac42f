//! C++ emitters for the vectra generator.
//!
//! Two independent passes walk the identical parameter space: the
//! [`HeaderEmitter`] produces the declaration surface, the [`SourceEmitter`]
//! the definition surface. They never interact; the two outputs pair up
//! because both consume the enumerator sequences from `vectra-codegen` with
//! the same arguments, in full, in order. The [`signature`] module records
//! what each pass emitted and [`Generator`] diffs the two records after the
//! fact, so an ordering drift shows up as a defect report instead of a
//! header that does not match its implementation file.

pub mod emit;
mod generator;
pub mod signature;

pub use emit::{EmitContext, HeaderEmitter, SourceEmitter, Surface};
pub use generator::{GenerateResult, Generator};
pub use signature::{Signature, cross_check};
