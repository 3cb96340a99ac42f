//! Shared code generation building blocks for the vectra generator.
//!
//! This crate provides the target-language-agnostic pieces used by the
//! C++ emitters in `vectra-cpp`:
//!
//! - [`builder`] - Indented text assembly ([`SourceBuffer`], [`Indent`])
//! - [`enumerate`] - The combinatorial drivers ([`compositions`], [`axis_tuples`])
//! - [`naming`] - Type and axis naming policy ([`Naming`])
//! - [`file`] - Output file handling ([`File`], [`PreviewFile`])
//!
//! The declaration and definition emitters never coordinate at runtime;
//! they stay in lock-step because both consume the enumerator sequences
//! defined here, which are deterministic by construction.

pub mod builder;
pub mod enumerate;
pub mod file;
pub mod naming;

pub use builder::{Indent, SourceBuffer};
pub use enumerate::{axis_tuples, compositions};
pub use file::{File, Overwrite, PreviewFile, WriteResult};
pub use naming::Naming;
