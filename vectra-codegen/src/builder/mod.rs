//! Indented text assembly.
//!
//! - [`SourceBuffer`] - Append-only sink with a flat indentation counter
//! - [`Indent`] - Indentation unit (spaces of a width, or tab)

mod indent;
mod source_buffer;

pub use indent::Indent;
pub use source_buffer::SourceBuffer;
