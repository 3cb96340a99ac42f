//! The two emission passes.
//!
//! Each emitter owns a fresh [`SourceBuffer`] and a signature record; the
//! only shared state is the read-only [`EmitContext`]. The passes have no
//! data dependency on each other, only the correctness dependency that both
//! consume the enumerators with identical arguments and iterate them in
//! full, in order.

mod header;
mod source;

pub use header::HeaderEmitter;
pub use source::SourceEmitter;
use vectra_codegen::{Indent, Naming};
use vectra_manifest::Manifest;

use crate::signature::Signature;

/// Read-only inputs shared by both emitters, fixed for one generation run.
#[derive(Debug, Clone)]
pub struct EmitContext {
    pub naming: Naming,
    pub max_dimension: usize,
    pub swizzle: bool,
    pub matrices: bool,
    pub header_file: String,
    pub indent: Indent,
}

impl EmitContext {
    /// Build the context from a validated manifest.
    pub fn new(manifest: &Manifest) -> Self {
        Self {
            naming: Naming::new(
                &manifest.types.scalar,
                &manifest.naming.vector_prefix,
                &manifest.naming.matrix_prefix,
                &manifest.naming.axes,
            ),
            max_dimension: manifest.types.max_dimension,
            swizzle: manifest.features.swizzle,
            matrices: manifest.features.matrices,
            header_file: manifest.output.header.clone(),
            indent: Indent::Spaces(manifest.output.indent),
        }
    }

    /// Dimensions of the generated vector types, in emission order.
    pub fn dimensions(&self) -> std::ops::RangeInclusive<usize> {
        2..=self.max_dimension
    }
}

/// One emitted surface: the accumulated text plus the ordered record of
/// every construct it contains.
#[derive(Debug, Clone)]
pub struct Surface {
    pub text: String,
    pub signatures: Vec<Signature>,
}

/// Parameter list of the constructor overload for one composition.
///
/// Each part becomes one `(type token, parameter name)` pair; the name is
/// the concatenated labels of the global axes the block covers, so the
/// block over axes 0..2 of a 3-dimensional type reads `const Vec2& xy`.
pub(crate) fn constructor_params(naming: &Naming, parts: &[usize]) -> Vec<(String, String)> {
    let mut params = Vec::with_capacity(parts.len());
    let mut offset = 0;
    for &size in parts {
        params.push((naming.vec_const_ref(size), naming.axis_run(offset, size)));
        offset += size;
    }
    params
}
