//! Emission-unit records and the declaration/definition cross-check.
//!
//! Nothing in the emitters can fail at runtime, so a mismatch between the
//! two surfaces is a latent bug, not a handled error. The cross-check makes
//! that bug class observable: both emitters append one record per emitted
//! construct, and the generator structurally diffs the two sequences once
//! both passes are done.

use std::fmt;

use thiserror::Error;

/// One emitted construct: a constructor overload, an operator, a method, an
/// accessor, or a free function (empty owner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Owning type token, empty for free functions.
    pub owner: String,
    /// Construct name as spelled in the output (`operator+`, `mag`, `xy`).
    pub name: String,
    /// Parameter type tokens, in order.
    pub params: Vec<String>,
}

impl Signature {
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        params: Vec<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            params,
        }
    }

    /// Parameter count.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.owner.is_empty() {
            write!(f, "{}::", self.owner)?;
        }
        write!(f, "{}({})", self.name, self.params.join(", "))
    }
}

/// Mismatch between the declaration and definition surfaces.
#[derive(Debug, Error)]
pub enum Mismatch {
    #[error(
        "declaration surface has {declarations} units but definition surface has {definitions}"
    )]
    Length {
        declarations: usize,
        definitions: usize,
    },

    #[error("surfaces diverge at unit {index}: declared `{declaration}`, defined `{definition}`")]
    Unit {
        index: usize,
        declaration: Signature,
        definition: Signature,
    },
}

/// Structurally diff the two ordered signature sequences.
///
/// Both emitters are driven by the same enumerators, so equal sequences are
/// the expected outcome on every valid configuration; a failure here means
/// one emitter reordered, filtered, or cut short its traversal.
pub fn cross_check(declarations: &[Signature], definitions: &[Signature]) -> Result<(), Mismatch> {
    for (index, (decl, def)) in declarations.iter().zip(definitions.iter()).enumerate() {
        if decl != def {
            return Err(Mismatch::Unit {
                index,
                declaration: decl.clone(),
                definition: def.clone(),
            });
        }
    }
    if declarations.len() != definitions.len() {
        return Err(Mismatch::Length {
            declarations: declarations.len(),
            definitions: definitions.len(),
        });
    }
    Ok(())
}
