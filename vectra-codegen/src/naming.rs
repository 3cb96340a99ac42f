//! Type and axis naming policy.

/// Resolves dimensions and axis indices to the tokens the emitters print.
///
/// Built once per generation run from the manifest; every method is a pure
/// lookup. Indices are in range by construction of the callers: the manifest
/// rejects an axis alphabet shorter than the maximum dimension before any
/// emission starts.
///
/// Dimension 1 is the scalar type itself, not a generated struct, so the
/// reference and const-reference forms collapse to the plain scalar token.
/// That is what lets a composition block of size 1 emit a scalar parameter
/// through the same code path as a sub-vector block.
#[derive(Debug, Clone)]
pub struct Naming {
    scalar: String,
    vector_prefix: String,
    matrix_prefix: String,
    axes: Vec<char>,
}

impl Naming {
    pub fn new(
        scalar: impl Into<String>,
        vector_prefix: impl Into<String>,
        matrix_prefix: impl Into<String>,
        axes: &str,
    ) -> Self {
        Self {
            scalar: scalar.into(),
            vector_prefix: vector_prefix.into(),
            matrix_prefix: matrix_prefix.into(),
            axes: axes.chars().collect(),
        }
    }

    /// The scalar element type token, emitted verbatim.
    pub fn scalar(&self) -> &str {
        &self.scalar
    }

    /// Label character for the axis with global index `n`.
    pub fn axis(&self, n: usize) -> char {
        self.axes[n]
    }

    /// Concatenated labels for a contiguous block of axes.
    ///
    /// This is the parameter name of a composition block: the block covering
    /// global axes 0..2 of a 3-dimensional type is named `xy`.
    pub fn axis_run(&self, start: usize, len: usize) -> String {
        self.axes[start..start + len].iter().collect()
    }

    /// Accessor name for a swizzle tuple of global axis indices.
    pub fn swizzle_name(&self, tuple: &[usize]) -> String {
        tuple.iter().map(|&n| self.axes[n]).collect()
    }

    /// Plain vector type name; the scalar token when `d == 1`.
    pub fn vec_type(&self, d: usize) -> String {
        if d == 1 {
            return self.scalar.clone();
        }
        format!("{}{}", self.vector_prefix, d)
    }

    /// Reference form of the vector type.
    pub fn vec_ref(&self, d: usize) -> String {
        if d == 1 {
            return self.scalar.clone();
        }
        format!("{}{}&", self.vector_prefix, d)
    }

    /// Const-reference form of the vector type.
    pub fn vec_const_ref(&self, d: usize) -> String {
        if d == 1 {
            return self.scalar.clone();
        }
        format!("const {}{}&", self.vector_prefix, d)
    }

    /// Plain matrix type name.
    pub fn mat_type(&self, rows: usize, cols: usize) -> String {
        format!("{}{}x{}", self.matrix_prefix, rows, cols)
    }

    /// Reference form of the matrix type.
    pub fn mat_ref(&self, rows: usize, cols: usize) -> String {
        format!("{}{}x{}&", self.matrix_prefix, rows, cols)
    }

    /// Const-reference form of the matrix type.
    pub fn mat_const_ref(&self, rows: usize, cols: usize) -> String {
        format!("const {}{}x{}&", self.matrix_prefix, rows, cols)
    }

    /// Matrix element name for row `r`, column `c`.
    pub fn element(&self, r: usize, c: usize) -> String {
        format!("m{}x{}", r, c)
    }
}
