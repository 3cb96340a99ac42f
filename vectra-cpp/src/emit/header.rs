//! The declaration surface.

use vectra_codegen::{SourceBuffer, axis_tuples, compositions};

use super::{EmitContext, Surface, constructor_params};
use crate::signature::Signature;

/// Emits the header: one struct per generated type plus the free operators,
/// in the fixed traversal order shared with
/// [`SourceEmitter`](super::SourceEmitter).
pub struct HeaderEmitter<'a> {
    ctx: &'a EmitContext,
    buf: SourceBuffer,
    signatures: Vec<Signature>,
}

impl<'a> HeaderEmitter<'a> {
    pub fn new(ctx: &'a EmitContext) -> Self {
        Self {
            ctx,
            buf: SourceBuffer::new(ctx.indent),
            signatures: Vec::new(),
        }
    }

    pub fn emit(mut self) -> Surface {
        self.buf.write(&["#pragma once"], 2);
        self.forward_declarations();

        for d in self.ctx.dimensions() {
            self.vector_struct(d);
        }
        if self.ctx.matrices {
            for rows in self.ctx.dimensions() {
                for cols in self.ctx.dimensions() {
                    self.matrix_struct(rows, cols);
                }
            }
        }

        Surface {
            text: self.buf.build(),
            signatures: self.signatures,
        }
    }

    fn record(&mut self, owner: &str, name: &str, params: Vec<String>) {
        self.signatures.push(Signature::new(owner, name, params));
    }

    /// Later types show up in earlier signatures (a narrow vector swizzles
    /// up to a wider one, a matrix product names its result shape), so
    /// every generated type is forward-declared before the first struct.
    fn forward_declarations(&mut self) {
        let n = &self.ctx.naming;
        for d in self.ctx.dimensions() {
            self.buf.write(&["struct ", &n.vec_type(d), ";"], 1);
        }
        if self.ctx.matrices {
            for rows in self.ctx.dimensions() {
                for cols in self.ctx.dimensions() {
                    self.buf.write(&["struct ", &n.mat_type(rows, cols), ";"], 1);
                }
            }
        }
        self.buf.blank();
    }

    // --- vectors ---

    fn vector_struct(&mut self, d: usize) {
        let n = &self.ctx.naming;
        let vec_t = n.vec_type(d);

        self.buf.write(&["struct ", &vec_t, " {"], 1);
        self.buf.line("public:");
        self.buf.shift(1);
        self.vector_fields(d);
        self.vector_constructors(d);
        self.vector_operators(d);
        self.vector_methods(d);
        if self.ctx.swizzle {
            self.vector_swizzles(d);
        }
        self.buf.shift(-1);
        self.buf.write(&["};"], 2);

        let scalar = n.scalar().to_string();
        let const_ref = n.vec_const_ref(d);
        self.buf.write(
            &[&vec_t, " operator*(", &scalar, " scalar, ", &const_ref, " vec);"],
            1,
        );
        self.buf.blank();
        self.record("", "operator*", vec![scalar, const_ref]);
    }

    fn vector_fields(&mut self, d: usize) {
        let n = &self.ctx.naming;
        let labels = (0..d)
            .map(|i| n.axis(i).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.buf.write(&[n.scalar(), " ", &labels, ";"], 1);
    }

    fn vector_constructors(&mut self, d: usize) {
        let vec_t = self.ctx.naming.vec_type(d);
        for parts in compositions(d) {
            let params = constructor_params(&self.ctx.naming, &parts);
            self.buf.write(&[&vec_t, "("], 0);
            for (i, (ty, name)) in params.iter().enumerate() {
                if i + 1 == params.len() {
                    self.buf.write(&[ty, " ", name, ");"], 1);
                } else {
                    self.buf.write(&[ty, " ", name, ", "], 0);
                }
            }
            self.record(&vec_t, &vec_t, params.into_iter().map(|(ty, _)| ty).collect());
        }
        self.buf.blank();
    }

    fn vector_operators(&mut self, d: usize) {
        let n = &self.ctx.naming;
        let vec_t = n.vec_type(d);
        let vec_r = n.vec_ref(d);
        let const_ref = n.vec_const_ref(d);
        let scalar = n.scalar().to_string();

        for op in ["+", "-"] {
            self.buf.write(
                &[&vec_t, " operator ", op, " (", &const_ref, " other) const;"],
                1,
            );
            self.buf.write(&[&vec_r, " operator ", op, "= (", &const_ref, " other);"], 1);
            self.record(&vec_t, &format!("operator{op}"), vec![const_ref.clone()]);
            self.record(&vec_t, &format!("operator{op}="), vec![const_ref.clone()]);
        }

        for op in ["=", "!"] {
            self.buf.write(&["bool operator ", op, "= (", &const_ref, " other) const;"], 1);
            self.record(&vec_t, &format!("operator{op}="), vec![const_ref.clone()]);
        }

        for op in ["*", "/"] {
            self.buf.write(&[&vec_t, " operator ", op, " (", &scalar, " scalar) const;"], 1);
            self.buf.write(&[&vec_t, "& operator ", op, "= (", &scalar, " scalar);"], 1);
            self.record(&vec_t, &format!("operator{op}"), vec![scalar.clone()]);
            self.record(&vec_t, &format!("operator{op}="), vec![scalar.clone()]);
        }

        self.buf.blank();
    }

    fn vector_methods(&mut self, d: usize) {
        let n = &self.ctx.naming;
        let vec_t = n.vec_type(d);
        let const_ref = n.vec_const_ref(d);
        let scalar = n.scalar().to_string();

        self.buf.write(&[&scalar, " mag() const;"], 1);
        self.buf.write(&[&vec_t, " normalized() const;"], 1);
        self.buf.write(&[&vec_t, "& normalize();"], 1);
        self.buf.write(&[&scalar, " dot (", &const_ref, " other) const;"], 1);
        self.buf.blank();

        self.record(&vec_t, "mag", vec![]);
        self.record(&vec_t, "normalized", vec![]);
        self.record(&vec_t, "normalize", vec![]);
        self.record(&vec_t, "dot", vec![const_ref]);
    }

    fn vector_swizzles(&mut self, d: usize) {
        let n = &self.ctx.naming;
        let vec_t = n.vec_type(d);
        for arity in 2..=self.ctx.max_dimension {
            for tuple in axis_tuples(arity, d) {
                let result_t = n.vec_type(arity);
                let name = n.swizzle_name(&tuple);
                self.buf.write(&[&result_t, " ", &name, "() const;"], 1);
                self.record(&vec_t, &name, vec![]);
            }
            self.buf.blank();
        }
    }

    // --- matrices ---

    fn matrix_struct(&mut self, rows: usize, cols: usize) {
        let n = &self.ctx.naming;
        let mat_t = n.mat_type(rows, cols);

        self.buf.write(&["struct ", &mat_t, " {"], 1);
        self.buf.line("public:");
        self.buf.shift(1);
        self.matrix_fields(rows, cols);
        self.matrix_constructors(rows, cols);
        self.matrix_operators(rows, cols);
        self.matrix_methods(rows, cols);
        self.buf.shift(-1);
        self.buf.write(&["};"], 2);

        let scalar = n.scalar().to_string();
        let const_ref = n.mat_const_ref(rows, cols);
        self.buf.write(
            &[&mat_t, " operator * (", &scalar, " scalar, ", &const_ref, " m);"],
            1,
        );
        self.record("", "operator*", vec![scalar, const_ref.clone()]);

        let vec_row = n.vec_const_ref(rows);
        let vec_out = n.vec_type(cols);
        self.buf.write(
            &[&vec_out, " operator * (", &vec_row, " vec, ", &const_ref, " m);"],
            1,
        );
        self.record("", "operator*", vec![vec_row, const_ref]);
        self.buf.blank();
    }

    fn matrix_fields(&mut self, rows: usize, cols: usize) {
        let n = &self.ctx.naming;
        self.buf.line(n.scalar());
        self.buf.shift(1);
        for r in 0..rows {
            let row = (0..cols)
                .map(|c| n.element(r, c))
                .collect::<Vec<_>>()
                .join(", ");
            let terminator = if r + 1 == rows { ";" } else { "," };
            self.buf.write(&[&row, terminator], 1);
        }
        self.buf.shift(-1);
        self.buf.blank();
    }

    fn matrix_constructors(&mut self, rows: usize, cols: usize) {
        let n = &self.ctx.naming;
        let mat_t = n.mat_type(rows, cols);
        let const_ref = n.mat_const_ref(rows, cols);
        let scalar = n.scalar().to_string();

        self.buf.write(&[&mat_t, "(", &const_ref, " other);"], 1);
        self.record(&mat_t, &mat_t, vec![const_ref]);

        self.buf.write(&[&mat_t, "("], 1);
        self.buf.shift(1);
        for r in 0..rows {
            let row = (0..cols)
                .map(|c| format!("{} {}", scalar, n.element(r, c)))
                .collect::<Vec<_>>()
                .join(", ");
            let terminator = if r + 1 == rows { ");" } else { "," };
            self.buf.write(&[&row, terminator], 1);
        }
        self.buf.shift(-1);
        self.buf.blank();
        self.record(&mat_t, &mat_t, vec![scalar; rows * cols]);
    }

    fn matrix_operators(&mut self, rows: usize, cols: usize) {
        let n = &self.ctx.naming;
        let mat_t = n.mat_type(rows, cols);
        let mat_r = n.mat_ref(rows, cols);
        let const_ref = n.mat_const_ref(rows, cols);
        let scalar = n.scalar().to_string();

        for op in ["+", "-"] {
            self.buf.write(
                &[&mat_t, " operator ", op, " (", &const_ref, " other) const;"],
                1,
            );
            self.buf.write(&[&mat_r, " operator ", op, "= (", &const_ref, " other);"], 1);
            self.record(&mat_t, &format!("operator{op}"), vec![const_ref.clone()]);
            self.record(&mat_t, &format!("operator{op}="), vec![const_ref.clone()]);
        }

        for op in ["=", "!"] {
            self.buf.write(&["bool operator ", op, "= (", &const_ref, " other) const;"], 1);
            self.record(&mat_t, &format!("operator{op}="), vec![const_ref.clone()]);
        }

        for op in ["*", "/"] {
            self.buf.write(&[&mat_t, " operator ", op, " (", &scalar, " scalar) const;"], 1);
            self.buf.write(&[&mat_t, "& operator ", op, "= (", &scalar, " scalar);"], 1);
            self.record(&mat_t, &format!("operator{op}"), vec![scalar.clone()]);
            self.record(&mat_t, &format!("operator{op}="), vec![scalar.clone()]);
        }

        for k in self.ctx.dimensions() {
            let result_t = n.mat_type(rows, k);
            let rhs = n.mat_const_ref(cols, k);
            self.buf.write(&[&result_t, " operator * (", &rhs, " other) const;"], 1);
            self.record(&mat_t, "operator*", vec![rhs]);
        }

        let vec_out = n.vec_type(rows);
        let vec_rhs = n.vec_const_ref(cols);
        self.buf.write(&[&vec_out, " operator * (", &vec_rhs, " other) const;"], 1);
        self.record(&mat_t, "operator*", vec![vec_rhs]);

        self.buf.blank();
    }

    fn matrix_methods(&mut self, rows: usize, cols: usize) {
        let n = &self.ctx.naming;
        let mat_t = n.mat_type(rows, cols);

        if rows == cols {
            self.buf.write(&[n.scalar(), " det() const;"], 1);
            self.record(&mat_t, "det", vec![]);
        }
        let transposed_t = n.mat_type(cols, rows);
        self.buf.write(&[&transposed_t, " transposed () const;"], 1);
        self.record(&mat_t, "transposed", vec![]);
    }
}
