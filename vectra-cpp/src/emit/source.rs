//! The definition surface.

use vectra_codegen::{SourceBuffer, axis_tuples, compositions};

use super::{EmitContext, Surface, constructor_params};
use crate::signature::Signature;

/// Emits the implementation file: one definition per declaration produced by
/// [`HeaderEmitter`](super::HeaderEmitter), in the same relative order.
///
/// The member-initializer list of each constructor is resolved here: axis
/// `i` belonging to a composition block is initialized either directly from
/// a scalar parameter (block of size 1) or by projecting the matching axis
/// out of the block's sub-vector parameter. The projection reuses the axis
/// labels as field names, so a block's local axis order lines up with the
/// type's global axis order by construction.
pub struct SourceEmitter<'a> {
    ctx: &'a EmitContext,
    buf: SourceBuffer,
    signatures: Vec<Signature>,
}

impl<'a> SourceEmitter<'a> {
    pub fn new(ctx: &'a EmitContext) -> Self {
        Self {
            ctx,
            buf: SourceBuffer::new(ctx.indent),
            signatures: Vec::new(),
        }
    }

    pub fn emit(mut self) -> Surface {
        self.buf.write(&["#include \"", &self.ctx.header_file, "\""], 1);
        self.buf.write(&["#include <cmath>"], 2);

        for d in self.ctx.dimensions() {
            self.vector_definitions(d);
        }
        if self.ctx.matrices {
            for rows in self.ctx.dimensions() {
                for cols in self.ctx.dimensions() {
                    self.matrix_definitions(rows, cols);
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

    // --- vectors ---

    fn vector_definitions(&mut self, d: usize) {
        self.vector_constructors(d);
        self.vector_operators(d);
        self.vector_methods(d);
        if self.ctx.swizzle {
            self.vector_swizzles(d);
        }
        self.vector_free_operator(d);
    }

    fn vector_constructors(&mut self, d: usize) {
        let n = &self.ctx.naming;
        let vec_t = n.vec_type(d);

        for parts in compositions(d) {
            let params = constructor_params(n, &parts);
            self.buf.write(&[&vec_t, "::", &vec_t, "("], 0);
            for (i, (ty, name)) in params.iter().enumerate() {
                if i + 1 == params.len() {
                    self.buf.write(&[ty, " ", name, ") : "], 0);
                } else {
                    self.buf.write(&[ty, " ", name, ", "], 0);
                }
            }

            // x(xy.x), y(xy.y), z(z)
            let mut offset = 0;
            for (b, &size) in parts.iter().enumerate() {
                let block = n.axis_run(offset, size);
                for j in 0..size {
                    let field = n.axis(offset + j).to_string();
                    if size == 1 {
                        self.buf.write(&[&field, "(", &block, ")"], 0);
                    } else {
                        let local = n.axis(j).to_string();
                        self.buf.write(&[&field, "(", &block, ".", &local, ")"], 0);
                    }
                    if b + 1 != parts.len() || j + 1 != size {
                        self.buf.write(&[", "], 0);
                    }
                }
                offset += size;
            }
            self.buf.write(&[" {}"], 1);

            self.record(&vec_t, &vec_t, params.into_iter().map(|(ty, _)| ty).collect());
        }
    }

    fn vector_operators(&mut self, d: usize) {
        let n = &self.ctx.naming;
        let vec_t = n.vec_type(d);
        let const_ref = n.vec_const_ref(d);
        let scalar = n.scalar().to_string();

        for op in ["+", "-"] {
            self.buf.write(
                &[&vec_t, " ", &vec_t, "::operator ", op, " (", &const_ref, " other) const {"],
                1,
            );
            self.buf.write_shifted(&["return ", &vec_t, "("], 0, 1);
            for i in 0..d {
                let axis = n.axis(i).to_string();
                if i + 1 == d {
                    self.buf.write(&["this->", &axis, " ", op, " other.", &axis, ");"], 1);
                } else {
                    self.buf.write(&["this->", &axis, " ", op, " other.", &axis, ", "], 0);
                }
            }
            self.buf.line("}");
            self.record(&vec_t, &format!("operator{op}"), vec![const_ref.clone()]);

            self.buf.write(
                &[&vec_t, "& ", &vec_t, "::operator ", op, "= (", &const_ref, " other) {"],
                1,
            );
            self.buf.shift(1);
            for i in 0..d {
                let axis = n.axis(i).to_string();
                self.buf.write(&[&axis, " ", op, "= other.", &axis, ";"], 1);
            }
            self.buf.line("return *this;");
            self.buf.shift(-1);
            self.buf.line("}");
            self.record(&vec_t, &format!("operator{op}="), vec![const_ref.clone()]);
        }

        for (op, joiner) in [("=", "&&"), ("!", "||")] {
            self.buf.write(
                &["bool ", &vec_t, "::operator ", op, "= (", &const_ref, " other) const {"],
                1,
            );
            self.buf.write_shifted(&["return "], 0, 1);
            for i in 0..d {
                let axis = n.axis(i).to_string();
                if i + 1 == d {
                    self.buf.write(&["this->", &axis, " ", op, "= other.", &axis, ";"], 1);
                } else {
                    self.buf.write(
                        &["this->", &axis, " ", op, "= other.", &axis, " ", joiner, " "],
                        0,
                    );
                }
            }
            self.buf.line("}");
            self.record(&vec_t, &format!("operator{op}="), vec![const_ref.clone()]);
        }

        for op in ["*", "/"] {
            self.buf.write(
                &[&vec_t, " ", &vec_t, "::operator ", op, " (", &scalar, " scalar) const {"],
                1,
            );
            self.buf.write_shifted(&["return ", &vec_t, "("], 0, 1);
            for i in 0..d {
                let axis = n.axis(i).to_string();
                if i + 1 == d {
                    self.buf.write(&["this->", &axis, " ", op, " scalar);"], 1);
                } else {
                    self.buf.write(&["this->", &axis, " ", op, " scalar, "], 0);
                }
            }
            self.buf.line("}");
            self.record(&vec_t, &format!("operator{op}"), vec![scalar.clone()]);

            self.buf.write(
                &[&vec_t, "& ", &vec_t, "::operator ", op, "= (", &scalar, " scalar) {"],
                1,
            );
            self.buf.shift(1);
            for i in 0..d {
                let axis = n.axis(i).to_string();
                self.buf.write(&[&axis, " ", op, "= scalar;"], 1);
            }
            self.buf.line("return *this;");
            self.buf.shift(-1);
            self.buf.line("}");
            self.record(&vec_t, &format!("operator{op}="), vec![scalar.clone()]);
        }

        self.buf.blank();
    }

    fn vector_methods(&mut self, d: usize) {
        let n = &self.ctx.naming;
        let vec_t = n.vec_type(d);
        let const_ref = n.vec_const_ref(d);
        let scalar = n.scalar().to_string();

        self.buf.write(&[&scalar, " ", &vec_t, "::mag() const {"], 1);
        self.buf.write_shifted(&["return sqrt("], 0, 1);
        for i in 0..d {
            let axis = n.axis(i).to_string();
            if i + 1 == d {
                self.buf.write(&[&axis, "*", &axis, ");"], 1);
            } else {
                self.buf.write(&[&axis, "*", &axis, " + "], 0);
            }
        }
        self.buf.write(&["}"], 2);
        self.record(&vec_t, "mag", vec![]);

        self.buf.write(&[&vec_t, " ", &vec_t, "::normalized() const {"], 1);
        self.buf.write_shifted(&["return *this / this->mag();"], 1, 1);
        self.buf.write(&["}"], 2);
        self.record(&vec_t, "normalized", vec![]);

        self.buf.write(&[&vec_t, "& ", &vec_t, "::normalize() {"], 1);
        self.buf.write_shifted(&["*this /= this->mag();"], 1, 1);
        self.buf.write_shifted(&["return *this;"], 1, 1);
        self.buf.write(&["}"], 2);
        self.record(&vec_t, "normalize", vec![]);

        self.buf.write(&[&scalar, " ", &vec_t, "::dot (", &const_ref, " other) const {"], 1);
        self.buf.write_shifted(&["return "], 0, 1);
        for i in 0..d {
            let axis = n.axis(i).to_string();
            if i + 1 == d {
                self.buf.write(&["this->", &axis, "*other.", &axis, ";"], 1);
            } else {
                self.buf.write(&["this->", &axis, "*other.", &axis, " + "], 0);
            }
        }
        self.buf.write(&["}"], 2);
        self.record(&vec_t, "dot", vec![const_ref]);
    }

    fn vector_swizzles(&mut self, d: usize) {
        let n = &self.ctx.naming;
        let vec_t = n.vec_type(d);
        for arity in 2..=self.ctx.max_dimension {
            for tuple in axis_tuples(arity, d) {
                let result_t = n.vec_type(arity);
                let name = n.swizzle_name(&tuple);
                let args = tuple
                    .iter()
                    .map(|&a| n.axis(a).to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                self.buf.write(
                    &[
                        &result_t, " ", &vec_t, "::", &name, "() const { ", "return ", &result_t,
                        "(", &args, "); }",
                    ],
                    1,
                );
                self.record(&vec_t, &name, vec![]);
            }
            self.buf.blank();
        }
    }

    fn vector_free_operator(&mut self, d: usize) {
        let n = &self.ctx.naming;
        let vec_t = n.vec_type(d);
        let const_ref = n.vec_const_ref(d);
        let scalar = n.scalar().to_string();

        self.buf.write(
            &[&vec_t, " operator * (", &scalar, " scalar, ", &const_ref, " vec) {"],
            1,
        );
        self.buf.write_shifted(&["return vec * scalar;"], 1, 1);
        self.buf.write(&["}"], 2);
        self.record("", "operator*", vec![scalar, const_ref]);
    }

    // --- matrices ---

    fn matrix_definitions(&mut self, rows: usize, cols: usize) {
        self.matrix_constructors(rows, cols);
        self.matrix_operators(rows, cols);
        self.matrix_methods(rows, cols);
        self.matrix_free_operators(rows, cols);
    }

    fn matrix_constructors(&mut self, rows: usize, cols: usize) {
        let n = &self.ctx.naming;
        let mat_t = n.mat_type(rows, cols);
        let const_ref = n.mat_const_ref(rows, cols);
        let scalar = n.scalar().to_string();
        let last = n.element(rows - 1, cols - 1);

        self.buf.write(&[&mat_t, "::", &mat_t, "(", &const_ref, " other) : "], 0);
        for r in 0..rows {
            for c in 0..cols {
                let el = n.element(r, c);
                let tail = if el == last { "" } else { ", " };
                self.buf.write(&[&el, "(other.", &el, ")", tail], 0);
            }
        }
        self.buf.write(&[" {}"], 1);
        self.record(&mat_t, &mat_t, vec![const_ref]);

        self.buf.write(&[&mat_t, "::", &mat_t, "("], 0);
        for r in 0..rows {
            for c in 0..cols {
                let el = n.element(r, c);
                let tail = if el == last { ") : " } else { ", " };
                self.buf.write(&[&scalar, " ", &el, tail], 0);
            }
        }
        for r in 0..rows {
            for c in 0..cols {
                let el = n.element(r, c);
                let tail = if el == last { "" } else { ", " };
                self.buf.write(&[&el, "(", &el, ")", tail], 0);
            }
        }
        self.buf.write(&[" {}"], 1);
        self.record(&mat_t, &mat_t, vec![scalar; rows * cols]);
    }

    fn matrix_operators(&mut self, rows: usize, cols: usize) {
        let n = &self.ctx.naming;
        let mat_t = n.mat_type(rows, cols);
        let const_ref = n.mat_const_ref(rows, cols);
        let scalar = n.scalar().to_string();

        for op in ["+", "-"] {
            self.buf.write(
                &[&mat_t, " ", &mat_t, "::operator ", op, " (", &const_ref, " other) const {"],
                1,
            );
            self.buf.write_shifted(&["return ", &mat_t, "("], 1, 1);
            for r in 0..rows {
                let row = (0..cols)
                    .map(|c| {
                        let el = n.element(r, c);
                        format!("this->{el} {op} other.{el}")
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                let terminator = if r + 1 == rows { ");" } else { "," };
                self.buf.write_shifted(&[&row, terminator], 1, 2);
            }
            self.buf.line("}");
            self.record(&mat_t, &format!("operator{op}"), vec![const_ref.clone()]);

            self.buf.write(
                &[&mat_t, "& ", &mat_t, "::operator ", op, "= (", &const_ref, " other) {"],
                1,
            );
            self.buf.shift(1);
            for r in 0..rows {
                for c in 0..cols {
                    let el = n.element(r, c);
                    self.buf.write(&[&el, " ", op, "= other.", &el, ";"], 1);
                }
            }
            self.buf.line("return *this;");
            self.buf.shift(-1);
            self.buf.line("}");
            self.record(&mat_t, &format!("operator{op}="), vec![const_ref.clone()]);
        }

        for (op, joiner) in [("=", "&&"), ("!", "||")] {
            self.buf.write(
                &["bool ", &mat_t, "::operator ", op, "= (", &const_ref, " other) const {"],
                1,
            );
            for r in 0..rows {
                let row = (0..cols)
                    .map(|c| {
                        let el = n.element(r, c);
                        format!("this->{el} {op}= other.{el}")
                    })
                    .collect::<Vec<_>>()
                    .join(&format!(" {joiner} "));
                if r == 0 {
                    self.buf.write_shifted(&["return ", &row], 1, 1);
                } else if r + 1 == rows {
                    self.buf.write_shifted(&[joiner, " ", &row, ";"], 1, 2);
                } else {
                    self.buf.write_shifted(&[joiner, " ", &row], 1, 2);
                }
            }
            self.buf.line("}");
            self.record(&mat_t, &format!("operator{op}="), vec![const_ref.clone()]);
        }

        for op in ["*", "/"] {
            self.buf.write(
                &[&mat_t, " ", &mat_t, "::operator ", op, " (", &scalar, " scalar) const {"],
                1,
            );
            self.buf.write_shifted(&["return ", &mat_t, "("], 1, 1);
            for r in 0..rows {
                let row = (0..cols)
                    .map(|c| format!("this->{} {op} scalar", n.element(r, c)))
                    .collect::<Vec<_>>()
                    .join(", ");
                let terminator = if r + 1 == rows { ");" } else { "," };
                self.buf.write_shifted(&[&row, terminator], 1, 2);
            }
            self.buf.line("}");
            self.record(&mat_t, &format!("operator{op}"), vec![scalar.clone()]);

            self.buf.write(
                &[&mat_t, "& ", &mat_t, "::operator ", op, "= (", &scalar, " scalar) {"],
                1,
            );
            self.buf.shift(1);
            for r in 0..rows {
                for c in 0..cols {
                    self.buf.write(&[&n.element(r, c), " ", op, "= scalar;"], 1);
                }
            }
            self.buf.line("return *this;");
            self.buf.shift(-1);
            self.buf.line("}");
            self.record(&mat_t, &format!("operator{op}="), vec![scalar.clone()]);
        }

        for k in self.ctx.dimensions() {
            let result_t = n.mat_type(rows, k);
            let rhs = n.mat_const_ref(cols, k);
            self.buf.write(
                &[&result_t, " ", &mat_t, "::operator * (", &rhs, " other) const {"],
                1,
            );
            self.buf.write_shifted(&["return ", &result_t, "("], 1, 1);
            for r in 0..rows {
                for j in 0..k {
                    let sum = (0..cols)
                        .map(|c| format!("this->{} * other.{}", n.element(r, c), n.element(c, j)))
                        .collect::<Vec<_>>()
                        .join(" + ");
                    let terminator = if r + 1 == rows && j + 1 == k { ");" } else { "," };
                    self.buf.write_shifted(&[&sum, terminator], 1, 2);
                }
            }
            self.buf.line("}");
            self.record(&mat_t, "operator*", vec![rhs]);
        }

        let vec_out = n.vec_type(rows);
        let vec_rhs = n.vec_const_ref(cols);
        self.buf.write(
            &[&vec_out, " ", &mat_t, "::operator * (", &vec_rhs, " other) const {"],
            1,
        );
        self.buf.write_shifted(&["return ", &vec_out, "("], 1, 1);
        for r in 0..rows {
            let sum = (0..cols)
                .map(|c| format!("this->{} * other.{}", n.element(r, c), n.axis(c)))
                .collect::<Vec<_>>()
                .join(" + ");
            let terminator = if r + 1 == rows { ");" } else { "," };
            self.buf.write_shifted(&[&sum, terminator], 1, 2);
        }
        self.buf.line("}");
        self.record(&mat_t, "operator*", vec![vec_rhs]);

        self.buf.blank();
    }

    fn matrix_methods(&mut self, rows: usize, cols: usize) {
        let n = &self.ctx.naming;
        let mat_t = n.mat_type(rows, cols);
        let scalar = n.scalar().to_string();

        if rows == cols {
            self.buf.write(&[&scalar, " ", &mat_t, "::det() const {"], 1);
            if rows == 2 {
                self.buf.write_shifted(&["return m0x0 * m1x1 - m0x1 * m1x0;"], 1, 1);
            } else {
                // Cofactor expansion along the first row over explicit minors.
                let minor_t = n.mat_type(rows - 1, cols - 1);
                for c in 0..cols {
                    let minor = (1..rows)
                        .flat_map(move |r2| {
                            (0..cols).filter(move |&c2| c2 != c).map(move |c2| (r2, c2))
                        })
                        .map(|(r2, c2)| n.element(r2, c2))
                        .collect::<Vec<_>>()
                        .join(", ");
                    let term = format!("{} * {minor_t}({minor}).det()", n.element(0, c));
                    if c == 0 {
                        self.buf.write_shifted(&["return ", &term], 1, 1);
                    } else {
                        let sign = if c % 2 == 1 { "- " } else { "+ " };
                        let tail = if c + 1 == cols { ";" } else { "" };
                        self.buf.write_shifted(&[sign, &term, tail], 1, 2);
                    }
                }
            }
            self.buf.write(&["}"], 2);
            self.record(&mat_t, "det", vec![]);
        }

        let transposed_t = n.mat_type(cols, rows);
        self.buf.write(&[&transposed_t, " ", &mat_t, "::transposed () const {"], 1);
        self.buf.write_shifted(&["return ", &transposed_t, "("], 1, 1);
        for i in 0..cols {
            let row = (0..rows)
                .map(|j| n.element(j, i))
                .collect::<Vec<_>>()
                .join(", ");
            let terminator = if i + 1 == cols { ");" } else { "," };
            self.buf.write_shifted(&[&row, terminator], 1, 2);
        }
        self.buf.write(&["}"], 2);
        self.record(&mat_t, "transposed", vec![]);
    }

    fn matrix_free_operators(&mut self, rows: usize, cols: usize) {
        let n = &self.ctx.naming;
        let mat_t = n.mat_type(rows, cols);
        let const_ref = n.mat_const_ref(rows, cols);
        let scalar = n.scalar().to_string();

        self.buf.write(
            &[&mat_t, " operator * (", &scalar, " scalar, ", &const_ref, " m) {"],
            1,
        );
        self.buf.write_shifted(&["return m * scalar;"], 1, 1);
        self.buf.write(&["}"], 2);
        self.record("", "operator*", vec![scalar, const_ref.clone()]);

        let vec_row = n.vec_const_ref(rows);
        let vec_out = n.vec_type(cols);
        self.buf.write(
            &[&vec_out, " operator * (", &vec_row, " vec, ", &const_ref, " m) {"],
            1,
        );
        self.buf.write_shifted(&["return ", &vec_out, "("], 1, 1);
        for c in 0..cols {
            let sum = (0..rows)
                .map(|r| format!("vec.{} * m.{}", n.axis(r), n.element(r, c)))
                .collect::<Vec<_>>()
                .join(" + ");
            let terminator = if c + 1 == cols { ");" } else { "," };
            self.buf.write_shifted(&[&sum, terminator], 1, 2);
        }
        self.buf.write(&["}"], 2);
        self.record("", "operator*", vec![vec_row, const_ref]);
    }
}
