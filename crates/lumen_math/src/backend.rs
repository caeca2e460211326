//! Matrix backends.
//!
//! Everything above the algebra core talks to matrices through the
//! [`MatrixBackend`] trait. A backend is chosen by whoever builds the scene
//! and handed to the world and camera as an `Arc<dyn MatrixBackend>`, so two
//! renders with different backends can run side by side.

use glam::{DMat2, DMat3, DMat4, DVec2, DVec3, DVec4};

use crate::{Matrix, MathError, MathResult, Tuple};

/// The matrix operations the renderer depends on.
pub trait MatrixBackend: Send + Sync + std::fmt::Debug {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Matrix product `a * b`.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> MathResult<Matrix>;

    /// Apply `m` to the leading `m.size()` components of `t`.
    ///
    /// A 4x4 transforms the full homogeneous tuple; a 3x3 transforms xyz and
    /// leaves w alone, which is what normal transformation needs.
    fn multiply_tuple(&self, m: &Matrix, t: Tuple) -> Tuple;

    fn transpose(&self, m: &Matrix) -> Matrix;

    fn determinant(&self, m: &Matrix) -> f64;

    fn submatrix(&self, m: &Matrix, row: usize, col: usize) -> Matrix {
        m.submatrix(row, col)
    }

    fn minor(&self, m: &Matrix, row: usize, col: usize) -> f64 {
        self.determinant(&self.submatrix(m, row, col))
    }

    fn cofactor(&self, m: &Matrix, row: usize, col: usize) -> f64 {
        let minor = self.minor(m, row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    fn is_invertible(&self, m: &Matrix) -> bool {
        self.determinant(m) != 0.0
    }

    /// Inverse of `m`, or [`MathError::SingularMatrix`] when the determinant is zero.
    fn inverse(&self, m: &Matrix) -> MathResult<Matrix>;
}

/// Plain nested-loop implementation using cofactor expansion.
///
/// Inversion uses the adjugate: each cofactor is divided by the
/// determinant and stored at the transposed position.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveBackend;

impl MatrixBackend for NaiveBackend {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> MathResult<Matrix> {
        a.check_same_size(b)?;
        let n = a.size();
        let mut out = Matrix::zero(n);
        for r in 0..n {
            for c in 0..n {
                let sum = (0..n).map(|k| a.get(r, k) * b.get(k, c)).sum();
                out.set(r, c, sum);
            }
        }
        Ok(out)
    }

    fn multiply_tuple(&self, m: &Matrix, t: Tuple) -> Tuple {
        let input = [t.x, t.y, t.z, t.w];
        let mut output = input;
        let n = m.size();
        for (r, slot) in output.iter_mut().enumerate().take(n) {
            *slot = (0..n).map(|c| m.get(r, c) * input[c]).sum();
        }
        Tuple::new(output[0], output[1], output[2], output[3])
    }

    fn transpose(&self, m: &Matrix) -> Matrix {
        let n = m.size();
        let mut out = Matrix::zero(n);
        for r in 0..n {
            for c in 0..n {
                out.set(c, r, m.get(r, c));
            }
        }
        out
    }

    fn determinant(&self, m: &Matrix) -> f64 {
        match m.size() {
            1 => m.get(0, 0),
            2 => m.get(0, 0) * m.get(1, 1) - m.get(0, 1) * m.get(1, 0),
            n => (0..n).map(|c| m.get(0, c) * self.cofactor(m, 0, c)).sum(),
        }
    }

    fn inverse(&self, m: &Matrix) -> MathResult<Matrix> {
        let determinant = self.determinant(m);
        if determinant == 0.0 {
            return Err(MathError::SingularMatrix { determinant });
        }
        let n = m.size();
        let mut out = Matrix::zero(n);
        if n == 1 {
            out.set(0, 0, 1.0 / determinant);
            return Ok(out);
        }
        for r in 0..n {
            for c in 0..n {
                out.set(c, r, self.cofactor(m, r, c) / determinant);
            }
        }
        Ok(out)
    }
}

/// Backend that hands the arithmetic to glam's SIMD-friendly `f64` matrices.
///
/// glam stores matrices column-major, so every conversion goes through a
/// transpose of the row arrays.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlamBackend;

fn to_dmat4(m: &Matrix) -> DMat4 {
    DMat4::from_cols_array_2d(&m.rows_4x4()).transpose()
}

fn from_dmat4(m: DMat4) -> Matrix {
    Matrix::from_rows(m.transpose().to_cols_array_2d())
}

fn to_dmat3(m: &Matrix) -> DMat3 {
    let r = m.rows_4x4();
    DMat3::from_cols_array_2d(&[
        [r[0][0], r[0][1], r[0][2]],
        [r[1][0], r[1][1], r[1][2]],
        [r[2][0], r[2][1], r[2][2]],
    ])
    .transpose()
}

fn from_dmat3(m: DMat3) -> Matrix {
    Matrix::from_rows(m.transpose().to_cols_array_2d())
}

fn to_dmat2(m: &Matrix) -> DMat2 {
    let r = m.rows_4x4();
    DMat2::from_cols_array_2d(&[[r[0][0], r[0][1]], [r[1][0], r[1][1]]]).transpose()
}

fn from_dmat2(m: DMat2) -> Matrix {
    Matrix::from_rows(m.transpose().to_cols_array_2d())
}

impl MatrixBackend for GlamBackend {
    fn name(&self) -> &'static str {
        "glam"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> MathResult<Matrix> {
        a.check_same_size(b)?;
        Ok(match a.size() {
            4 => from_dmat4(to_dmat4(a) * to_dmat4(b)),
            3 => from_dmat3(to_dmat3(a) * to_dmat3(b)),
            2 => from_dmat2(to_dmat2(a) * to_dmat2(b)),
            _ => Matrix::from_rows([[a.get(0, 0) * b.get(0, 0)]]),
        })
    }

    fn multiply_tuple(&self, m: &Matrix, t: Tuple) -> Tuple {
        match m.size() {
            4 => Tuple::from(to_dmat4(m) * DVec4::from(t)),
            3 => {
                let v = to_dmat3(m) * DVec3::new(t.x, t.y, t.z);
                Tuple::new(v.x, v.y, v.z, t.w)
            }
            2 => {
                let v = to_dmat2(m) * DVec2::new(t.x, t.y);
                Tuple::new(v.x, v.y, t.z, t.w)
            }
            _ => Tuple::new(m.get(0, 0) * t.x, t.y, t.z, t.w),
        }
    }

    fn transpose(&self, m: &Matrix) -> Matrix {
        match m.size() {
            4 => from_dmat4(to_dmat4(m).transpose()),
            3 => from_dmat3(to_dmat3(m).transpose()),
            2 => from_dmat2(to_dmat2(m).transpose()),
            _ => *m,
        }
    }

    fn determinant(&self, m: &Matrix) -> f64 {
        match m.size() {
            4 => to_dmat4(m).determinant(),
            3 => to_dmat3(m).determinant(),
            2 => to_dmat2(m).determinant(),
            _ => m.get(0, 0),
        }
    }

    fn inverse(&self, m: &Matrix) -> MathResult<Matrix> {
        let determinant = self.determinant(m);
        if determinant == 0.0 {
            return Err(MathError::SingularMatrix { determinant });
        }
        Ok(match m.size() {
            4 => from_dmat4(to_dmat4(m).inverse()),
            3 => from_dmat3(to_dmat3(m).inverse()),
            2 => from_dmat2(to_dmat2(m).inverse()),
            _ => Matrix::from_rows([[1.0 / determinant]]),
        })
    }
}
