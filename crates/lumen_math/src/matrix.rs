//! Square row-major matrices up to 4x4.
//!
//! Storage is always a 4x4 array; `size` tracks how much of it is live so
//! the 3x3 and 2x2 intermediates of cofactor expansion share one type.
//! Arithmetic beyond element access lives behind [`crate::MatrixBackend`].

use crate::{ApproxEq, MathError, MathResult};

/// Maximum supported dimension.
pub const MAX_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    size: usize,
    data: [[f64; MAX_SIZE]; MAX_SIZE],
}

impl Matrix {
    /// An all-zero matrix of the given size.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0 or larger than 4.
    pub fn zero(size: usize) -> Self {
        assert!(
            (1..=MAX_SIZE).contains(&size),
            "matrix size must be between 1 and {MAX_SIZE}, got {size}"
        );
        Self {
            size,
            data: [[0.0; MAX_SIZE]; MAX_SIZE],
        }
    }

    /// Identity matrix of the given size.
    pub fn identity_of(size: usize) -> Self {
        let mut m = Self::zero(size);
        for i in 0..size {
            m.data[i][i] = 1.0;
        }
        m
    }

    /// Build an NxN matrix from rows.
    pub fn from_rows<const N: usize>(rows: [[f64; N]; N]) -> Self {
        let mut m = Self::zero(N);
        for (r, row) in rows.iter().enumerate() {
            m.data[r][..N].copy_from_slice(row);
        }
        m
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.size && col < self.size);
        self.data[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.size && col < self.size);
        self.data[row][col] = value;
    }

    /// Copy of this matrix with `row` and `col` removed.
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix {
        let mut sub = Matrix::zero(self.size - 1);
        let mut sr = 0;
        for r in (0..self.size).filter(|&r| r != row) {
            let mut sc = 0;
            for c in (0..self.size).filter(|&c| c != col) {
                sub.data[sr][sc] = self.data[r][c];
                sc += 1;
            }
            sr += 1;
        }
        sub
    }

    /// Raw row storage. Entries outside the live region are zero.
    pub fn rows_4x4(&self) -> [[f64; MAX_SIZE]; MAX_SIZE] {
        self.data
    }

    /// Fail unless both operands have the same dimension.
    pub fn check_same_size(&self, other: &Matrix) -> MathResult<()> {
        if self.size != other.size {
            return Err(MathError::DimensionMismatch {
                left: self.size,
                right: other.size,
            });
        }
        Ok(())
    }
}

impl ApproxEq for Matrix {
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        if self.size != other.size {
            return false;
        }
        (0..self.size).all(|r| {
            (0..self.size).all(|c| self.data[r][c].approx_eq(&other.data[r][c], epsilon))
        })
    }
}
