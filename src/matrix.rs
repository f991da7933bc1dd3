//! Dense square matrix and validated linear system.
//!
//! All solvers work on the same inputs: an n×n coefficient matrix and an
//! n-length free-term vector, both single precision. `LinearSystem` checks
//! the dimensions once at construction so the solvers never have to.

use crate::error::{Result, SextantError};
use std::ops::{Index, IndexMut};

/// Dense matrix in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    nrows: usize,
    ncols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Create a zero-filled matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            data: vec![0.0; nrows * ncols],
        }
    }

    /// Build a matrix from rows. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<f32>]) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            assert_eq!(row.len(), ncols, "from_rows: ragged rows");
            data.extend_from_slice(row);
        }
        Self { nrows, ncols, data }
    }

    /// The n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Matrix-vector multiply: y = A * x
    pub fn mat_vec(&self, x: &[f32]) -> Vec<f32> {
        assert_eq!(x.len(), self.ncols, "mat_vec dimension mismatch");
        let mut y = vec![0.0; self.nrows];
        for i in 0..self.nrows {
            let mut sum = 0.0;
            for j in 0..self.ncols {
                sum += self[(i, j)] * x[j];
            }
            y[i] = sum;
        }
        y
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, (i, j): (usize, usize)) -> &f32 {
        &self.data[i * self.ncols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f32 {
        &mut self.data[i * self.ncols + j]
    }
}

/// A square system A·x = b, validated at construction.
///
/// Solvers hold their own copy and only ever read it.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    coefficients: Matrix,
    free_terms: Vec<f32>,
}

impl LinearSystem {
    /// Bundle a coefficient matrix with its free-term vector.
    ///
    /// Fails if the matrix is not square or the vector length does not match
    /// the matrix dimension.
    pub fn new(coefficients: Matrix, free_terms: Vec<f32>) -> Result<Self> {
        if !coefficients.is_square() {
            return Err(SextantError::NotSquare {
                rows: coefficients.nrows(),
                cols: coefficients.ncols(),
            });
        }
        if free_terms.len() != coefficients.nrows() {
            return Err(SextantError::LengthMismatch {
                expected: coefficients.nrows(),
                got: free_terms.len(),
            });
        }
        Ok(Self {
            coefficients,
            free_terms,
        })
    }

    /// Number of unknowns (the matrix dimension).
    pub fn rank(&self) -> usize {
        self.free_terms.len()
    }

    pub fn coefficients(&self) -> &Matrix {
        &self.coefficients
    }

    pub fn free_terms(&self) -> &[f32] {
        &self.free_terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_and_index() {
        let mut m = Matrix::zeros(2, 3);
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m[(1, 2)], 0.0);
        m[(1, 2)] = 4.5;
        assert_eq!(m[(1, 2)], 4.5);
        assert_eq!(m.row(1), &[0.0, 0.0, 4.5]);
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert!(m.is_square());
    }

    #[test]
    fn test_identity() {
        let m = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_mat_vec() {
        // [[2, 1], [0, 3]] * [1, 2] = [4, 6]
        let m = Matrix::from_rows(&[vec![2.0, 1.0], vec![0.0, 3.0]]);
        assert_eq!(m.mat_vec(&[1.0, 2.0]), vec![4.0, 6.0]);
    }

    #[test]
    fn test_system_rejects_nonsquare() {
        let m = Matrix::zeros(2, 3);
        let err = LinearSystem::new(m, vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, SextantError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn test_system_rejects_wrong_rhs_length() {
        let m = Matrix::identity(2);
        let err = LinearSystem::new(m, vec![1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            SextantError::LengthMismatch {
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn test_system_accessors() {
        let m = Matrix::identity(2);
        let sys = LinearSystem::new(m.clone(), vec![7.0, 9.0]).unwrap();
        assert_eq!(sys.rank(), 2);
        assert_eq!(sys.coefficients(), &m);
        assert_eq!(sys.free_terms(), &[7.0, 9.0]);
    }
}
