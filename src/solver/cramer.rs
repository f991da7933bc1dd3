//! Direct solver using Cramer's rule.
//!
//! Each unknown is the ratio of two determinants: the coefficient matrix with
//! the unknown's column replaced by the free terms, over the main
//! determinant. Exact (up to rounding) for any non-singular system, at
//! factorial cost: n+1 full determinant evaluations.

use crate::error::{Result, SextantError};
use crate::matrix::{LinearSystem, Matrix};

use super::det;
use super::Solver;

/// Determinant-ratio direct solver.
pub struct CramerSolver {
    system: LinearSystem,
}

impl CramerSolver {
    pub fn new(system: LinearSystem) -> Self {
        Self { system }
    }

    /// Determinant of the coefficient matrix with `column` replaced by the
    /// free-term vector.
    fn column_determinant(&self, column: usize) -> f32 {
        let n = self.system.rank();
        let a = self.system.coefficients();
        let b = self.system.free_terms();
        let mut mat = Matrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                mat[(i, j)] = if j == column { b[i] } else { a[(i, j)] };
            }
        }
        det::determinant(&mat)
    }
}

impl Solver for CramerSolver {
    fn rank(&self) -> usize {
        self.system.rank()
    }

    fn solve(&self) -> Result<Vec<f32>> {
        let n = self.system.rank();
        if n == 0 {
            return Ok(Vec::new());
        }

        let main_determinant = det::determinant(self.system.coefficients());
        if main_determinant == 0.0 {
            return Err(SextantError::Singular);
        }

        let mut x = vec![0.0; n];
        for (i, xi) in x.iter_mut().enumerate() {
            *xi = self.column_determinant(i) / main_determinant;
        }
        Ok(x)
    }
}
