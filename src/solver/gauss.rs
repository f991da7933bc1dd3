//! Direct solver using Gaussian elimination with partial pivoting.
//!
//! Forward elimination on the augmented matrix [A | b] followed by back
//! substitution. Pivot rows are chosen by largest magnitude in the remaining
//! column to bound numerical error.

use crate::error::{Result, SextantError};
use crate::matrix::LinearSystem;

use super::Solver;

/// A pivot smaller than this counts as no pivot at all.
const PIVOT_EPS: f32 = 1e-12;

/// Elimination-based direct solver.
pub struct GaussSolver {
    system: LinearSystem,
}

impl GaussSolver {
    pub fn new(system: LinearSystem) -> Self {
        Self { system }
    }
}

impl Solver for GaussSolver {
    fn rank(&self) -> usize {
        self.system.rank()
    }

    fn solve(&self) -> Result<Vec<f32>> {
        let n = self.system.rank();
        if n == 0 {
            return Ok(Vec::new());
        }

        let a = self.system.coefficients();
        let b = self.system.free_terms();

        // Build augmented matrix [A | b]
        let mut aug: Vec<Vec<f32>> = Vec::with_capacity(n);
        for i in 0..n {
            let mut row = Vec::with_capacity(n + 1);
            row.extend_from_slice(a.row(i));
            row.push(b[i]);
            aug.push(row);
        }

        // Forward elimination with partial pivoting
        for k in 0..n {
            // Find pivot row
            let mut max_val = aug[k][k].abs();
            let mut max_row = k;
            for i in (k + 1)..n {
                let v = aug[i][k].abs();
                if v > max_val {
                    max_val = v;
                    max_row = i;
                }
            }

            if max_val < PIVOT_EPS {
                return Err(SextantError::Singular);
            }

            // Swap rows
            if max_row != k {
                aug.swap(k, max_row);
            }

            // Eliminate below
            let pivot = aug[k][k];
            for i in (k + 1)..n {
                let factor = aug[i][k] / pivot;
                aug[i][k] = 0.0;
                for j in (k + 1)..=n {
                    aug[i][j] -= factor * aug[k][j];
                }
            }
        }

        // Back substitution
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let mut sum = aug[i][n];
            for j in (i + 1)..n {
                sum -= aug[i][j] * x[j];
            }
            x[i] = sum / aug[i][i];
        }

        Ok(x)
    }
}
