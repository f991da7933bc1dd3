//! Direct solver via explicit matrix inversion.
//!
//! Computes A⁻¹ = adj(A) / det(A) and multiplies it with the free terms.
//! Mathematically the same answer as Cramer's rule, but a different
//! computation order; the two can disagree in the last float digits.

use crate::error::{Result, SextantError};
use crate::matrix::LinearSystem;

use super::det;
use super::Solver;

/// Adjugate-inverse direct solver.
pub struct MatrixInverseSolver {
    system: LinearSystem,
}

impl MatrixInverseSolver {
    pub fn new(system: LinearSystem) -> Self {
        Self { system }
    }
}

impl Solver for MatrixInverseSolver {
    fn rank(&self) -> usize {
        self.system.rank()
    }

    fn solve(&self) -> Result<Vec<f32>> {
        let n = self.system.rank();
        if n == 0 {
            return Ok(Vec::new());
        }

        let inverse = det::inverse(self.system.coefficients())?;
        Ok(inverse.mat_vec(self.system.free_terms()))
    }
}
