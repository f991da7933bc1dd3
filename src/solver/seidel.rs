//! Gauss-Seidel iterative solver.
//!
//! Like Jacobi, but each sweep reuses the components already updated in the
//! current sweep: fresh values for indices below `i`, previous-sweep values
//! above. Convergence is judged on the Euclidean norm of the sweep delta,
//! and exhausting the iteration cap is a hard failure, unlike the other two
//! iterative methods.

use crate::error::{Result, SextantError};
use crate::matrix::LinearSystem;

use super::{IterationConfig, Solver};

/// Gauss-Seidel fixed-point iteration.
pub struct GaussSeidelSolver {
    system: LinearSystem,
    pub config: IterationConfig,
}

impl GaussSeidelSolver {
    pub fn new(system: LinearSystem) -> Self {
        Self {
            system,
            config: IterationConfig::default(),
        }
    }

    pub fn with_config(system: LinearSystem, config: IterationConfig) -> Self {
        Self { system, config }
    }
}

/// Euclidean norm of the difference between two iterates, accumulated in
/// f64 so small per-component changes are not lost.
fn change_norm(xk: &[f32], xkp: &[f32]) -> f64 {
    let mut norm = 0.0f64;
    for (a, b) in xk.iter().zip(xkp) {
        let d = a - b;
        norm += f64::from(d * d);
    }
    norm.sqrt()
}

impl Solver for GaussSeidelSolver {
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

        for i in 0..n {
            if a[(i, i)] == 0.0 {
                return Err(SextantError::ZeroPivot { row: i });
            }
        }

        let mut x = vec![1.0f32; n];
        let mut iterations = 0;
        let mut norm;
        loop {
            let previous = x.clone();
            for i in 0..n {
                let mut acc = 0.0f32;
                for j in 0..i {
                    acc += a[(i, j)] * x[j];
                }
                for j in (i + 1)..n {
                    acc += a[(i, j)] * previous[j];
                }
                x[i] = (b[i] - acc) / a[(i, i)];
            }
            iterations += 1;
            norm = change_norm(&x, &previous);
            if norm < f64::from(self.config.epsilon) || iterations >= self.config.max_iterations
            {
                break;
            }
        }

        if iterations == self.config.max_iterations {
            return Err(SextantError::NotConverged {
                iterations,
                residual: norm as f32,
            });
        }
        tracing::debug!(iterations, norm, "gauss-seidel converged");
        Ok(x)
    }
}
