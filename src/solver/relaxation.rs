//! Successive over-relaxation (SOR) iterative solver.
//!
//! A Gauss-Seidel-style raw update blended with the previous value of the
//! same component: `x[i] = w·raw + (1−w)·prev`, with a fixed relaxation
//! factor of 0.5, which damps the update. Like Jacobi and unlike
//! Gauss-Seidel, the last iterate is returned even when the iteration cap is
//! hit without convergence.

use crate::error::{Result, SextantError};
use crate::matrix::LinearSystem;

use super::{IterationConfig, Solver};

const RELAXATION_FACTOR: f32 = 0.5;

/// Fixed-factor relaxation iteration.
pub struct RelaxationSolver {
    system: LinearSystem,
    pub config: IterationConfig,
}

impl RelaxationSolver {
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

impl Solver for RelaxationSolver {
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

        let mut x = vec![0.0f32; n];
        let mut blended = vec![0.0f32; n];
        let mut iterations = 0;
        let mut norm;
        loop {
            iterations += 1;
            norm = 0.0f32;
            for i in 0..n {
                let mut raw = b[i];
                for j in 0..n {
                    if j != i {
                        raw -= a[(i, j)] * x[j];
                    }
                }
                raw /= a[(i, i)];

                let next = RELAXATION_FACTOR * raw + (1.0 - RELAXATION_FACTOR) * blended[i];
                x[i] = next;

                let change = (next - blended[i]).abs();
                if change > norm {
                    norm = change;
                }
                blended[i] = next;
            }
            if !(norm > self.config.epsilon && iterations < self.config.max_iterations) {
                break;
            }
        }

        tracing::debug!(iterations, norm, "relaxation sweep finished");
        Ok(x)
    }
}
