//! Jacobi iterative solver.
//!
//! Every sweep recomputes all components from the previous full iterate; no
//! value produced during the current sweep is reused within it. The sweep
//! delta is measured as the max absolute per-component change.
//!
//! Hitting the iteration cap is not an error here: the cap exit leaves the
//! counter equal to the cap, so the final check passes and the last iterate
//! is returned as-is, converged or not. Diverging systems therefore yield a
//! garbage vector rather than `Err`; callers that need a guarantee should
//! check the residual, or use [`GaussSeidelSolver`], which does fail on
//! non-convergence.
//!
//! [`GaussSeidelSolver`]: super::seidel::GaussSeidelSolver

use crate::error::{Result, SextantError};
use crate::matrix::LinearSystem;

use super::{IterationConfig, Solver};

/// Jacobi fixed-point iteration.
pub struct JacobiSolver {
    system: LinearSystem,
    pub config: IterationConfig,
    /// Starting iterate. When `None`, component `i` is seeded with `i as f32`.
    pub initial_guess: Option<Vec<f32>>,
}

impl JacobiSolver {
    pub fn new(system: LinearSystem) -> Self {
        Self {
            system,
            config: IterationConfig::default(),
            initial_guess: None,
        }
    }

    pub fn with_config(system: LinearSystem, config: IterationConfig) -> Self {
        Self {
            system,
            config,
            initial_guess: None,
        }
    }
}

impl Solver for JacobiSolver {
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

        let mut x = match &self.initial_guess {
            Some(guess) => {
                if guess.len() != n {
                    return Err(SextantError::LengthMismatch {
                        expected: n,
                        got: guess.len(),
                    });
                }
                guess.clone()
            }
            None => (0..n).map(|i| i as f32).collect(),
        };

        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut norm;
        loop {
            for i in 0..n {
                next[i] = b[i];
                for g in 0..n {
                    if g != i {
                        next[i] -= a[(i, g)] * x[g];
                    }
                }
                next[i] /= a[(i, i)];
            }
            norm = 0.0f32;
            for h in 0..n {
                let change = (x[h] - next[h]).abs();
                if change > norm {
                    norm = change;
                }
                x[h] = next[h];
            }
            iterations += 1;
            if !(norm > self.config.epsilon && iterations < self.config.max_iterations) {
                break;
            }
        }

        tracing::debug!(iterations, norm, "jacobi sweep finished");
        if iterations <= self.config.max_iterations {
            Ok(x)
        } else {
            Err(SextantError::NotConverged {
                iterations,
                residual: norm,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;
    use crate::solver::gauss::GaussSolver;
    use approx::assert_abs_diff_eq;

    fn system(rows: &[Vec<f32>], b: Vec<f32>) -> LinearSystem {
        LinearSystem::new(Matrix::from_rows(rows), b).unwrap()
    }

    #[test]
    fn test_identity_2x2() {
        let s = JacobiSolver::new(system(
            &[vec![1.0, 0.0], vec![0.0, 1.0]],
            vec![7.0, 9.0],
        ));
        assert_eq!(s.solve().unwrap(), vec![7.0, 9.0]);
    }

    #[test]
    fn test_diagonally_dominant_matches_elimination() {
        let sys = system(
            &[
                vec![10.0, 1.0, 2.0],
                vec![1.0, 8.0, 1.0],
                vec![2.0, 1.0, 9.0],
            ],
            vec![15.0, 12.0, 20.0],
        );
        let direct = GaussSolver::new(sys.clone()).solve().unwrap();
        let x = JacobiSolver::new(sys).solve().unwrap();
        for i in 0..3 {
            assert_abs_diff_eq!(x[i], direct[i], epsilon = 1e-3);
        }
    }

    #[test]
    fn test_zero_diagonal() {
        let s = JacobiSolver::new(system(
            &[vec![0.0, 1.0], vec![1.0, 1.0]],
            vec![1.0, 2.0],
        ));
        assert!(matches!(s.solve(), Err(SextantError::ZeroPivot { row: 0 })));
    }

    #[test]
    fn test_cap_exhaustion_still_returns_last_iterate() {
        // [[1, 2], [2, 1]] is not diagonally dominant and the iteration
        // diverges; the solver still hands back whatever it ended on.
        let mut s = JacobiSolver::new(system(
            &[vec![1.0, 2.0], vec![2.0, 1.0]],
            vec![4.0, 4.0],
        ));
        s.config.max_iterations = 10;
        let x = s.solve().unwrap();
        assert_eq!(x.len(), 2);
    }

    #[test]
    fn test_initial_guess_override() {
        let sys = system(
            &[
                vec![10.0, 1.0, 2.0],
                vec![1.0, 8.0, 1.0],
                vec![2.0, 1.0, 9.0],
            ],
            vec![15.0, 12.0, 20.0],
        );
        let direct = GaussSolver::new(sys.clone()).solve().unwrap();
        let mut s = JacobiSolver::new(sys);
        s.initial_guess = Some(vec![0.0, 0.0, 0.0]);
        let x = s.solve().unwrap();
        for i in 0..3 {
            assert_abs_diff_eq!(x[i], direct[i], epsilon = 1e-3);
        }
    }

    #[test]
    fn test_initial_guess_wrong_length() {
        let mut s = JacobiSolver::new(system(
            &[vec![1.0, 0.0], vec![0.0, 1.0]],
            vec![1.0, 2.0],
        ));
        s.initial_guess = Some(vec![0.0]);
        assert!(matches!(
            s.solve(),
            Err(SextantError::LengthMismatch {
                expected: 2,
                got: 1
            })
        ));
    }
}
