//! Six-method linear system solver.
//!
//! Solves a square system A·x = b with three direct methods (Gaussian
//! elimination, Cramer's rule, matrix inversion) and three iterative
//! refinement schemes (Jacobi, Gauss-Seidel, relaxation), side by side for
//! comparison. Everything is dense, single precision, and synchronous; the
//! solvers share no state, so a caller may evaluate them in any order or in
//! parallel.

pub mod error;
pub mod matrix;
pub mod output;
pub mod parser;
pub mod solver;
pub mod stats;
