use thiserror::Error;

#[derive(Debug, Error)]
pub enum SextantError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("coefficient matrix is {rows}x{cols}, expected square")]
    NotSquare { rows: usize, cols: usize },

    #[error("expected {expected} values, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("matrix is singular")]
    Singular,

    #[error("zero pivot on row {row}")]
    ZeroPivot { row: usize },

    #[error("no convergence after {iterations} iterations (residual {residual})")]
    NotConverged { iterations: usize, residual: f32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SextantError>;
