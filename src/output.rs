//! Results output formatting.

use crate::error::Result;
use crate::matrix::LinearSystem;
use std::io::Write;

/// Write the system as a list of equations.
///
/// Format:
/// ```text
/// System of equations:
///
///     5·x1 + 2·x2 + 3·x3 = 1
///     1.5·x1 + 4·x2 + 3.3·x3 = 2
/// ```
pub fn write_equations<W: Write>(system: &LinearSystem, writer: &mut W) -> Result<()> {
    let n = system.rank();
    let a = system.coefficients();
    let b = system.free_terms();

    writeln!(writer, "System of equations:")?;
    writeln!(writer)?;
    for i in 0..n {
        write!(writer, "    ")?;
        for j in 0..n {
            let c = a[(i, j)];
            if j == 0 {
                write!(writer, "{}·x{}", c, j + 1)?;
            } else if c >= 0.0 {
                write!(writer, " + {}·x{}", c, j + 1)?;
            } else {
                write!(writer, " - {}·x{}", c.abs(), j + 1)?;
            }
        }
        writeln!(writer, " = {}", b[i])?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Write one method's outcome under its label.
///
/// `None` is the explicit no-solution outcome:
/// ```text
/// Cramer's method:
///
///     x1 = -0.20341532; x2 = 0.04796586; x3 = 0.64038122;
/// ```
pub fn write_solution<W: Write>(
    label: &str,
    solution: Option<&[f32]>,
    writer: &mut W,
) -> Result<()> {
    writeln!(writer, "{}:", label)?;
    writeln!(writer)?;
    match solution {
        Some(x) => {
            write!(writer, "    ")?;
            for (i, value) in x.iter().enumerate() {
                write!(writer, "x{} = {}; ", i + 1, value)?;
            }
            writeln!(writer)?;
        }
        None => {
            writeln!(writer, "    The system has no solution.")?;
        }
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    fn render_equations(system: &LinearSystem) -> String {
        let mut buf = Vec::new();
        write_equations(system, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_equations_fold_signs() {
        let system = LinearSystem::new(
            Matrix::from_rows(&[vec![5.0, -2.0], vec![-3.1, 0.0]]),
            vec![1.0, 3.0],
        )
        .unwrap();
        let text = render_equations(&system);
        assert!(text.contains("5·x1 - 2·x2 = 1"), "got: {text}");
        assert!(text.contains("-3.1·x1 + 0·x2 = 3"), "got: {text}");
    }

    #[test]
    fn test_solution_line() {
        let mut buf = Vec::new();
        write_solution("Cramer's method", Some(&[7.0, 9.0]), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Cramer's method:"), "got: {text}");
        assert!(text.contains("x1 = 7; x2 = 9; "), "got: {text}");
    }

    #[test]
    fn test_no_solution_line() {
        let mut buf = Vec::new();
        write_solution("Matrix inversion", None, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("The system has no solution."), "got: {text}");
    }
}
