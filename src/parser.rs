//! Linear system file parser.
//!
//! Parses a line-oriented description of a square system A·x = b.
//!
//! # Supported syntax
//!
//! ```text
//! * comment line
//! c1 c2 ... cn | b        (one equation: coefficients, then the free term)
//! ```
//!
//! Coefficients are whitespace-separated. Both `.` and `,` are accepted as
//! the decimal separator. Blank lines and `*` comments are skipped. The
//! number of equations fixes the dimension; every row must carry the same
//! number of coefficients.

use nom::bytes::complete::take_while1;
use nom::character::complete::{char, space0, space1};
use nom::multi::separated_list1;
use nom::IResult;
use nom::Parser;

use crate::error::{Result, SextantError};
use crate::matrix::{LinearSystem, Matrix};

/// Parse a system description string into a validated `LinearSystem`.
pub fn parse(input: &str) -> Result<LinearSystem> {
    let mut rows: Vec<Vec<f32>> = Vec::new();
    let mut free_terms: Vec<f32> = Vec::new();

    for (line_num, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();

        // Skip blank lines and comments
        if line.is_empty() || line.starts_with('*') {
            continue;
        }

        let (coefficients, free) =
            parse_equation(line).map_err(|e| parse_err(line_num, raw_line, &e))?;
        rows.push(coefficients);
        free_terms.push(free);
    }

    if rows.is_empty() {
        return Err(SextantError::Parse("no equations found".into()));
    }

    let width = rows[0].len();
    for (i, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(SextantError::Parse(format!(
                "equation {} has {} coefficients, expected {}",
                i + 1,
                row.len(),
                width
            )));
        }
    }

    LinearSystem::new(Matrix::from_rows(&rows), free_terms)
}

fn parse_err(line_num: usize, raw_line: &str, detail: &str) -> SextantError {
    SextantError::Parse(format!("line {}: {} in: {}", line_num + 1, detail, raw_line))
}

/// Parse one `c1 c2 ... cn | b` line.
fn parse_equation(line: &str) -> std::result::Result<(Vec<f32>, f32), String> {
    match equation(line) {
        Ok(("", parsed)) => Ok(parsed),
        Ok((rest, _)) => Err(format!("trailing input '{rest}'")),
        Err(e) => Err(e.to_string()),
    }
}

fn equation(input: &str) -> IResult<&str, (Vec<f32>, f32)> {
    let (rest, _) = space0.parse(input)?;
    let (rest, coefficients) = separated_list1(space1, number).parse(rest)?;
    let (rest, _) = space0.parse(rest)?;
    let (rest, _) = char('|').parse(rest)?;
    let (rest, _) = space0.parse(rest)?;
    let (rest, free) = number(rest)?;
    let (rest, _) = space0.parse(rest)?;
    Ok((rest, (coefficients, free)))
}

/// Parse a numeric value. A comma is accepted as the decimal separator and
/// normalized to a dot before conversion.
fn number(input: &str) -> IResult<&str, f32> {
    let (rest, token) =
        take_while1(|c: char| !c.is_whitespace() && c != '|').parse(input)?;
    match token.replace(',', ".").parse::<f32>() {
        Ok(value) => Ok((rest, value)),
        Err(_) => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Float,
        ))),
    }
}
