//! Four-function arithmetic for the calculator drill.

use thiserror::Error;

use crate::domain::value_objects::Operator;

/// A successfully evaluated expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub lhs: f64,
    pub op: Operator,
    pub rhs: f64,
    pub result: f64,
}

/// Why an expression produced no result
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    #[error("unsupported operator '{0}'")]
    UnsupportedOperator(char),

    #[error("division by zero")]
    DivisionByZero,
}

impl CalculationError {
    /// Stable machine-readable reason, used in JSON output
    pub fn reason(&self) -> &'static str {
        match self {
            CalculationError::UnsupportedOperator(_) => "unsupported_operator",
            CalculationError::DivisionByZero => "division_by_zero",
        }
    }
}

/// Apply the operator typed as `symbol` to the two operands.
///
/// Division requires `rhs != 0.0`; negative zero compares equal to zero and is
/// rejected as well.
pub fn evaluate(lhs: f64, rhs: f64, symbol: char) -> Result<Calculation, CalculationError> {
    let op = Operator::from_symbol(symbol).ok_or(CalculationError::UnsupportedOperator(symbol))?;

    let result = match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide if rhs != 0.0 => lhs / rhs,
        Operator::Divide => return Err(CalculationError::DivisionByZero),
    };

    Ok(Calculation {
        lhs,
        op,
        rhs,
        result,
    })
}
