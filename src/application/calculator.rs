//! Calculator use case
//!
//! Prompts for two doubles and an operator, then reports either the result
//! line or the invalid-input line. There is no retry.

use std::io::Write;

use crate::domain::ports::InputSource;
use crate::domain::services::{evaluate, Calculation, CalculationError};
use crate::error::DrillResult;
use crate::ui::json::events::ResultEvent;
use crate::ui::text;
use crate::ui::Reporter;

/// What a calculator run produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculatorOutcome {
    Computed(Calculation),
    Rejected {
        symbol: char,
        error: CalculationError,
    },
}

pub fn run<I, W>(input: &mut I, reporter: &mut Reporter<W>) -> DrillResult<CalculatorOutcome>
where
    I: InputSource,
    W: Write,
{
    reporter.prompt(text::PROMPT_DOUBLE)?;
    let lhs = input.read_f64()?;
    reporter.prompt(text::PROMPT_DOUBLE)?;
    let rhs = input.read_f64()?;
    reporter.prompt(text::PROMPT_OPERATOR)?;
    let symbol = input.read_char()?;
    tracing::debug!(lhs, rhs, %symbol, "operands read");

    match evaluate(lhs, rhs, symbol) {
        Ok(calc) => {
            tracing::debug!(result = calc.result, "evaluated");
            reporter.result(&text::calculation_line(&calc), ResultEvent::from(&calc))?;
            Ok(CalculatorOutcome::Computed(calc))
        }
        Err(error) => {
            tracing::debug!(%error, "expression rejected");
            reporter.result(
                text::INVALID_CALCULATION,
                ResultEvent::invalid_input(&error, symbol),
            )?;
            Ok(CalculatorOutcome::Rejected { symbol, error })
        }
    }
}
