//! Application Layer
//!
//! Use cases that orchestrate one drill each: prompt, read, compute, report.
//! This layer:
//! - Depends on Domain layer (services, ports)
//! - Does NOT contain the computations themselves (those are in Domain)
//! - Coordinates between the input source and the reporter
//!
//! ## Use Cases
//!
//! - `calculator::run` - Two operands and an operator, one result line
//! - `gravity::run` - Tower height, six per-second height lines
//! - `dec2bin::run` - One integer, one 8-bit binary line

pub mod calculator;
pub mod dec2bin;
pub mod gravity;

use std::fmt;
use std::io::Write;

use crate::domain::ports::InputSource;
use crate::error::DrillResult;
use crate::ui::Reporter;

pub use calculator::CalculatorOutcome;
pub use dec2bin::Dec2BinOutcome;

/// The three drills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    Calculator,
    Gravity,
    Dec2Bin,
}

impl Program {
    pub fn name(self) -> &'static str {
        match self {
            Program::Calculator => "calculator",
            Program::Gravity => "gravity",
            Program::Dec2Bin => "dec2bin",
        }
    }

    /// Run the drill to completion, framing its output with start/complete.
    pub fn run<I, W>(self, input: &mut I, reporter: &mut Reporter<W>) -> DrillResult<()>
    where
        I: InputSource,
        W: Write,
    {
        tracing::info!(program = self.name(), "starting drill");
        reporter.start(self.name())?;
        match self {
            Program::Calculator => {
                calculator::run(input, reporter)?;
            }
            Program::Gravity => {
                gravity::run(input, reporter)?;
            }
            Program::Dec2Bin => {
                dec2bin::run(input, reporter)?;
            }
        }
        reporter.complete(self.name())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
