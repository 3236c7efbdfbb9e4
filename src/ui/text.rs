//! Human-readable prompts and result lines.
//!
//! These strings are the console contract of each drill and must not drift.

use crate::domain::services::{Calculation, Position, Sample};

use super::number::general;

pub const PROMPT_DOUBLE: &str = "Enter a double value: ";
pub const PROMPT_OPERATOR: &str = "Enter one of the following: +, -, *, or /: ";
pub const PROMPT_TOWER_HEIGHT: &str = "Enter the height of the tower in meters: ";
pub const PROMPT_BYTE: &str = "Enter a number between 0 and 255: ";

pub const INVALID_CALCULATION: &str = "Invalid input, please try again";
pub const BYTE_OUT_OF_RANGE: &str = "Error! Please enter a valid number!";

/// `<n1> <op> <n2> is <result>`
pub fn calculation_line(calc: &Calculation) -> String {
    format!(
        "{} {} {} is {}",
        general(calc.lhs),
        calc.op,
        general(calc.rhs),
        general(calc.result)
    )
}

pub fn sample_line(sample: &Sample) -> String {
    match sample.position {
        Position::Grounded => format!("At {} seconds, the ball is on the ground.", sample.seconds),
        Position::Airborne(height) => format!(
            "At {} seconds, the ball is at height: {} meters",
            sample.seconds,
            general(height)
        ),
    }
}
