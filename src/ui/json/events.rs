//! Shared JSON event types for consistent CLI output.
//!
//! Every run emits `start`, then its result events, then `complete`.

use serde::Serialize;

use crate::domain::services::{ByteBits, Calculation, CalculationError, Position, Sample};
use crate::domain::value_objects::Operator;
use crate::ui::text;

/// Event emitted when a drill starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub program: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(program: &'a str) -> Self {
        Self {
            event: "start",
            program,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a drill finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub program: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(program: &'a str) -> Self {
        Self {
            event: "complete",
            program,
            success: true,
        }
    }
}

/// Event emitted when a drill aborts on unreadable input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub program: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(program: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            program,
            message: message.into(),
        }
    }
}

/// Result events, one per human-readable output line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ResultEvent {
    Calculation {
        lhs: f64,
        op: Operator,
        rhs: f64,
        result: f64,
        display: String,
    },
    InvalidInput {
        reason: &'static str,
        op: String,
    },
    Height {
        seconds: u32,
        height: f64,
    },
    Landed {
        seconds: u32,
    },
    Binary {
        value: i32,
        bits: String,
    },
    OutOfRange {
        value: i32,
    },
}

impl From<&Calculation> for ResultEvent {
    fn from(calc: &Calculation) -> Self {
        ResultEvent::Calculation {
            lhs: calc.lhs,
            op: calc.op,
            rhs: calc.rhs,
            result: calc.result,
            display: text::calculation_line(calc),
        }
    }
}

impl ResultEvent {
    pub fn invalid_input(error: &CalculationError, symbol: char) -> Self {
        ResultEvent::InvalidInput {
            reason: error.reason(),
            op: symbol.to_string(),
        }
    }

    pub fn binary(bits: &ByteBits) -> Self {
        ResultEvent::Binary {
            value: bits.value(),
            bits: bits.to_string(),
        }
    }
}

impl From<&Sample> for ResultEvent {
    fn from(sample: &Sample) -> Self {
        match sample.position {
            Position::Airborne(height) => ResultEvent::Height {
                seconds: sample.seconds,
                height,
            },
            Position::Grounded => ResultEvent::Landed {
                seconds: sample.seconds,
            },
        }
    }
}
