//! Drills - introductory console exercises
//!
//! Three independent single-pass programs:
//! - `calculator`: two operands and an operator, one result line
//! - `gravity`: the height of a ball dropped from a tower, second by second
//! - `dec2bin`: a byte printed as two binary nibbles using only subtraction

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{CalculatorOutcome, Dec2BinOutcome, Program};
pub use config::{Config, ConfigWarning};
pub use domain::ports::InputSource;
pub use domain::services::{
    evaluate, height_at, position_at, power, trajectory, ByteBits, Calculation, CalculationError,
    OutOfRange, Position, Sample, GRAVITY, MAX_SECONDS, PLACE_VALUES,
};
pub use domain::value_objects::{InputMode, Operator, OutputFormat};
pub use error::{DrillError, DrillResult};
pub use infrastructure::ConsoleReader;
pub use presentation::{run, run_with, RunOptions, Settings};
pub use ui::Reporter;
