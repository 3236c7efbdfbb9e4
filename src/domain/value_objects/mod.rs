//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod input_mode;
mod operator;
mod output_format;

pub use input_mode::InputMode;
pub use operator::Operator;
pub use output_format::OutputFormat;
