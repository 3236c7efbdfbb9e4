//! InputSource port - abstraction over console input
//!
//! Use cases read typed values through this trait so they can be driven by
//! stdin, an in-memory buffer, or a scripted mock.

use crate::error::DrillResult;

/// Typed reads from a whitespace-delimited input stream
pub trait InputSource {
    /// Read a floating-point value
    fn read_f64(&mut self) -> DrillResult<f64>;

    /// Read a signed integer, saturating at the `i32` bounds
    fn read_i32(&mut self) -> DrillResult<i32>;

    /// Read the next non-whitespace character
    fn read_char(&mut self) -> DrillResult<char>;
}
