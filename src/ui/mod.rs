//! Console presentation: number formatting, text lines, JSON events and the
//! `Reporter` that writes them.

pub mod json;
pub mod number;
pub mod output;
pub mod text;

pub use output::Reporter;
