//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports.

pub mod console;

pub use console::ConsoleReader;
