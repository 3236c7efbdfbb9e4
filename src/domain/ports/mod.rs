//! Domain Ports
//!
//! Interface definitions that infrastructure must implement.

pub mod input_source;

pub use input_source::InputSource;
