//! Domain Services
//!
//! Pure computations behind each drill.
//! These services have no I/O dependencies and are easily testable.

pub mod arithmetic;
pub mod binary;
pub mod trajectory;

pub use arithmetic::{evaluate, Calculation, CalculationError};
pub use binary::{take_place_value, ByteBits, OutOfRange, PLACE_VALUES};
pub use trajectory::{
    height_at, position_at, power, trajectory, Position, Sample, GRAVITY, MAX_SECONDS,
};
