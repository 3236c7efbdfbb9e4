//! Ball drop from a tower under constant gravity.
//!
//! Heights are sampled once per second from `t = 0` to [`MAX_SECONDS`]
//! inclusive. A sample at or below zero is reported as grounded; sampling
//! does not stop once the ball lands.

/// Gravitational acceleration in m/s^2
pub const GRAVITY: f64 = 9.8;

/// Last second that is sampled
pub const MAX_SECONDS: u32 = 5;

/// Where the ball is at a given second
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Still falling, at this height in meters
    Airborne(f64),
    /// Height reached or passed zero
    Grounded,
}

impl Position {
    pub fn is_grounded(&self) -> bool {
        matches!(self, Position::Grounded)
    }
}

/// One per-second sample of the drop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub seconds: u32,
    pub position: Position,
}

/// `base` raised to `exponent` by repeated multiplication.
pub fn power(base: f64, exponent: u32) -> f64 {
    let mut result = 1.0;
    for _ in 0..exponent {
        result *= base;
    }
    result
}

/// Height above ground after `seconds` of free fall from `tower_height`.
///
/// May be negative; see [`position_at`] for the clamped view.
pub fn height_at(tower_height: f64, seconds: f64) -> f64 {
    tower_height - GRAVITY * power(seconds, 2) / 2.0
}

pub fn position_at(tower_height: f64, seconds: u32) -> Position {
    let height = height_at(tower_height, f64::from(seconds));
    if height <= 0.0 {
        Position::Grounded
    } else {
        Position::Airborne(height)
    }
}

/// Every sample from `t = 0` through `t = MAX_SECONDS`, in order.
pub fn trajectory(tower_height: f64) -> impl Iterator<Item = Sample> {
    (0..=MAX_SECONDS).map(move |seconds| Sample {
        seconds,
        position: position_at(tower_height, seconds),
    })
}
