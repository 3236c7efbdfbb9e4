//! Decimal to 8-bit binary by threshold subtraction.
//!
//! Bits are extracted with comparisons and subtraction only: no shifts, masks
//! or radix formatting.

use std::fmt;

use thiserror::Error;

/// Place values of an 8-bit byte, most significant first
pub const PLACE_VALUES: [i32; 8] = [128, 64, 32, 16, 8, 4, 2, 1];

/// Value outside the range an 8-bit byte can represent
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{0} is not between 0 and 255")]
pub struct OutOfRange(pub i32);

/// One step of the extraction.
///
/// Returns whether the bit for `place` is set and the remainder left over.
pub fn take_place_value(remaining: i32, place: i32) -> (bool, i32) {
    if remaining >= place {
        (true, remaining - place)
    } else {
        (false, remaining)
    }
}

/// The eight bits of a value in `0..=255`, most significant first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteBits([bool; 8]);

impl ByteBits {
    pub fn from_value(value: i32) -> Result<Self, OutOfRange> {
        if !(0..=255).contains(&value) {
            return Err(OutOfRange(value));
        }

        let mut bits = [false; 8];
        let mut remaining = value;
        for (bit, place) in bits.iter_mut().zip(PLACE_VALUES) {
            let (set, rest) = take_place_value(remaining, place);
            *bit = set;
            remaining = rest;
        }
        Ok(Self(bits))
    }

    /// Sum of the place values whose bit is set
    pub fn value(&self) -> i32 {
        self.0
            .iter()
            .zip(PLACE_VALUES)
            .filter(|(set, _)| **set)
            .map(|(_, place)| place)
            .sum()
    }
}

impl fmt::Display for ByteBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, set) in self.0.iter().enumerate() {
            if index == 4 {
                f.write_str(" ")?;
            }
            f.write_str(if *set { "1" } else { "0" })?;
        }
        Ok(())
    }
}
