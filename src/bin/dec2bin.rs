//! Print a number between 0 and 255 in binary.
//!
//! Takes no arguments; settings come from the drills config file and
//! DRILLS_* environment variables.

use anyhow::Result;

use drills::{Program, RunOptions};

fn main() -> Result<()> {
    drills::run(Program::Dec2Bin, &RunOptions::default())
}
