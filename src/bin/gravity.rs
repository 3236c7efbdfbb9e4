//! Ball drop height over five seconds.
//!
//! Takes no arguments; settings come from the drills config file and
//! DRILLS_* environment variables.

use anyhow::Result;

use drills::{Program, RunOptions};

fn main() -> Result<()> {
    drills::run(Program::Gravity, &RunOptions::default())
}
