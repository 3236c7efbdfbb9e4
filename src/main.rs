//! Drills CLI
//!
//! Usage: drills [OPTIONS] <COMMAND>
//!
//! Commands:
//!   calculator  Four-function calculator
//!   gravity     Ball drop height over five seconds
//!   dec2bin     Print 0..=255 as an 8-bit binary number

use anyhow::Result;
use clap::Parser;

use drills::presentation::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    drills::run(cli.command.program(), &cli.run_options())
}
