//! CLI Argument Parsing
//!
//! This module defines the `drills` command line using clap. Global flags are
//! inherited by every subcommand. The standalone `calculator`, `gravity` and
//! `dec2bin` binaries take no arguments and skip this module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::Program;

use super::runner::RunOptions;

/// Drills - introductory console exercises
#[derive(Parser, Debug)]
#[command(name = "drills")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Each drill is also installed as a standalone program: calculator, gravity, dec2bin.")]
pub struct Cli {
    /// Emit JSON events instead of prompts and text
    #[arg(long, global = true)]
    pub json: bool,

    /// Treat unreadable input as zero instead of aborting
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Four-function calculator
    Calculator,

    /// Ball drop height over five seconds
    Gravity,

    /// Print 0..=255 as an 8-bit binary number
    #[command(name = "dec2bin")]
    Dec2Bin,
}

impl Commands {
    pub fn program(self) -> Program {
        match self {
            Commands::Calculator => Program::Calculator,
            Commands::Gravity => Program::Gravity,
            Commands::Dec2Bin => Program::Dec2Bin,
        }
    }
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            config_path: self.config.clone(),
            json: self.json,
            lenient: self.lenient,
            verbose: self.verbose,
        }
    }
}
