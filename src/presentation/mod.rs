//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring config, logging, stdin and stdout into a drill run
//!
//! ## Structure
//!
//! - `cli` - The `drills` command line
//! - `runner` - Resolves settings and runs a `Program`

pub mod cli;
pub mod runner;

pub use cli::{Cli, Commands};
pub use runner::{run, run_with, RunOptions, Settings};
