//! Common test utilities for drills CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated HOME/XDG_CONFIG_HOME so no user config leaks in
//! - `TestResult`: captured exit status, stdout and stderr

#![allow(dead_code)]

pub mod env;

pub use env::*;
