//! Configuration module for drills
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DRILLS_*)
//! 3. Config file (`--config`, `$DRILLS_CONFIG`, or `<config_dir>/drills/config.toml`)
//! 4. Built-in defaults (lowest priority)
//!
//! Configuration covers input strictness, output format and logging only.
//! The drills themselves have no tunable behavior.

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, default_config_path, load, load_with_warnings, ConfigWarning,
    LoadedConfig, ENV_CONFIG, ENV_INPUT_MODE, ENV_LOG, ENV_OUTPUT_FORMAT,
};
pub use types::{Config, InputConfig, LoggingConfig, OutputConfig};
