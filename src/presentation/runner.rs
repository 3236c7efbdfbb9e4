//! Drill runner
//!
//! Loads configuration, initializes logging and runs a `Program` against
//! stdin/stdout. `run_with` is the same flow over arbitrary streams.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;

use crate::application::Program;
use crate::config::{self, Config};
use crate::domain::value_objects::{InputMode, OutputFormat};
use crate::error::DrillResult;
use crate::infrastructure::ConsoleReader;
use crate::logging;
use crate::ui::Reporter;

/// Options that come from the command line
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub json: bool,
    pub lenient: bool,
    pub verbose: u8,
}

/// Effective settings for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub input_mode: InputMode,
    pub output_format: OutputFormat,
}

impl Settings {
    /// Merge config with CLI flags; flags only ever switch a setting on.
    pub fn resolve(config: &Config, options: &RunOptions) -> Self {
        Self {
            input_mode: if options.lenient {
                InputMode::Lenient
            } else {
                config.input.mode
            },
            output_format: if options.json {
                OutputFormat::Json
            } else {
                config.output.format
            },
        }
    }
}

/// Run `program` on the process's stdin and stdout.
pub fn run(program: Program, options: &RunOptions) -> anyhow::Result<()> {
    let loaded = config::load(options.config_path.as_deref())
        .context("failed to load configuration")?;

    logging::init(&loaded.config.logging, options.verbose);
    logging::report_config_warnings(&loaded.warnings);
    if let Some(source) = &loaded.source {
        tracing::debug!(path = %source.display(), "loaded config");
    }

    let settings = Settings::resolve(&loaded.config, options);
    tracing::debug!(?settings, "resolved settings");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    run_with(program, settings, stdin, stdout).map_err(|err| {
        let context = if err.is_input_error() {
            format!("{} could not read its input", program)
        } else {
            format!("{} aborted", program)
        };
        anyhow::Error::new(err).context(context)
    })
}

/// Run `program` over the given streams.
pub fn run_with<R, W>(program: Program, settings: Settings, input: R, output: W) -> DrillResult<()>
where
    R: BufRead,
    W: Write,
{
    let mut reader = ConsoleReader::new(input, settings.input_mode);
    let mut reporter = Reporter::new(output, settings.output_format);

    match program.run(&mut reader, &mut reporter) {
        Ok(()) => {
            if reader.has_failed() {
                tracing::info!(program = program.name(), "input failed; defaults were used");
            }
            Ok(())
        }
        Err(err) => {
            tracing::debug!(%err, "run failed");
            reporter.error(program.name(), &err.to_string())?;
            Err(err)
        }
    }
}
