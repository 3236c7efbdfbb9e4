//! Output sink shared by all drills.
//!
//! In text mode prompts are printed (without a newline, then flushed) and each
//! result is one human-readable line. In JSON mode prompts are suppressed and
//! each result becomes an NDJSON event framed by `start`/`complete`.

use std::io::Write;

use crate::domain::value_objects::OutputFormat;
use crate::error::DrillResult;

use super::json::events::{CompleteEvent, ErrorEvent, ResultEvent, StartEvent};
use super::json::write_event;

pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn start(&mut self, program: &str) -> DrillResult<()> {
        if self.format == OutputFormat::Json {
            write_event(&mut self.out, &StartEvent::new(program))?;
        }
        Ok(())
    }

    pub fn prompt(&mut self, text: &str) -> DrillResult<()> {
        if self.format == OutputFormat::Text {
            self.out.write_all(text.as_bytes())?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Report one result, as `line` in text mode or `event` in JSON mode.
    pub fn result(&mut self, line: &str, event: ResultEvent) -> DrillResult<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", line)?,
            OutputFormat::Json => write_event(&mut self.out, &event)?,
        }
        Ok(())
    }

    pub fn complete(&mut self, program: &str) -> DrillResult<()> {
        if self.format == OutputFormat::Json {
            write_event(&mut self.out, &CompleteEvent::success(program))?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Report an aborted run. Text mode leaves this to stderr.
    pub fn error(&mut self, program: &str, message: &str) -> DrillResult<()> {
        if self.format == OutputFormat::Json {
            write_event(&mut self.out, &ErrorEvent::new(program, message))?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
