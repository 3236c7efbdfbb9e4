//! JSON output utilities.
//!
//! This module provides:
//! - Shared event types for consistent JSON output (`events`)
//! - A helper for writing NDJSON events

pub mod events;

use serde::Serialize;
use std::io::Write;

use crate::error::DrillResult;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event<T: Serialize>(out: &mut impl Write, event: &T) -> DrillResult<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    Ok(())
}
