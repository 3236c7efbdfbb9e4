//! Gravity use case
//!
//! Prompts for a tower height and reports the ball's height for every second
//! from 0 to 5, switching to the on-the-ground line once it lands.

use std::io::Write;

use crate::domain::ports::InputSource;
use crate::domain::services::{trajectory, Sample};
use crate::error::DrillResult;
use crate::ui::json::events::ResultEvent;
use crate::ui::text;
use crate::ui::Reporter;

pub fn run<I, W>(input: &mut I, reporter: &mut Reporter<W>) -> DrillResult<Vec<Sample>>
where
    I: InputSource,
    W: Write,
{
    reporter.prompt(text::PROMPT_TOWER_HEIGHT)?;
    let tower_height = input.read_f64()?;
    tracing::debug!(tower_height, "tower height read");

    let mut samples = Vec::new();
    for sample in trajectory(tower_height) {
        tracing::trace!(seconds = sample.seconds, grounded = sample.position.is_grounded(), "sample");
        reporter.result(&text::sample_line(&sample), ResultEvent::from(&sample))?;
        samples.push(sample);
    }
    Ok(samples)
}
