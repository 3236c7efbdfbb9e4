//! Dec2Bin use case
//!
//! Prompts for an integer and prints it as two nibbles of binary, or the
//! error line when it does not fit in a byte.

use std::io::Write;

use crate::domain::ports::InputSource;
use crate::domain::services::{ByteBits, OutOfRange};
use crate::error::DrillResult;
use crate::ui::json::events::ResultEvent;
use crate::ui::text;
use crate::ui::Reporter;

/// What a dec2bin run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dec2BinOutcome {
    Converted(ByteBits),
    OutOfRange(i32),
}

pub fn run<I, W>(input: &mut I, reporter: &mut Reporter<W>) -> DrillResult<Dec2BinOutcome>
where
    I: InputSource,
    W: Write,
{
    reporter.prompt(text::PROMPT_BYTE)?;
    let value = input.read_i32()?;
    tracing::debug!(value, "value read");

    match ByteBits::from_value(value) {
        Ok(bits) => {
            reporter.result(&bits.to_string(), ResultEvent::binary(&bits))?;
            Ok(Dec2BinOutcome::Converted(bits))
        }
        Err(OutOfRange(value)) => {
            tracing::debug!(value, "value out of range");
            reporter.result(text::BYTE_OUT_OF_RANGE, ResultEvent::OutOfRange { value })?;
            Ok(Dec2BinOutcome::OutOfRange(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{InputMode, OutputFormat};
    use crate::infrastructure::ConsoleReader;

    fn run_text(input: &str) -> (Dec2BinOutcome, String) {
        let mut reader = ConsoleReader::new(input.as_bytes(), InputMode::Strict);
        let mut reporter = Reporter::new(Vec::new(), OutputFormat::Text);
        let outcome = run(&mut reader, &mut reporter).unwrap();
        (outcome, String::from_utf8(reporter.into_inner()).unwrap())
    }

    #[test]
    fn converts_five() {
        let (outcome, out) = run_text("5\n");
        assert_eq!(out, "Enter a number between 0 and 255: 0000 0101\n");
        assert!(matches!(outcome, Dec2BinOutcome::Converted(_)));
    }

    #[test]
    fn rejects_out_of_range() {
        for input in ["256", "-1", "99999999999"] {
            let (outcome, out) = run_text(input);
            assert_eq!(
                out,
                "Enter a number between 0 and 255: Error! Please enter a valid number!\n"
            );
            assert!(matches!(outcome, Dec2BinOutcome::OutOfRange(_)));
        }
    }

    #[test]
    fn lenient_garbage_reads_as_zero() {
        let mut reader = ConsoleReader::new("abc".as_bytes(), InputMode::Lenient);
        let mut reporter = Reporter::new(Vec::new(), OutputFormat::Text);
        run(&mut reader, &mut reporter).unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(out.ends_with("0000 0000\n"));
    }
}
