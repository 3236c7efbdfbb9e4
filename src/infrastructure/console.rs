//! Console reader with input-stream semantics.
//!
//! Values are scanned from the front of the stream: a numeric read takes the
//! longest prefix that forms a number and leaves the rest for the next read,
//! so `5+` yields `5` and then `+`. Numbers never span lines; whitespace
//! (including newlines) between values is skipped. Bytes that are not UTF-8
//! decode to U+FFFD and scan like any other non-numeric character.

use std::io::BufRead;

use crate::domain::ports::InputSource;
use crate::domain::value_objects::InputMode;
use crate::error::{DrillError, DrillResult};

const EXPECT_DOUBLE: &str = "a double value";
const EXPECT_INTEGER: &str = "an integer";
const EXPECT_CHAR: &str = "a character";

/// [`InputSource`] over any buffered reader
pub struct ConsoleReader<R> {
    source: R,
    line: Vec<char>,
    pos: usize,
    mode: InputMode,
    failed: bool,
}

impl<R: BufRead> ConsoleReader<R> {
    pub fn new(source: R, mode: InputMode) -> Self {
        Self {
            source,
            line: Vec::new(),
            pos: 0,
            mode,
            failed: false,
        }
    }

    /// True once a lenient read has failed; later reads return defaults.
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Skip whitespace, pulling new lines as needed.
    ///
    /// Returns `false` at end of input.
    fn skip_whitespace(&mut self) -> DrillResult<bool> {
        loop {
            while let Some(c) = self.line.get(self.pos) {
                if !c.is_whitespace() {
                    return Ok(true);
                }
                self.pos += 1;
            }

            let mut buf = Vec::new();
            if self.source.read_until(b'\n', &mut buf)? == 0 {
                return Ok(false);
            }
            let text = String::from_utf8_lossy(&buf);
            tracing::trace!(line = text.trim_end(), "read input line");
            self.line = text.chars().collect();
            self.pos = 0;
        }
    }

    fn peek(&self) -> Option<char> {
        self.line.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.line.get(self.pos + offset).copied()
    }

    fn take_if(&mut self, accept: impl Fn(char) -> bool, out: &mut String) -> bool {
        match self.peek() {
            Some(c) if accept(c) => {
                out.push(c);
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn take_digits(&mut self, out: &mut String) -> usize {
        let mut count = 0;
        while self.take_if(|c| c.is_ascii_digit(), out) {
            count += 1;
        }
        count
    }

    /// Rest of the current whitespace-delimited token, for error messages.
    fn rest_of_token(&self) -> String {
        self.line[self.pos..]
            .iter()
            .take_while(|c| !c.is_whitespace())
            .collect()
    }

    /// Resolve a failed read according to the input mode.
    fn fail<T: Default>(&mut self, error: DrillError) -> DrillResult<T> {
        match self.mode {
            InputMode::Strict => Err(error),
            InputMode::Lenient => {
                tracing::debug!(%error, "input failed; using defaults from here on");
                self.failed = true;
                Ok(T::default())
            }
        }
    }

    fn scan_f64(&mut self) -> DrillResult<Option<f64>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }

        let start = self.pos;
        let mut text = String::new();
        self.take_if(|c| c == '+' || c == '-', &mut text);
        let mut digits = self.take_digits(&mut text);
        if self.take_if(|c| c == '.', &mut text) {
            digits += self.take_digits(&mut text);
        }
        if digits == 0 {
            self.pos = start;
            return Ok(None);
        }

        // Exponent only counts when at least one digit follows it
        if matches!(self.peek(), Some('e' | 'E')) {
            let signed = matches!(self.peek_at(1), Some('+' | '-'));
            let digit_at = if signed { 2 } else { 1 };
            if self.peek_at(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                self.take_if(|_| true, &mut text);
                if signed {
                    self.take_if(|_| true, &mut text);
                }
                self.take_digits(&mut text);
            }
        }

        // An overflowing literal is a failed read, not infinity
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            _ => {
                self.pos = start;
                Ok(None)
            }
        }
    }

    fn scan_i32(&mut self) -> DrillResult<Option<i32>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }

        let start = self.pos;
        let mut text = String::new();
        let negative = self.take_if(|c| c == '-', &mut text);
        if !negative {
            self.take_if(|c| c == '+', &mut text);
        }

        let mut digits = String::new();
        if self.take_digits(&mut digits) == 0 {
            self.pos = start;
            return Ok(None);
        }

        let magnitude = digits.bytes().fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });
        let value = if negative { -magnitude } else { magnitude };
        let clamped = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
        Ok(Some(i32::try_from(clamped).unwrap_or_default()))
    }

    fn malformed_or_eof(&self, expected: &'static str) -> DrillError {
        if self.peek().is_some() {
            DrillError::MalformedInput {
                expected,
                found: self.rest_of_token(),
            }
        } else {
            DrillError::UnexpectedEof { expected }
        }
    }
}

impl<R: BufRead> InputSource for ConsoleReader<R> {
    fn read_f64(&mut self) -> DrillResult<f64> {
        if self.failed {
            return Ok(0.0);
        }
        match self.scan_f64()? {
            Some(value) => {
                tracing::trace!(value, "read double");
                Ok(value)
            }
            None => {
                let error = self.malformed_or_eof(EXPECT_DOUBLE);
                self.fail(error)
            }
        }
    }

    fn read_i32(&mut self) -> DrillResult<i32> {
        if self.failed {
            return Ok(0);
        }
        match self.scan_i32()? {
            Some(value) => {
                tracing::trace!(value, "read integer");
                Ok(value)
            }
            None => {
                let error = self.malformed_or_eof(EXPECT_INTEGER);
                self.fail(error)
            }
        }
    }

    fn read_char(&mut self) -> DrillResult<char> {
        if self.failed {
            return Ok('\0');
        }
        if !self.skip_whitespace()? {
            return self.fail(DrillError::UnexpectedEof {
                expected: EXPECT_CHAR,
            });
        }
        match self.peek() {
            Some(c) => {
                self.pos += 1;
                tracing::trace!(%c, "read character");
                Ok(c)
            }
            None => self.fail(DrillError::UnexpectedEof {
                expected: EXPECT_CHAR,
            }),
        }
    }
}
