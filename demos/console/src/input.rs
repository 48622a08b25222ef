//! Validating parsers and the line-based prompt reader.
//!
//! Nothing read from the terminal reaches the dispatcher until it has passed
//! [`parse_int`] or [`parse_location`]; the prompt loop re-asks on `Err`.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tx_core::Location;

/// Why a line of user input was refused.  The `Display` text is what the
/// user sees before being asked again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid number. Please re-enter.")]
    InvalidNumber(String),

    #[error("Invalid input. Please enter a single character A-F. Re-enter:")]
    NotSingleChar(String),

    #[error("Invalid input. Please enter a point between A and F. Re-enter:")]
    OutOfRange(char),
}

/// A signed integer, surrounding whitespace ignored.
pub fn parse_int(s: &str) -> Result<i64, InputError> {
    let s = s.trim();
    s.parse().map_err(|_| InputError::InvalidNumber(s.to_owned()))
}

/// Exactly one letter `A`-`F`, either case, surrounding whitespace ignored.
pub fn parse_location(s: &str) -> Result<Location, InputError> {
    let s = s.trim();
    let mut chars = s.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(InputError::NotSingleChar(s.to_owned()));
    };
    Location::try_from(c).map_err(|_| InputError::OutOfRange(c))
}

// ── Prompter ──────────────────────────────────────────────────────────────────

/// Writes prompts to `W` and reads one answer per line from `R`.
pub struct Prompter<R, W> {
    input:  R,
    output: W,
    line:   String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, line: String::new() }
    }

    /// Where prompts and messages go.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and parse the answer, re-asking until `parse` accepts
    /// it.  `Ok(None)` means the input ended first.
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        parse:  impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<Option<T>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            match parse(&self.line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
