//! Line-based console I/O for the menu
//!
//! Input and output are generic so a session can be driven from any
//! `BufRead` and written to any `Write`: stdin/stdout in the binary, byte
//! buffers in tests.

use std::io::{BufRead, Write};
use std::str::FromStr;

use super::errors::CliResult;

/// Result of prompting for a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<T> {
    /// The user entered a usable value
    Value(T),
    /// The user entered something that does not parse
    Invalid(String),
    /// Input is exhausted
    Eof,
}

/// Prompting console over a reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Writes `text` followed by a newline
    pub fn say(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes `text` as is and flushes
    pub fn print(&mut self, text: &str) -> CliResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Mutable access to the output, for callers that render lists
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints `prompt` and reads one line, without its line ending.
    ///
    /// Returns `Input::Eof` when input is exhausted.
    pub fn prompt_line(&mut self, prompt: &str) -> CliResult<Input<String>> {
        self.print(prompt)?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(Input::Eof);
        }

        let text = self.line.trim_end_matches(['\n', '\r']);
        Ok(Input::Value(text.to_string()))
    }

    /// Prints `prompt`, reads one line and parses it (surrounding whitespace
    /// ignored).
    pub fn prompt_parse<T: FromStr>(&mut self, prompt: &str) -> CliResult<Input<T>> {
        Ok(match self.prompt_line(prompt)? {
            Input::Value(text) => match text.trim().parse() {
                Ok(value) => Input::Value(value),
                Err(_) => Input::Invalid(text),
            },
            Input::Invalid(text) => Input::Invalid(text),
            Input::Eof => Input::Eof,
        })
    }

    /// Consumes the console, returning the output
    pub fn into_output(self) -> W {
        self.output
    }
}
