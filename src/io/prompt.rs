//! Validated interactive input
//!
//! [`input_until`] keeps asking an [`InputSource`] for a value until a
//! predicate accepts it. The source is a trait so tests can script answers.

use crate::error::{Result, SlugError};
use std::io::{self, BufRead, Write};

/// Something that can be asked for a line of input
pub trait InputSource {
    /// Show `prompt` and read one line. `Ok(None)` means end of input.
    fn request(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Prompt on a writer, answer from a reader
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, read from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputSource for LinePrompt<R, W> {
    fn request(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Request values from `source` until `accept` holds, returning the first
/// accepted value.
pub fn input_until<S, F>(source: &mut S, prompt: &str, mut accept: F) -> Result<String>
where
    S: InputSource + ?Sized,
    F: FnMut(&str) -> bool,
{
    loop {
        let value = source.request(prompt)?.ok_or(SlugError::InputClosed)?;
        if accept(&value) {
            return Ok(value);
        }
        log::debug!("rejected input {value:?}");
    }
}
