//! Overwrite confirmation strategies.
//!
//! The copier never talks to a terminal directly. When the target name is
//! already taken it asks a [`Confirm`] implementation, which is either the
//! interactive [`Prompt`] or anything the caller injects (closures implement
//! the trait, which keeps the copier testable without standard input).

use std::io::{self, BufRead, Write};
use std::path::Path;

/// Text shown before reading an overwrite answer.
pub const OVERWRITE_PROMPT: &str = "Warning: File with such a name already exists in the destination folder, permission to overwrite? Enter Y or N: ";

/// Decides whether an existing target may be overwritten.
pub trait Confirm {
    /// Return `Ok(true)` to overwrite `target`, `Ok(false)` to skip it.
    fn confirm_overwrite(&mut self, target: &Path) -> io::Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&Path) -> io::Result<bool>,
{
    fn confirm_overwrite(&mut self, target: &Path) -> io::Result<bool> {
        self(target)
    }
}

/// Interpret a single answer character.
///
/// Only `N` and `n` decline; every other character accepts.
#[inline]
pub fn accepts(answer: char) -> bool {
    !matches!(answer, 'N' | 'n')
}

/// Interactive prompt reading one answer per collision.
///
/// The prompt text goes to `output`; the answer is the first
/// non-whitespace character read from `input`. Blank lines are skipped and
/// end of input declines.
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Create a prompt over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self) -> io::Result<Option<char>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if let Some(c) = line.chars().find(|c| !c.is_whitespace()) {
                return Ok(Some(c));
            }
        }
    }
}

impl Prompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on standard output, answer from standard input.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn confirm_overwrite(&mut self, _target: &Path) -> io::Result<bool> {
        self.output.write_all(OVERWRITE_PROMPT.as_bytes())?;
        self.output.flush()?;
        Ok(self.read_answer()?.is_some_and(accepts))
    }
}
