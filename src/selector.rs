//! Interactive approval of changed files.
//!
//! Selection is a two-state machine. In [`SelectorState::Prompting`] the
//! operator is asked about each file and may answer yes, no, or all. Answering
//! all moves the machine to [`SelectorState::ApproveAll`], which accepts every
//! remaining file without asking and is never left within a run.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// An operator's answer for a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Accept this file
    Yes,
    /// Reject this file
    No,
    /// Accept this file and every remaining one
    All,
}

impl Answer {
    /// Parses operator input (`Y`, `N` or `A`, case-insensitive, surrounding
    /// whitespace ignored).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "Y" => Some(Self::Yes),
            "N" => Some(Self::No),
            "A" => Some(Self::All),
            _ => None,
        }
    }
}

/// Source of answers for the selector.
pub trait Prompt {
    /// Asks whether `file` should be copied.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be obtained.
    fn ask(&mut self, file: &Path) -> Result<Answer>;
}

/// Line-based prompt over any reader/writer pair (stdin/stdout in the CLI).
pub struct LinePrompt<R, W> {
    /// Where answers are read from
    input: R,
    /// Where questions are written to
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Creates a prompt reading answers from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, file: &Path) -> Result<Answer> {
        loop {
            write!(self.output, "{} Copy? Y/N/A(all):", file.display())?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read answer")?;
            if read == 0 {
                anyhow::bail!("Unexpected end of input while prompting for {}", file.display());
            }

            if let Some(answer) = Answer::parse(&line) {
                return Ok(answer);
            }
            writeln!(self.output, "I don't understand that")?;
        }
    }
}

/// Current state of the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorState {
    /// Ask about every file
    #[default]
    Prompting,
    /// Accept every file without asking
    ApproveAll,
}

/// Walks a list of changed files, deciding which ones to keep.
#[derive(Debug, Default)]
pub struct Selector {
    /// Current machine state
    state: SelectorState,
}

impl Selector {
    /// Creates a selector starting in `state`.
    #[must_use]
    pub const fn new(state: SelectorState) -> Self {
        Self { state }
    }

    /// Current machine state.
    #[must_use]
    pub const fn state(&self) -> SelectorState {
        self.state
    }

    /// Decides a single file, advancing the state machine.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails.
    pub fn decide(&mut self, file: &Path, prompt: &mut dyn Prompt) -> Result<bool> {
        if self.state == SelectorState::ApproveAll {
            return Ok(true);
        }

        let accepted = match prompt.ask(file)? {
            Answer::Yes => true,
            Answer::No => false,
            Answer::All => {
                debug!("Approve-all selected");
                self.state = SelectorState::ApproveAll;
                true
            }
        };
        Ok(accepted)
    }

    /// Returns the accepted subset of `files`, preserving order.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails.
    pub fn select(&mut self, files: Vec<PathBuf>, prompt: &mut dyn Prompt) -> Result<Vec<PathBuf>> {
        let mut accepted = Vec::with_capacity(files.len());
        for file in files {
            if self.decide(&file, prompt)? {
                accepted.push(file);
            }
        }
        Ok(accepted)
    }
}
