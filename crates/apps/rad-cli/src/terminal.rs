//! Where rendered text goes and where answers come from.

use std::io::{self, IsTerminal, Write};

use indicatif::ProgressBar;
use rad_gateway::Operation;

use crate::error::CliResult;
use crate::progress;
use crate::prompt::{DialoguerPrompter, Prompter};
use crate::render::{self, Status};

/// Output stream plus prompter for one command.
pub struct Terminal {
    out: Box<dyn Write>,
    prompter: Box<dyn Prompter>,
    spinners: bool,
}

impl Terminal {
    /// Terminal writing to `out` and asking `prompter`. Spinners are off.
    pub fn new(out: Box<dyn Write>, prompter: Box<dyn Prompter>) -> Self {
        Self {
            out,
            prompter,
            spinners: false,
        }
    }

    /// The process's standard output with terminal prompts.
    pub fn stdout() -> Self {
        let spinners = io::stdout().is_terminal();
        Self::new(Box::new(io::stdout()), Box::new(DialoguerPrompter::new()))
            .with_spinners(spinners)
    }

    pub fn with_spinners(mut self, spinners: bool) -> Self {
        self.spinners = spinners;
        self
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Write one status line, followed by a blank line if `margin`.
    pub fn status(&mut self, status: Status, message: &str, margin: bool) -> io::Result<()> {
        writeln!(self.out, "{}", render::status_line(status, message))?;
        if margin {
            self.margin()?;
        }
        Ok(())
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.status(Status::Error, message, false)
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        self.status(Status::Warning, message, false)
    }

    pub fn info(&mut self, message: &str) -> io::Result<()> {
        self.status(Status::Info, message, false)
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        self.status(Status::Success, message, false)
    }

    /// Write pre-rendered text followed by a newline.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Write a blank line.
    pub fn margin(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Raw access to the output stream.
    pub fn writer(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    // =========================================================================
    // Input
    // =========================================================================

    pub fn yes_no(&mut self, prompt: &str) -> CliResult<bool> {
        self.out.flush()?;
        self.prompter.yes_no(prompt)
    }

    pub fn value(&mut self, prompt: &str, default: Option<&str>) -> CliResult<String> {
        self.out.flush()?;
        self.prompter.value(prompt, default)
    }

    /// Spinner for a wait that reads no input; hidden unless enabled.
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.spinners {
            progress::spinner(message)
        } else {
            progress::hidden()
        }
    }

    /// Spinner shown while `operation` runs, unless its tool may prompt.
    pub fn spinner_for(&self, operation: Operation, message: &str) -> ProgressBar {
        if operation.may_prompt() {
            progress::hidden()
        } else {
            self.spinner(message)
        }
    }
}

impl std::fmt::Debug for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Terminal")
            .field("spinners", &self.spinners)
            .finish_non_exhaustive()
    }
}
