//! Interactive prompt utilities for CLI flows.

use dialoguer::{theme::ColorfulTheme, Input};
use std::io::IsTerminal;

use crate::error::{CliError, CliResult};

/// The two accepted answers of a yes/no prompt. Case-sensitive.
pub const YES: &str = "Y";
pub const NO: &str = "n";

/// Check if we're running in an interactive terminal.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Check a yes/no answer. Only [`YES`] and [`NO`] are accepted.
pub fn validate_yes_no(answer: &str) -> Result<(), String> {
    if answer == YES || answer == NO {
        Ok(())
    } else {
        Err(format!("Please answer {} or {}", YES, NO))
    }
}

/// Source of answers to the questions a flow asks.
pub trait Prompter {
    /// Ask a question that must be answered with exactly `Y` or `n`.
    ///
    /// Any other answer is asked again. There is no default.
    fn yes_no(&mut self, prompt: &str) -> CliResult<bool>;

    /// Ask for a line of text, falling back to `default` on empty input.
    fn value(&mut self, prompt: &str, default: Option<&str>) -> CliResult<String>;
}

/// Prompter reading from the terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }

    fn ensure_interactive(&self) -> CliResult<()> {
        if is_interactive() {
            Ok(())
        } else {
            Err(CliError::user(
                "This command asks questions and needs an interactive terminal.",
            ))
        }
    }
}

impl Prompter for DialoguerPrompter {
    fn yes_no(&mut self, prompt: &str) -> CliResult<bool> {
        self.ensure_interactive()?;
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} [{}/{}]", prompt, YES, NO))
            .validate_with(|input: &String| validate_yes_no(input))
            .interact_text()?;
        Ok(answer == YES)
    }

    fn value(&mut self, prompt: &str, default: Option<&str>) -> CliResult<String> {
        self.ensure_interactive()?;
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_is_case_sensitive() {
        assert!(validate_yes_no("Y").is_ok());
        assert!(validate_yes_no("n").is_ok());
        for answer in ["y", "N", "yes", "", " Y"] {
            assert!(validate_yes_no(answer).is_err(), "{:?}", answer);
        }
    }

    #[test]
    fn test_is_interactive() {
        // Only checks that the terminal check does not panic.
        let _ = is_interactive();
    }
}
