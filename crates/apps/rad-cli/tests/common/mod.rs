//! Shared harness for the CLI integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rad_cli::config::CliConfig;
use rad_cli::context::Context;
use rad_cli::error::{CliError, CliResult};
use rad_cli::guard::RadHome;
use rad_cli::prompt::{validate_yes_no, Prompter, YES};
use rad_cli::terminal::Terminal;
use rad_gateway::{Gateway, Tools};
use rad_test_utils::{work_dir, ScriptedRunner, SharedBuffer, TestHome};
use tempfile::TempDir;

/// Answers prompts from a queue and records every question asked.
///
/// Yes/no answers other than `Y` and `n` are consumed and the question is
/// asked again, like the terminal prompter does.
#[derive(Clone, Default)]
pub struct ScriptedPrompter {
    answers: Arc<Mutex<VecDeque<String>>>,
    asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.iter().map(|a| a.to_string()).collect())),
            asked: Arc::default(),
        }
    }

    /// Every question asked, including repeats.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    fn next(&self, prompt: &str) -> CliResult<String> {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| CliError::Prompt(format!("no scripted answer for {:?}", prompt)))
    }
}

impl Prompter for ScriptedPrompter {
    fn yes_no(&mut self, prompt: &str) -> CliResult<bool> {
        loop {
            let answer = self.next(prompt)?;
            if validate_yes_no(&answer).is_ok() {
                return Ok(answer == YES);
            }
        }
    }

    fn value(&mut self, prompt: &str, default: Option<&str>) -> CliResult<String> {
        let answer = self.next(prompt)?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }
}

/// A context wired to scripted tools, scripted answers, and a buffer.
pub struct Harness {
    pub ctx: Context,
    pub runner: ScriptedRunner,
    pub prompter: ScriptedPrompter,
    pub out: SharedBuffer,
    pub home: TestHome,
    pub cwd: PathBuf,
    _work: TempDir,
}

impl Harness {
    /// Working directory named `project`, not a git repository.
    pub fn new(runner: ScriptedRunner, answers: &[&str]) -> Self {
        Self::build(runner, answers, TestHome::new(), "project", false)
    }

    /// Working directory named `name` containing `.git`.
    pub fn in_repo(runner: ScriptedRunner, answers: &[&str], name: &str) -> Self {
        Self::build(runner, answers, TestHome::new(), name, true)
    }

    /// Use `home` instead of an empty home directory.
    pub fn with_home(runner: ScriptedRunner, answers: &[&str], home: TestHome) -> Self {
        Self::build(runner, answers, home, "project", false)
    }

    fn build(
        runner: ScriptedRunner,
        answers: &[&str],
        home: TestHome,
        name: &str,
        git: bool,
    ) -> Self {
        colored::control::set_override(false);

        let (work, cwd) = work_dir(name, git);
        let out = SharedBuffer::new();
        let prompter = ScriptedPrompter::new(answers);
        let term = Terminal::new(Box::new(out.clone()), Box::new(prompter.clone()));
        let gateway = Gateway::new(Arc::new(runner.clone()), Tools::default());
        let ctx = Context::with_gateway(
            RadHome::new(home.path()),
            CliConfig::default(),
            gateway,
            cwd.clone(),
            term,
        );

        Self {
            ctx,
            runner,
            prompter,
            out,
            home,
            cwd,
            _work: work,
        }
    }

    /// Rendered lines, blank lines dropped.
    pub fn lines(&self) -> Vec<String> {
        self.out.lines()
    }

    /// Number of error status lines.
    pub fn error_lines(&self) -> usize {
        self.lines().iter().filter(|l| l.starts_with("x ")).count()
    }
}
