//! Scripted implementation of the `ProcessRunner` trait for testing.
//!
//! Answers tool invocations from a list of canned outputs and records every
//! call so tests can assert on the exact argument vectors.

use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rad_gateway::{DetachedCommand, DetachedProcess, ProcessOutput, ProcessRunner};

/// One recorded call to [`ProcessRunner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Value of the argument following `flag`, if present.
    pub fn arg_after(&self, flag: &str) -> Option<&str> {
        let pos = self.args.iter().position(|a| a == flag)?;
        self.args.get(pos + 1).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
enum Answer {
    Output(ProcessOutput),
    Error(io::ErrorKind),
}

struct Rule {
    program: String,
    prefix: Vec<String>,
    answer: Answer,
}

impl Rule {
    fn matches(&self, program: &str, args: &[String]) -> bool {
        self.program == program && args.starts_with(&self.prefix)
    }
}

#[derive(Default)]
struct ScriptedRunnerInner {
    rules: Vec<Rule>,
    invocations: Vec<Invocation>,
    spawned: Vec<DetachedCommand>,
    spawn_pid: Option<u32>,
    spawn_error: Option<io::ErrorKind>,
    timeout: Option<Duration>,
}

/// A scripted [`ProcessRunner`].
///
/// Rules match on the program name and a prefix of the argument vector.
/// When several rules match a call, the first one answers and is consumed;
/// the last matching rule is never consumed, so a single rule answers every
/// call. Calls with no matching rule fail with [`io::ErrorKind::NotFound`],
/// as if the tool were not installed.
///
/// Clones share the same script and recordings.
#[derive(Clone, Default)]
pub struct ScriptedRunner {
    inner: Arc<Mutex<ScriptedRunnerInner>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `program args...` with `output`.
    pub fn on(self, program: &str, prefix: &[&str], output: ProcessOutput) -> Self {
        self.push(program, prefix, Answer::Output(output));
        self
    }

    /// Answer `program args...` with a successful exit printing `stdout`.
    pub fn on_success(self, program: &str, prefix: &[&str], stdout: impl Into<String>) -> Self {
        self.on(program, prefix, ProcessOutput::success(stdout))
    }

    /// Answer `program args...` with the exit status `code` and no output.
    pub fn on_exit(self, program: &str, prefix: &[&str], code: i32) -> Self {
        self.on(program, prefix, ProcessOutput::exited(code, ""))
    }

    /// Fail `program args...` at launch with `kind`.
    pub fn on_error(self, program: &str, prefix: &[&str], kind: io::ErrorKind) -> Self {
        self.push(program, prefix, Answer::Error(kind));
        self
    }

    /// Report `pid` for detached launches. Defaults to the test process's own
    /// pid, which is always alive.
    pub fn with_spawn_pid(self, pid: u32) -> Self {
        self.inner.lock().unwrap().spawn_pid = Some(pid);
        self
    }

    /// Fail detached launches with `kind`.
    pub fn with_spawn_error(self, kind: io::ErrorKind) -> Self {
        self.inner.lock().unwrap().spawn_error = Some(kind);
        self
    }

    /// Report `timeout` as the configured limit.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.inner.lock().unwrap().timeout = Some(timeout);
        self
    }

    // =========================================================================
    // Assertion Helpers
    // =========================================================================

    /// All synchronous calls, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.inner.lock().unwrap().invocations.clone()
    }

    /// Synchronous calls made to `program`.
    pub fn calls_to(&self, program: &str) -> Vec<Invocation> {
        self.invocations()
            .into_iter()
            .filter(|i| i.program == program)
            .collect()
    }

    /// Argument vectors of all calls, joined with spaces, prefixed by the program.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations()
            .iter()
            .map(|i| {
                let mut line = i.program.clone();
                for arg in &i.args {
                    line.push(' ');
                    line.push_str(arg);
                }
                line
            })
            .collect()
    }

    /// All detached launches, in order.
    pub fn spawned(&self) -> Vec<DetachedCommand> {
        self.inner.lock().unwrap().spawned.clone()
    }

    fn push(&self, program: &str, prefix: &[&str], answer: Answer) {
        self.inner.lock().unwrap().rules.push(Rule {
            program: program.to_string(),
            prefix: prefix.iter().map(|s| s.to_string()).collect(),
            answer,
        });
    }
}

#[async_trait]
impl ProcessRunner for ScriptedRunner {
    async fn run(&self, program: &str, args: &[String]) -> io::Result<ProcessOutput> {
        let mut inner = self.inner.lock().unwrap();
        inner.invocations.push(Invocation {
            program: program.to_string(),
            args: args.to_vec(),
        });

        let matching: Vec<usize> = inner
            .rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.matches(program, args))
            .map(|(idx, _)| idx)
            .collect();

        let answer = match matching.as_slice() {
            [] => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no scripted answer for `{}`", program),
                ))
            }
            [only] => inner.rules[*only].answer.clone(),
            [first, ..] => inner.rules.remove(*first).answer,
        };

        match answer {
            Answer::Output(output) => Ok(output),
            Answer::Error(kind) => Err(io::Error::new(
                kind,
                format!("scripted failure of `{}`", program),
            )),
        }
    }

    fn spawn_detached(&self, command: &DetachedCommand) -> io::Result<DetachedProcess> {
        let mut inner = self.inner.lock().unwrap();
        inner.spawned.push(command.clone());
        if let Some(kind) = inner.spawn_error {
            return Err(io::Error::from(kind));
        }
        Ok(DetachedProcess {
            pid: inner.spawn_pid.unwrap_or_else(std::process::id),
            child: None,
        })
    }

    fn timeout(&self) -> Option<Duration> {
        self.inner.lock().unwrap().timeout
    }
}
