//! Process execution seam.
//!
//! The gateway never touches `std::process` directly; it goes through a
//! [`ProcessRunner`] so tests can substitute scripted tools.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::{Child, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

/// Captured result of one synchronous tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
    /// Standard output decoded as UTF-8 (lossy).
    pub stdout: String,
}

impl ProcessOutput {
    /// Output of a process that exited with status 0.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
        }
    }

    /// Output of a process that exited with the given status.
    pub fn exited(code: i32, stdout: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: stdout.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// A long-running process to launch in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetachedCommand {
    pub program: String,
    pub args: Vec<String>,
    /// File receiving the process's standard output.
    pub stdout_log: PathBuf,
    /// File receiving the process's standard error.
    pub stderr_log: PathBuf,
}

/// A launched background process.
#[derive(Debug)]
pub struct DetachedProcess {
    pub pid: u32,
    /// Owned child when the process was started by this process.
    pub child: Option<Child>,
}

/// Runs external executables.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `program` to completion and capture its standard output.
    ///
    /// Standard input and standard error stay attached to the terminal so
    /// tools can ask for passphrases.
    async fn run(&self, program: &str, args: &[String]) -> io::Result<ProcessOutput>;

    /// Launch `command` without waiting for it.
    fn spawn_detached(&self, command: &DetachedCommand) -> io::Result<DetachedProcess>;

    /// Limit applied to [`run`](Self::run), if any.
    fn timeout(&self) -> Option<Duration> {
        None
    }
}

/// Runner backed by real operating-system processes.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill synchronous calls that run longer than `timeout`.
    ///
    /// A timed-out call fails with [`io::ErrorKind::TimedOut`].
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String]) -> io::Result<ProcessOutput> {
        debug!(program, ?args, "Running tool");

        let child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()?;

        let output = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, child.wait_with_output())
                .await
                .map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::TimedOut,
                        format!("{} timed out after {}s", program, timeout.as_secs()),
                    )
                })??,
            None => child.wait_with_output().await?,
        };

        debug!(program, code = ?output.status.code(), bytes = output.stdout.len(), "Tool finished");

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }

    fn spawn_detached(&self, command: &DetachedCommand) -> io::Result<DetachedProcess> {
        debug!(program = %command.program, args = ?command.args, "Launching background process");

        let stdout = File::create(&command.stdout_log)?;
        let stderr = File::create(&command.stderr_log)?;

        let mut cmd = std::process::Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr);

        // Own process group so terminal signals aimed at the CLI skip the node.
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        let child = cmd.spawn()?;
        Ok(DetachedProcess {
            pid: child.id(),
            child: Some(child),
        })
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
