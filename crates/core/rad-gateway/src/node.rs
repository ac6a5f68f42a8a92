//! Node daemon lifecycle.
//!
//! The node binary is launched detached from the CLI. Its PID and start
//! time are recorded under the home directory so later invocations can
//! query or stop it.

use std::path::{Path, PathBuf};
use std::process::Child;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{GatewayError, GatewayResult};

// =============================================================================
// State Files
// =============================================================================

/// PID file name.
const PID_FILE_NAME: &str = "node.pid";

/// Launch record file name.
const RECORD_FILE_NAME: &str = "node.status";

/// Node standard output log.
pub const STDOUT_LOG_NAME: &str = "node.stdout.log";

/// Node standard error log.
pub const STDERR_LOG_NAME: &str = "node.stderr.log";

/// Interval to poll for process exit.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn pid_file_path(home: &Path) -> PathBuf {
    home.join(PID_FILE_NAME)
}

pub fn record_file_path(home: &Path) -> PathBuf {
    home.join(RECORD_FILE_NAME)
}

/// Write `<pid> <start_time_unix_secs>` to the PID file.
pub fn write_pid_file(path: &Path, pid: u32, started_at: u64) -> GatewayResult<()> {
    std::fs::write(path, format!("{} {}", pid, started_at))?;
    Ok(())
}

/// Read the PID from the PID file.
///
/// Accepts both `123` and `123 1706123456`.
pub fn read_pid_file(path: &Path) -> Option<u32> {
    std::fs::read_to_string(path).ok().and_then(|s| {
        let pid_str = s.split_whitespace().next()?;
        pid_str.parse().ok()
    })
}

/// Read the start time from the PID file.
pub fn read_start_time(path: &Path) -> Option<u64> {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| s.split_whitespace().nth(1)?.parse().ok())
}

/// Remove the PID file; a missing file is not an error.
pub fn remove_pid_file(path: &Path) -> GatewayResult<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

/// Seconds elapsed since `start_time`, or 0 if it lies in the future.
pub fn calculate_uptime(start_time: u64) -> u64 {
    unix_now().saturating_sub(start_time)
}

pub(crate) fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Check if a process with the given PID exists.
#[cfg(unix)]
pub fn is_process_running(pid: u32) -> bool {
    use nix::errno::Errno;
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    let Ok(raw) = i32::try_from(pid) else {
        return false;
    };
    // Signal 0 only checks existence; EPERM means it exists under another user.
    matches!(kill(Pid::from_raw(raw), None), Ok(()) | Err(Errno::EPERM))
}

#[cfg(not(unix))]
pub fn is_process_running(_pid: u32) -> bool {
    true
}

/// Return the PID of a live node recorded under `home`.
///
/// A PID file pointing at a dead process is removed.
pub fn check_existing_node(home: &Path) -> Option<u32> {
    let pid_path = pid_file_path(home);
    if let Some(pid) = read_pid_file(&pid_path) {
        if is_process_running(pid) {
            return Some(pid);
        }
        debug!(pid, "Removing stale node PID file");
        let _ = remove_pid_file(&pid_path);
        let _ = std::fs::remove_file(record_file_path(home));
    }
    None
}

/// Launch parameters recorded next to the PID file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub program: String,
    pub listen: String,
    pub stderr_log: PathBuf,
}

pub fn write_record_file(path: &Path, record: &NodeRecord) -> GatewayResult<()> {
    let json = serde_json::to_string(record)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Returns `None` if the file doesn't exist or can't be parsed.
pub fn read_record_file(path: &Path) -> Option<NodeRecord> {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
}

// =============================================================================
// Handle and Status
// =============================================================================

/// Handle to a node launched by this process.
#[derive(Debug)]
pub struct NodeHandle {
    pid: u32,
    started_at: u64,
    listen: String,
    stderr_log: PathBuf,
    child: Option<Child>,
}

impl NodeHandle {
    pub(crate) fn new(
        pid: u32,
        started_at: u64,
        record: NodeRecord,
        child: Option<Child>,
    ) -> Self {
        Self {
            pid,
            started_at,
            listen: record.listen,
            stderr_log: record.stderr_log,
            child,
        }
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn started_at(&self) -> u64 {
        self.started_at
    }

    pub fn listen(&self) -> &str {
        &self.listen
    }

    pub fn stderr_log(&self) -> &Path {
        &self.stderr_log
    }

    /// Check whether the node is still alive.
    pub fn is_running(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => is_process_running(self.pid),
        }
    }

    /// Kill the node and reap it.
    ///
    /// Only possible for nodes started by this process; others are stopped
    /// through [`stop_node`].
    pub fn kill(&mut self) -> GatewayResult<()> {
        match self.child.as_mut() {
            Some(child) => {
                if child.try_wait()?.is_none() {
                    child.kill()?;
                }
                child.wait()?;
                Ok(())
            }
            None => Err(GatewayError::NodeNotRunning),
        }
    }

    /// Give up ownership of the child process.
    pub fn into_child(mut self) -> Option<Child> {
        self.child.take()
    }
}

/// Observed state of the node recorded under a home directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeStatus {
    pub running: bool,
    pub pid: Option<u32>,
    pub uptime_secs: Option<u64>,
    pub listen: Option<String>,
    pub stderr_log: Option<PathBuf>,
}

impl NodeStatus {
    pub fn stopped() -> Self {
        Self {
            running: false,
            pid: None,
            uptime_secs: None,
            listen: None,
            stderr_log: None,
        }
    }
}

/// Query the node recorded under `home`.
pub fn node_status(home: &Path) -> NodeStatus {
    let Some(pid) = check_existing_node(home) else {
        return NodeStatus::stopped();
    };

    let record = read_record_file(&record_file_path(home));
    NodeStatus {
        running: true,
        pid: Some(pid),
        uptime_secs: read_start_time(&pid_file_path(home)).map(calculate_uptime),
        listen: record.as_ref().map(|r| r.listen.clone()),
        stderr_log: record.map(|r| r.stderr_log),
    }
}

/// Stop the node recorded under `home`.
///
/// Sends SIGTERM and waits up to `timeout` for the process to exit.
/// Returns the PID of the stopped node.
pub async fn stop_node(home: &Path, timeout: Duration) -> GatewayResult<u32> {
    let pid_path = pid_file_path(home);
    let pid = read_pid_file(&pid_path).ok_or(GatewayError::NodeNotRunning)?;

    let recorded = read_record_file(&record_file_path(home))
        .map_or(true, |r| runs_program(pid, &r.program));
    if !is_process_running(pid) || !recorded {
        if !recorded {
            warn!(pid, "Recorded PID now belongs to another program");
        }
        let _ = remove_pid_file(&pid_path);
        let _ = std::fs::remove_file(record_file_path(home));
        return Err(GatewayError::NodeNotRunning);
    }

    info!("Sending SIGTERM to node process (PID {})", pid);
    send_sigterm(pid)?;

    if !wait_for_exit(pid, timeout).await {
        return Err(GatewayError::NodeStopTimeout { pid, timeout });
    }

    remove_pid_file(&pid_path)?;
    let _ = std::fs::remove_file(record_file_path(home));
    info!(pid, "Node stopped");
    Ok(pid)
}

/// Whether the process behind `pid` was started from `program`.
///
/// Compares file names against every word of `/proc/<pid>/cmdline`, so a
/// node started through an interpreter still matches. Without `/proc` the
/// PID is trusted.
fn runs_program(pid: u32, program: &str) -> bool {
    let Ok(cmdline) = std::fs::read(format!("/proc/{}/cmdline", pid)) else {
        return true;
    };
    let wanted = file_name(program.as_bytes());
    cmdline
        .split(|b| *b == 0)
        .any(|word| !word.is_empty() && file_name(word) == wanted)
}

fn file_name(path: &[u8]) -> &[u8] {
    path.rsplit(|b| *b == b'/').next().unwrap_or(path)
}

#[cfg(unix)]
fn send_sigterm(pid: u32) -> GatewayResult<()> {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let raw = i32::try_from(pid).map_err(|_| GatewayError::NodeNotRunning)?;
    kill(Pid::from_raw(raw), Signal::SIGTERM).map_err(|e| {
        GatewayError::Io(std::io::Error::from_raw_os_error(e as i32))
    })
}

#[cfg(not(unix))]
fn send_sigterm(_pid: u32) -> GatewayResult<()> {
    Err(GatewayError::Io(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "stopping the node is only supported on Unix systems",
    )))
}

/// Wait for a process to exit, with timeout.
async fn wait_for_exit(pid: u32, timeout: Duration) -> bool {
    let start = std::time::Instant::now();

    while start.elapsed() < timeout {
        if !is_process_running(pid) {
            return true;
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }

    !is_process_running(pid)
}
