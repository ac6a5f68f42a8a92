//! Gateway error types.

use std::time::Duration;

use rad_types::{DecodeError, Encoding};
use thiserror::Error;

use crate::operation::Operation;

/// Result type for gateway operations.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Why an external tool call did not produce a usable value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayError {
    // =========================================================================
    // Tool Errors
    // =========================================================================
    /// The executable could not be launched (missing, not executable).
    #[error("could not run `{program}`: {source}")]
    Spawn {
        operation: Operation,
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The executable ran but exited unsuccessfully.
    #[error("`{program}` {}", exit_description(.code))]
    Exit {
        operation: Operation,
        program: String,
        code: Option<i32>,
    },

    /// The executable did not finish within the configured timeout.
    #[error("`{program}` did not finish within {} seconds", .timeout.as_secs())]
    Timeout {
        operation: Operation,
        program: String,
        timeout: Duration,
    },

    /// The executable ran but its output could not be decoded.
    #[error("`{program}` returned unreadable {encoding}: {source}")]
    Decode {
        operation: Operation,
        program: String,
        encoding: Encoding,
        #[source]
        source: DecodeError,
    },

    /// A request payload could not be built.
    #[error("could not build request payload: {0}")]
    Payload(#[source] DecodeError),

    // =========================================================================
    // Node Errors
    // =========================================================================
    /// A node recorded in the PID file is still alive.
    #[error("node is already running (PID {0})")]
    NodeAlreadyRunning(u32),

    /// No live node is recorded in the PID file.
    #[error("node is not running")]
    NodeNotRunning,

    /// The node did not exit after being signalled.
    #[error("node (PID {pid}) did not stop within {} seconds", .timeout.as_secs())]
    NodeStopTimeout { pid: u32, timeout: Duration },

    /// Filesystem error while managing node state files.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl GatewayError {
    /// The operation that failed, if the error came from a tool call.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Spawn { operation, .. }
            | Self::Exit { operation, .. }
            | Self::Timeout { operation, .. }
            | Self::Decode { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Check whether the tool could not be found on `PATH`.
    pub fn is_tool_missing(&self) -> bool {
        matches!(
            self,
            Self::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_message() {
        let err = GatewayError::Exit {
            operation: Operation::ListProjects,
            program: "rad-identities-dev".into(),
            code: Some(2),
        };
        assert_eq!(
            err.to_string(),
            "`rad-identities-dev` exited with status 2"
        );
        assert_eq!(err.operation(), Some(Operation::ListProjects));
    }

    #[test]
    fn test_signal_exit_message() {
        let err = GatewayError::Exit {
            operation: Operation::CreateProfile,
            program: "rad-profile-dev".into(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by a signal"));
    }

    #[test]
    fn test_tool_missing() {
        let err = GatewayError::Spawn {
            operation: Operation::CreateProfile,
            program: "rad-profile-dev".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.is_tool_missing());
        assert!(!GatewayError::NodeNotRunning.is_tool_missing());
        assert_eq!(GatewayError::NodeNotRunning.operation(), None);
    }
}
