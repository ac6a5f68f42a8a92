//! Guided multi-step flows.
//!
//! A flow is a straight sequence of prompts, gateway calls and rendered
//! lines. When a gateway call fails the flow renders exactly one status
//! line for it and stops with [`Outcome::Failed`]; nothing downstream ever
//! sees a missing value. Only terminal I/O and prompt errors escape as
//! [`CliError`](crate::error::CliError).

pub mod node;
pub mod profile;
pub mod project;
pub mod publish;

use rad_gateway::GatewayError;
use tracing::debug;

use crate::error::CliResult;
use crate::terminal::Terminal;

/// How a flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every step ran.
    Completed,
    /// The user declined to go on.
    Cancelled,
    /// A step failed and its status line has been rendered.
    Failed,
}

impl Outcome {
    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }

    /// Process exit code for a command ending with this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Completed | Self::Cancelled => 0,
            Self::Failed => 1,
        }
    }
}

/// One-line description of a failed gateway call.
pub fn failure_message(message: &str, err: &GatewayError) -> String {
    format!("{} ({})", message, err)
}

/// Render the failure of a gateway call and end the flow.
pub(crate) fn fail(term: &mut Terminal, message: &str, err: &GatewayError) -> CliResult<Outcome> {
    debug!(error = ?err, "Flow step failed");
    term.error(&failure_message(message, err))?;
    Ok(Outcome::Failed)
}
