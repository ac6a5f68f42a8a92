//! Bridge between the `rad` CLI and the external Radicle executables.
//!
//! Every capability the CLI consumes is a child process: the profile tool,
//! the identity tool, `git`, and the node daemon. [`Gateway`] exposes one
//! async method per capability, builds the argument vectors, checks the
//! exit status, and decodes standard output with the envelope its tool
//! family prints.
//!
//! Process execution goes through the [`ProcessRunner`] trait so the CLI
//! can be exercised against scripted tools.
//!
//! The [`node`] module keeps track of the background daemon with a PID file
//! under the home directory.

pub mod error;
pub mod gateway;
pub mod node;
pub mod operation;
pub mod runner;

pub use error::{GatewayError, GatewayResult};
pub use gateway::{Gateway, Tools};
pub use node::{node_status, stop_node, NodeHandle, NodeStatus};
pub use operation::Operation;
pub use runner::{DetachedCommand, DetachedProcess, ProcessOutput, ProcessRunner, SystemRunner};
