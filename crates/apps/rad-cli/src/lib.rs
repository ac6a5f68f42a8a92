//! Guided command-line front end for Radicle.
//!
//! The `rad` binary walks users through creating a profile, turning a git
//! repository into a project, publishing it, and running a local node. All
//! protocol work is done by external executables reached through
//! [`rad_gateway`]; this crate sequences prompts, calls, and rendered
//! output.
//!
//! - [`guard`]: preconditions (home directory, active profile, repository)
//! - [`flows`]: the guided multi-step flows
//! - [`render`] and [`terminal`]: formatting and output
//! - [`commands`]: one entry point per subcommand

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod flows;
pub mod guard;
pub mod progress;
pub mod prompt;
pub mod render;
pub mod terminal;
