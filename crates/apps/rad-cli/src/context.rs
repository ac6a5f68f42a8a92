//! Everything a command needs, threaded through explicitly.

use std::path::{Path, PathBuf};

use rad_gateway::Gateway;

use crate::config::CliConfig;
use crate::guard::RadHome;
use crate::terminal::Terminal;

/// State shared by the flows of one command invocation.
#[derive(Debug)]
pub struct Context {
    pub home: RadHome,
    pub config: CliConfig,
    pub gateway: Gateway,
    /// Directory the command was started in.
    pub cwd: PathBuf,
    pub term: Terminal,
}

impl Context {
    /// Build a context whose gateway runs the configured tools.
    pub fn new(home: RadHome, config: CliConfig, cwd: PathBuf, term: Terminal) -> Self {
        let gateway = config.gateway();
        Self::with_gateway(home, config, gateway, cwd, term)
    }

    /// Build a context around an existing gateway.
    pub fn with_gateway(
        home: RadHome,
        config: CliConfig,
        gateway: Gateway,
        cwd: PathBuf,
        term: Terminal,
    ) -> Self {
        Self {
            home,
            config,
            gateway,
            cwd,
            term,
        }
    }

    /// Final path component of the working directory.
    pub fn cwd_name(&self) -> Option<&str> {
        self.cwd.file_name().and_then(|n| n.to_str())
    }

    /// Directory handed to the identity tool when creating a project.
    ///
    /// This is the parent of the working directory, or the working
    /// directory itself at the filesystem root.
    pub fn project_parent(&self) -> &Path {
        self.cwd.parent().unwrap_or(&self.cwd)
    }
}
