//! CLI configuration.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use rad_gateway::{Gateway, SystemRunner, Tools};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// File name of the configuration file inside the home directory.
pub const CONFIG_FILE_NAME: &str = "cli.toml";

/// Expand environment variables in a string.
/// Supports `${VAR_NAME}` syntax; unknown variables are left as written.
fn expand_env_vars(input: &str) -> String {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN
        .get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid pattern"));
    re.replace_all(input, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
    })
    .to_string()
}

/// CLI configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// External executables.
    pub tools: ToolsConfig,
    /// Node daemon settings.
    pub node: NodeConfig,
    /// Tool invocation settings.
    pub gateway: GatewayConfig,
    /// Git settings.
    pub git: GitConfig,
}

impl CliConfig {
    /// Load configuration from a file.
    ///
    /// A missing file yields the defaults. Environment variables in `${VAR}`
    /// format are expanded in tool paths.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;
        config.tools.expand();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        for (key, value) in self.tools.entries() {
            if value.trim().is_empty() {
                return Err(CliError::config(format!("tools.{} is empty", key)));
            }
        }
        if self.node.listen.parse::<SocketAddr>().is_err() {
            return Err(CliError::config(format!(
                "node.listen is not a socket address: {:?}",
                self.node.listen
            )));
        }
        Ok(())
    }

    /// Build a gateway that runs the configured tools.
    pub fn gateway(&self) -> Gateway {
        let runner = SystemRunner::new().with_timeout(self.gateway.timeout());
        Gateway::new(Arc::new(runner), self.tools.to_tools())
    }
}

/// Executable names or paths for the external tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub profile: String,
    pub identities: String,
    pub git: String,
    pub node: String,
}

impl ToolsConfig {
    fn expand(&mut self) {
        for value in [
            &mut self.profile,
            &mut self.identities,
            &mut self.git,
            &mut self.node,
        ] {
            *value = expand_env_vars(value);
        }
    }

    fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("profile", self.profile.as_str()),
            ("identities", self.identities.as_str()),
            ("git", self.git.as_str()),
            ("node", self.node.as_str()),
        ]
    }

    pub fn to_tools(&self) -> Tools {
        Tools {
            profile: self.profile.clone(),
            identities: self.identities.clone(),
            git: self.git.clone(),
            node: self.node.clone(),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        let tools = Tools::default();
        Self {
            profile: tools.profile,
            identities: tools.identities,
            git: tools.git,
            node: tools.node,
        }
    }
}

/// Node daemon configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Protocol listen address passed to the daemon.
    pub listen: String,
    /// Seconds to wait for the daemon to exit after SIGTERM.
    pub stop_timeout_secs: u64,
}

impl NodeConfig {
    pub fn stop_timeout(&self) -> Duration {
        Duration::from_secs(self.stop_timeout_secs)
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8778".to_string(),
            stop_timeout_secs: 5,
        }
    }
}

/// Tool invocation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Kill tool calls running longer than this. Unset waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl GatewayConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Git configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Remote pushed to by `rad publish`.
    pub remote: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: "rad".to_string(),
        }
    }
}
