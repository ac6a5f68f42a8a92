//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Radicle CLI.
#[derive(Parser, Debug)]
#[command(name = "rad")]
#[command(author = "Radicle Contributors")]
#[command(version)]
#[command(about = "Guided command-line front end for Radicle")]
#[command(
    long_about = "Create a radicle profile, turn git repositories into radicle projects, publish them, and run a local node.\n\nRun 'rad auth' to get started. RAD_HOME must point at your radicle home directory."
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file (default: $RAD_HOME/cli.toml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether debug logging was asked for on the command line.
    pub fn wants_debug(&self) -> bool {
        self.verbose || matches!(self.command, Commands::Auth { verbose: true, .. })
    }
}

/// CLI commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    // =========================================================================
    // Profile Commands
    // =========================================================================
    /// Set up a radicle profile.
    ///
    /// Lists existing profiles, or creates a new profile with a key pair,
    /// SSH key and default identity.
    Auth {
        /// Create a new profile even if one exists.
        #[arg(long)]
        add: bool,

        /// Show debug output and the profile's storage paths.
        #[arg(long)]
        verbose: bool,
    },

    /// Manage profiles.
    Profile {
        /// Create a new profile first.
        #[arg(long)]
        init: bool,

        /// List profiles (the default).
        #[arg(long)]
        list: bool,

        /// Print the storage paths of the active profile.
        #[arg(long)]
        paths: bool,
    },

    // =========================================================================
    // Project Commands
    // =========================================================================
    /// Manage projects.
    Project {
        /// Create a project from the current repository first.
        #[arg(long)]
        init: bool,

        /// List projects (the default).
        #[arg(long)]
        list: bool,
    },

    /// Turn the current git repository into a radicle project.
    Init,

    /// Push the current repository to the radicle remote.
    Publish,

    // =========================================================================
    // Node Commands
    // =========================================================================
    /// Manage the local radicle node.
    ///
    /// Without flags, shows whether the node is running.
    Node {
        /// Start the node in the background.
        #[arg(long, conflicts_with = "stop")]
        setup: bool,

        /// Stop a running node.
        #[arg(long)]
        stop: bool,
    },

    // =========================================================================
    // Utility Commands
    // =========================================================================
    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_auth() {
        let cli = Cli::try_parse_from(["rad", "auth", "--add"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Auth {
                add: true,
                verbose: false
            }
        );
        assert!(!cli.wants_debug());

        let cli = Cli::try_parse_from(["rad", "auth", "--verbose"]).unwrap();
        assert!(cli.wants_debug());
    }

    #[test]
    fn test_top_level_flags() {
        let cli = Cli::try_parse_from(["rad", "-v", "-c", "/tmp/cli.toml", "node"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/cli.toml")));
        assert_eq!(
            cli.command,
            Commands::Node {
                setup: false,
                stop: false
            }
        );
    }

    #[test]
    fn test_node_setup_conflicts_with_stop() {
        assert!(Cli::try_parse_from(["rad", "node", "--setup", "--stop"]).is_err());
    }

    #[test]
    fn test_project_flags() {
        let cli = Cli::try_parse_from(["rad", "project", "--init", "--list"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Project {
                init: true,
                list: true
            }
        );
        assert!(Cli::try_parse_from(["rad", "project", "--bogus"]).is_err());
    }
}
