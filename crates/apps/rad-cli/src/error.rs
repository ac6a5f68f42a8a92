//! CLI error types.

use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that abort a command before or outside a guided flow.
///
/// Failures inside a flow are rendered as status lines instead and surface
/// as [`Outcome::Failed`](crate::flows::Outcome::Failed).
#[derive(Debug, Error)]
pub enum CliError {
    /// The home directory variable is not set.
    #[error("Could not read environment variable {0}.")]
    MissingHome(&'static str),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Reading from the user failed.
    #[error("Failed to read input: {0}")]
    Prompt(String),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// User-facing error with actionable message.
    #[error("{0}")]
    User(String),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a user-facing error.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors: 1
            Self::User(_) | Self::Prompt(_) => 1,
            // Config errors: 3
            Self::MissingHome(_) | Self::Config(_) | Self::Toml(_) => 3,
            // IO errors: 9
            Self::Io(_) => 9,
        }
    }

    /// Follow-up advice printed after the error, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::MissingHome(var) => Some(format!(
                "Set {} to the directory holding your radicle profiles.",
                var
            )),
            Self::Toml(_) => Some("Check the syntax of your cli.toml.".to_string()),
            Self::Config(_) => Some("Check the values in your cli.toml.".to_string()),
            _ => None,
        }
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(e: dialoguer::Error) -> Self {
        Self::Prompt(e.to_string())
    }
}
