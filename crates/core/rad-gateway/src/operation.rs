//! The external capabilities consumed by the CLI.

use rad_types::Encoding;

/// One request/response capability of an external tool.
///
/// Each operation statically declares the envelope its tool answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateProfile,
    AddSshKey,
    CreateIdentity,
    SetDefaultIdentity,
    ListProfiles,
    GetActiveProfile,
    GetProfilePaths,
    ListProjects,
    CreateProject,
    PublishProject,
    StartNode,
}

impl Operation {
    /// Envelope of the tool's answer, or `None` for pass-through operations.
    pub fn encoding(self) -> Option<Encoding> {
        match self {
            Self::CreateProfile | Self::AddSshKey | Self::ListProfiles | Self::GetActiveProfile => {
                Some(Encoding::Double)
            }
            Self::CreateIdentity
            | Self::SetDefaultIdentity
            | Self::ListProjects
            | Self::CreateProject => Some(Encoding::Single),
            Self::GetProfilePaths | Self::PublishProject | Self::StartNode => None,
        }
    }

    /// Whether the tool may read from the terminal while it runs.
    ///
    /// Tools that touch keys can ask for a passphrase and `git push` can ask
    /// for credentials. Nothing else may draw on the terminal meanwhile.
    pub fn may_prompt(self) -> bool {
        !matches!(self, Self::ListProjects | Self::StartNode)
    }

    /// Short human description, used in log lines.
    pub fn description(self) -> &'static str {
        match self {
            Self::CreateProfile => "create profile",
            Self::AddSshKey => "add SSH key",
            Self::CreateIdentity => "create identity",
            Self::SetDefaultIdentity => "set default identity",
            Self::ListProfiles => "list profiles",
            Self::GetActiveProfile => "get active profile",
            Self::GetProfilePaths => "get profile paths",
            Self::ListProjects => "list projects",
            Self::CreateProject => "create project",
            Self::PublishProject => "publish project",
            Self::StartNode => "start node",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
