//! Project identities returned by the identity tool.

use serde::{Deserialize, Serialize};

use crate::Extra;

/// A publishable code repository, addressed by URN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub urn: String,
    pub payload: ProjectPayload,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Namespaced payload of a project document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPayload {
    /// Fields under [`PROJECT_NAMESPACE`](crate::PROJECT_NAMESPACE).
    #[serde(rename = "https://radicle.xyz/link/identities/project/v1")]
    pub subject: ProjectSubject,
    #[serde(flatten)]
    pub extensions: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSubject {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Project {
    /// Create a project record.
    pub fn new(urn: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            urn: urn.into(),
            payload: ProjectPayload {
                subject: ProjectSubject {
                    name: name.into(),
                    default_branch: None,
                    description: None,
                    extra: Extra::new(),
                },
                extensions: Extra::new(),
            },
            extra: Extra::new(),
        }
    }

    /// Set the default branch.
    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.payload.subject.default_branch = Some(branch.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.payload.subject.name
    }

    pub fn default_branch(&self) -> Option<&str> {
        self.payload.subject.default_branch.as_deref()
    }
}
