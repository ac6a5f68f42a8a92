//! Profile records returned by the profile tool.

use serde::{Deserialize, Serialize};

use crate::Extra;

/// A local key pair and configuration bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Opaque profile identifier; also the profile's directory name under
    /// the home directory.
    pub id: String,
    /// URN of the profile's identity, when the tool reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urn: Option<String>,
    /// Fields the CLI does not interpret.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Profile {
    /// Create a profile record with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            urn: None,
            extra: Extra::new(),
        }
    }

    /// Check whether this profile is the same as `other` (by identifier).
    pub fn same_as(&self, other: &Profile) -> bool {
        self.id == other.id
    }
}
