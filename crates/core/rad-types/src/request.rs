//! Payloads passed to the identity tool via `--payload`.
//!
//! Payloads are always produced by the JSON serializer, so user input with
//! quotes or backslashes stays a valid document.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BRANCH;
use crate::error::{DecodeError, DecodeResult};

/// Request payload for `person create new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRequest {
    pub name: String,
}

impl PersonRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Serialize to the `--payload` argument.
    pub fn to_payload(&self) -> DecodeResult<String> {
        serde_json::to_string(self).map_err(DecodeError::Encode)
    }
}

/// Request payload for `project create existing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub name: String,
    pub default_branch: String,
}

impl ProjectRequest {
    /// Create a request using [`DEFAULT_BRANCH`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_branch: DEFAULT_BRANCH.to_string(),
        }
    }

    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = branch.into();
        self
    }

    /// Serialize to the `--payload` argument.
    pub fn to_payload(&self) -> DecodeResult<String> {
        serde_json::to_string(self).map_err(DecodeError::Encode)
    }
}
