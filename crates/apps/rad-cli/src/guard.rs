//! Preconditions checked before a flow runs.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;

/// Environment variable naming the home directory.
pub const HOME_ENV: &str = "RAD_HOME";

/// Marker file naming the active profile.
pub const ACTIVE_PROFILE_FILE: &str = "active_profile";

/// Marker directory of a git working tree.
pub const VCS_MARKER: &str = ".git";

/// The home directory shared with the external tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadHome {
    path: PathBuf,
}

/// What the home directory says about the active profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileState {
    /// No marker file, or an empty one.
    Missing,
    /// The marker names a profile whose directory does not exist.
    Orphaned(String),
    /// The marker names an existing profile directory.
    Present(String),
}

impl RadHome {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the home directory from [`HOME_ENV`].
    pub fn from_env() -> Option<Self> {
        Self::from_var(std::env::var_os(HOME_ENV))
    }

    /// Interpret a raw variable value. Unset and empty values are absent.
    pub fn from_var(value: Option<OsString>) -> Option<Self> {
        value.filter(|v| !v.is_empty()).map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default configuration file location.
    pub fn config_path(&self) -> PathBuf {
        self.path.join(CONFIG_FILE_NAME)
    }

    /// Resolve the active profile marker.
    ///
    /// Unreadable or absent files count as no profile, never as an error.
    pub fn profile_state(&self) -> ProfileState {
        let marker = self.path.join(ACTIVE_PROFILE_FILE);
        let Ok(contents) = std::fs::read_to_string(&marker) else {
            return ProfileState::Missing;
        };

        let id = contents.trim();
        if id.is_empty() {
            return ProfileState::Missing;
        }
        if self.path.join(id).is_dir() {
            ProfileState::Present(id.to_string())
        } else {
            ProfileState::Orphaned(id.to_string())
        }
    }

    /// True iff the marker exists and names an existing profile directory.
    pub fn has_active_profile(&self) -> bool {
        matches!(self.profile_state(), ProfileState::Present(_))
    }
}

/// True iff `dir` itself contains a `.git` directory. Parents are not searched.
pub fn is_version_controlled(dir: &Path) -> bool {
    dir.join(VCS_MARKER).is_dir()
}
