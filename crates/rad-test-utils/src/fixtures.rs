//! Helper functions for creating test fixtures.
//!
//! The `*_stdout` builders produce exactly what the external tools print:
//! profile-family answers are a JSON string literal wrapping the document,
//! identity/project-family answers are the document itself. Documents are
//! built with `json!` so they do not depend on the types under test.

use std::fs;
use std::path::{Path, PathBuf};

use rad_types::{PERSON_NAMESPACE, PROJECT_NAMESPACE};
use serde_json::{json, Value};
use tempfile::TempDir;

/// Profile document as printed (inside the string envelope) by the profile tool.
pub fn profile_json(id: &str) -> Value {
    json!({ "id": id, "urn": format!("rad:git:{}", id) })
}

fn double_encode(value: &Value) -> String {
    let document = serde_json::to_string(value).unwrap();
    format!("{}\n", serde_json::to_string(&document).unwrap())
}

fn single_encode(value: &Value) -> String {
    format!("{}\n", serde_json::to_string(value).unwrap())
}

/// Output of `rad-profile-dev create|ssh add|get`.
pub fn profile_stdout(id: &str) -> String {
    double_encode(&profile_json(id))
}

/// Output of `rad-profile-dev list`.
pub fn profiles_stdout(ids: &[&str]) -> String {
    let list: Vec<Value> = ids.iter().map(|id| profile_json(id)).collect();
    double_encode(&Value::Array(list))
}

/// Person document as printed by the identity tool.
pub fn person_json(urn: &str, name: &str) -> Value {
    json!({
        "urn": urn,
        "payload": { PERSON_NAMESPACE: { "name": name } },
    })
}

/// Output of `rad-identities-dev person create new|local set`.
pub fn person_stdout(urn: &str, name: &str) -> String {
    single_encode(&person_json(urn, name))
}

/// Project document as printed by the identity tool.
pub fn project_json(urn: &str, name: &str) -> Value {
    json!({
        "urn": urn,
        "payload": {
            PROJECT_NAMESPACE: {
                "name": name,
                "default_branch": "master",
                "description": null,
            }
        },
    })
}

/// Output of `rad-identities-dev project create existing`.
pub fn project_stdout(urn: &str, name: &str) -> String {
    single_encode(&project_json(urn, name))
}

/// Output of `rad-identities-dev project list`.
pub fn projects_stdout(projects: &[(&str, &str)]) -> String {
    let list: Vec<Value> = projects
        .iter()
        .map(|(urn, name)| project_json(urn, name))
        .collect();
    single_encode(&Value::Array(list))
}

// =============================================================================
// Home directories
// =============================================================================

/// A temporary home directory.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Mark `id` active and create its profile directory.
    pub fn with_active_profile(self, id: &str) -> Self {
        fs::write(self.path().join("active_profile"), id).unwrap();
        fs::create_dir_all(self.path().join(id)).unwrap();
        self
    }

    /// Mark `id` active without creating its profile directory.
    pub fn with_orphaned_marker(self, id: &str) -> Self {
        fs::write(self.path().join("active_profile"), id).unwrap();
        self
    }

    /// Write `contents` to `cli.toml`.
    pub fn with_config(self, contents: &str) -> Self {
        fs::write(self.path().join("cli.toml"), contents).unwrap();
        self
    }
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

/// A temporary working directory named `name` (the project basename).
///
/// Returns the guard and the directory path. With `git`, a `.git`
/// directory is created inside.
pub fn work_dir(name: &str, git: bool) -> (TempDir, PathBuf) {
    let root = TempDir::new().unwrap();
    let dir = root.path().join(name);
    fs::create_dir_all(&dir).unwrap();
    if git {
        fs::create_dir(dir.join(".git")).unwrap();
    }
    (root, dir)
}

/// Write an executable shell script `name` into `dir`.
#[cfg(unix)]
pub fn write_fake_tool(dir: &Path, name: &str, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", script)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
