//! One method per external capability.

use std::io;
use std::path::Path;
use std::sync::Arc;

use rad_types::{Encoding, Person, PersonRequest, Profile, Project, ProjectRequest};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::{GatewayError, GatewayResult};
use crate::node::{
    check_existing_node, pid_file_path, record_file_path, remove_pid_file, unix_now, write_pid_file,
    write_record_file, NodeHandle, NodeRecord, STDERR_LOG_NAME, STDOUT_LOG_NAME,
};
use crate::operation::Operation;
use crate::runner::{DetachedCommand, ProcessOutput, ProcessRunner, SystemRunner};

/// Executable names for each external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tools {
    /// Profile management tool.
    pub profile: String,
    /// Identity and project tool.
    pub identities: String,
    /// Version control.
    pub git: String,
    /// Network daemon.
    pub node: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            profile: "rad-profile-dev".to_string(),
            identities: "rad-identities-dev".to_string(),
            git: "git".to_string(),
            node: "linkd".to_string(),
        }
    }
}

/// Invokes the external tools and decodes their answers.
#[derive(Clone)]
pub struct Gateway {
    runner: Arc<dyn ProcessRunner>,
    tools: Tools,
}

impl Gateway {
    pub fn new(runner: Arc<dyn ProcessRunner>, tools: Tools) -> Self {
        Self { runner, tools }
    }

    /// Gateway running real processes with the default tool names.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemRunner::new()), Tools::default())
    }

    pub fn tools(&self) -> &Tools {
        &self.tools
    }

    // =========================================================================
    // Profiles
    // =========================================================================

    pub async fn create_profile(&self) -> GatewayResult<Profile> {
        self.profile_call(Operation::CreateProfile, &["create"]).await
    }

    pub async fn add_ssh_key(&self) -> GatewayResult<Profile> {
        self.profile_call(Operation::AddSshKey, &["ssh", "add"]).await
    }

    pub async fn list_profiles(&self) -> GatewayResult<Vec<Profile>> {
        self.profile_call(Operation::ListProfiles, &["list"]).await
    }

    pub async fn active_profile(&self) -> GatewayResult<Profile> {
        self.profile_call(Operation::GetActiveProfile, &["get"]).await
    }

    /// Storage paths of the active profile, as printed by the tool.
    pub async fn profile_paths(&self) -> GatewayResult<String> {
        let program = &self.tools.profile;
        let output = self
            .invoke(Operation::GetProfilePaths, program, args(&["paths"]))
            .await?;
        Ok(output.stdout)
    }

    // =========================================================================
    // Identities
    // =========================================================================

    pub async fn create_identity(&self, name: &str) -> GatewayResult<Person> {
        let payload = PersonRequest::new(name)
            .to_payload()
            .map_err(GatewayError::Payload)?;
        let mut argv = args(&["person", "create", "new", "--payload"]);
        argv.push(payload);
        self.identities_call(Operation::CreateIdentity, argv).await
    }

    pub async fn set_default_identity(&self, urn: &str) -> GatewayResult<Person> {
        let mut argv = args(&["local", "set", "--urn"]);
        argv.push(urn.to_string());
        self.identities_call(Operation::SetDefaultIdentity, argv)
            .await
    }

    // =========================================================================
    // Projects
    // =========================================================================

    pub async fn list_projects(&self) -> GatewayResult<Vec<Project>> {
        self.identities_call(Operation::ListProjects, args(&["project", "list"]))
            .await
    }

    /// Register the repository under `path` as a project.
    pub async fn create_project(
        &self,
        path: &Path,
        request: &ProjectRequest,
    ) -> GatewayResult<Project> {
        let payload = request.to_payload().map_err(GatewayError::Payload)?;
        let mut argv = args(&["project", "create", "existing", "--path"]);
        argv.push(path.to_string_lossy().into_owned());
        argv.push("--payload".to_string());
        argv.push(payload);
        self.identities_call(Operation::CreateProject, argv).await
    }

    /// Push the current repository to `remote`.
    ///
    /// The outcome of the push itself is only logged.
    pub async fn publish_project(&self, remote: &str) {
        let program = &self.tools.git;
        match self
            .invoke(Operation::PublishProject, program, args(&["push", remote]))
            .await
        {
            Ok(_) => debug!(remote, "Push finished"),
            Err(e) => warn!(error = %e, remote, "Push failed"),
        }
    }

    // =========================================================================
    // Node
    // =========================================================================

    /// Launch the node daemon for `home`, listening on `listen`.
    ///
    /// Returns as soon as the process is spawned.
    pub fn start_node(&self, home: &Path, listen: &str) -> GatewayResult<NodeHandle> {
        if let Some(pid) = check_existing_node(home) {
            return Err(GatewayError::NodeAlreadyRunning(pid));
        }
        std::fs::create_dir_all(home)?;

        let program = self.tools.node.clone();
        let command = DetachedCommand {
            program: program.clone(),
            args: vec![
                "--rad-home".to_string(),
                home.to_string_lossy().into_owned(),
                "--protocol-listen".to_string(),
                listen.to_string(),
            ],
            stdout_log: home.join(STDOUT_LOG_NAME),
            stderr_log: home.join(STDERR_LOG_NAME),
        };

        let process = self
            .runner
            .spawn_detached(&command)
            .map_err(|source| GatewayError::Spawn {
                operation: Operation::StartNode,
                program: program.clone(),
                source,
            })?;

        let started_at = unix_now();
        let record = NodeRecord {
            program,
            listen: listen.to_string(),
            stderr_log: command.stderr_log,
        };
        let pid_path = pid_file_path(home);
        let recorded = write_pid_file(&pid_path, process.pid, started_at)
            .and_then(|()| write_record_file(&record_file_path(home), &record));
        let mut handle = NodeHandle::new(process.pid, started_at, record, process.child);

        // An unrecorded node could never be stopped, so take it down again.
        if let Err(e) = recorded {
            warn!(pid = process.pid, error = %e, "Could not record node, stopping it");
            let _ = handle.kill();
            let _ = remove_pid_file(&pid_path);
            return Err(e);
        }

        info!(pid = process.pid, listen, "Node started");
        Ok(handle)
    }

    // =========================================================================
    // Invocation
    // =========================================================================

    async fn profile_call<T: DeserializeOwned>(
        &self,
        operation: Operation,
        argv: &[&str],
    ) -> GatewayResult<T> {
        let program = &self.tools.profile;
        let output = self.invoke(operation, program, args(argv)).await?;
        decode(operation, Encoding::Double, program, &output)
    }

    async fn identities_call<T: DeserializeOwned>(
        &self,
        operation: Operation,
        argv: Vec<String>,
    ) -> GatewayResult<T> {
        let program = &self.tools.identities;
        let output = self.invoke(operation, program, argv).await?;
        decode(operation, Encoding::Single, program, &output)
    }

    /// Run a tool and require a successful exit.
    async fn invoke(
        &self,
        operation: Operation,
        program: &str,
        argv: Vec<String>,
    ) -> GatewayResult<ProcessOutput> {
        debug!(%operation, program, args = ?argv, "Invoking tool");

        let output = self.runner.run(program, &argv).await.map_err(|source| {
            if source.kind() == io::ErrorKind::TimedOut {
                GatewayError::Timeout {
                    operation,
                    program: program.to_string(),
                    timeout: self.runner.timeout().unwrap_or_default(),
                }
            } else {
                GatewayError::Spawn {
                    operation,
                    program: program.to_string(),
                    source,
                }
            }
        })?;

        if !output.is_success() {
            return Err(GatewayError::Exit {
                operation,
                program: program.to_string(),
                code: output.code,
            });
        }
        Ok(output)
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("tools", &self.tools)
            .finish_non_exhaustive()
    }
}

fn decode<T: DeserializeOwned>(
    operation: Operation,
    encoding: Encoding,
    program: &str,
    output: &ProcessOutput,
) -> GatewayResult<T> {
    debug_assert_eq!(operation.encoding(), Some(encoding));
    encoding
        .decode(&output.stdout)
        .map_err(|source| GatewayError::Decode {
            operation,
            program: program.to_string(),
            encoding,
            source,
        })
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
