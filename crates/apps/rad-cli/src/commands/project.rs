//! `rad project`, `rad init` and `rad publish`.

use crate::context::Context;
use crate::error::CliResult;
use crate::flows::{project as flow, publish as publish_flow, Outcome};
use crate::guard::is_version_controlled;

const NOT_A_REPOSITORY: &str = "This is not a git repository.";

/// Optionally create a project, then list projects.
pub async fn project(ctx: &mut Context, init: bool) -> CliResult<Outcome> {
    if init {
        let outcome = flow::create_project(ctx).await?;
        if !outcome.is_completed() {
            return Ok(outcome);
        }
    }
    flow::list_projects(ctx).await
}

/// Create a project from the git repository in the working directory.
pub async fn init(ctx: &mut Context) -> CliResult<Outcome> {
    if !require_repository(ctx)? {
        return Ok(Outcome::Failed);
    }
    flow::create_project(ctx).await
}

/// Publish the git repository in the working directory.
pub async fn publish(ctx: &mut Context) -> CliResult<Outcome> {
    if !require_repository(ctx)? {
        return Ok(Outcome::Failed);
    }
    publish_flow::publish_project(ctx).await
}

fn require_repository(ctx: &mut Context) -> CliResult<bool> {
    if is_version_controlled(&ctx.cwd) {
        return Ok(true);
    }
    ctx.term.error(NOT_A_REPOSITORY)?;
    Ok(false)
}
