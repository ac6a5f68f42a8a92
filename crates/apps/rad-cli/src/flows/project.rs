//! Project creation and listing.

use rad_gateway::Operation;
use rad_types::ProjectRequest;

use crate::context::Context;
use crate::error::CliResult;
use crate::flows::{fail, Outcome};
use crate::render;

/// Branch offered when asking for the default branch.
pub const SUGGESTED_BRANCH: &str = "main";

/// Register the working directory's repository as a project.
pub async fn create_project(ctx: &mut Context) -> CliResult<Outcome> {
    ctx.term.info("Initializing new radicle project...")?;
    let name = ctx.term.value("Please enter a name", None)?;
    let branch = ctx.term.value("Default branch", Some(SUGGESTED_BRANCH))?;

    ctx.term.info("Setting up `rad` remote...")?;
    let request = ProjectRequest::new(name).with_default_branch(branch);
    let path = ctx.project_parent().to_path_buf();
    let project = match ctx.gateway.create_project(&path, &request).await {
        Ok(project) => project,
        Err(e) => return fail(&mut ctx.term, "Could not create project.", &e),
    };

    ctx.term.success("Project initialized successfully!")?;
    ctx.term.print(&render::project(&project))?;
    ctx.term.info("To publish, run `rad publish` or `git push rad`")?;
    Ok(Outcome::Completed)
}

/// List all projects, marking the one named like the working directory.
pub async fn list_projects(ctx: &mut Context) -> CliResult<Outcome> {
    let spinner = ctx.term.spinner_for(Operation::ListProjects, "Looking up projects...");
    let projects = ctx.gateway.list_projects().await;
    spinner.finish_and_clear();

    let projects = match projects {
        Ok(projects) => projects,
        Err(e) => return fail(&mut ctx.term, "Could not get list of projects.", &e),
    };

    let current = ctx.cwd_name().map(str::to_string);
    ctx.term.print(&render::project_list(&projects, current.as_deref()))?;
    Ok(Outcome::Completed)
}
