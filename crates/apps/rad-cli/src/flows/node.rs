//! Local node setup, shutdown, and status.

use rad_gateway::{node_status, stop_node, GatewayError};

use crate::context::Context;
use crate::error::CliResult;
use crate::flows::{fail, Outcome};
use crate::render;

/// Start the node daemon in the background.
pub fn setup_node(ctx: &mut Context) -> CliResult<Outcome> {
    ctx.term.info("Setting up local radicle node...")?;

    let listen = ctx.config.node.listen.clone();
    let handle = match ctx.gateway.start_node(ctx.home.path(), &listen) {
        Ok(handle) => handle,
        Err(GatewayError::NodeAlreadyRunning(pid)) => {
            ctx.term.warning(&format!("Node is already running (PID {}).", pid))?;
            return Ok(Outcome::Failed);
        }
        Err(e) => return fail(&mut ctx.term, "Could not start node.", &e),
    };

    ctx.term.success(&format!(
        "Node started (PID {}), listening on {}.",
        handle.pid(),
        handle.listen()
    ))?;
    ctx.term.info(&format!(
        "Node output is written to {}",
        handle.stderr_log().display()
    ))?;
    Ok(Outcome::Completed)
}

/// Stop the node recorded in the home directory.
pub async fn shutdown_node(ctx: &mut Context) -> CliResult<Outcome> {
    let spinner = ctx.term.spinner("Stopping local radicle node...");
    let result = stop_node(ctx.home.path(), ctx.config.node.stop_timeout()).await;
    spinner.finish_and_clear();

    match result {
        Ok(pid) => {
            ctx.term.success(&format!("Node stopped (PID {}).", pid))?;
            Ok(Outcome::Completed)
        }
        Err(GatewayError::NodeNotRunning) => {
            ctx.term.warning("Node is not running.")?;
            Ok(Outcome::Failed)
        }
        Err(e) => fail(&mut ctx.term, "Could not stop node.", &e),
    }
}

/// Show whether the node is running.
pub fn show_node(ctx: &mut Context) -> CliResult<Outcome> {
    let status = node_status(ctx.home.path());
    if status.running {
        ctx.term.success("Node is running.")?;
        ctx.term.print(&render::node_status(&status))?;
    } else {
        ctx.term.info("Node is not running.")?;
        ctx.term.info("To start it, run `rad node --setup`")?;
    }
    Ok(Outcome::Completed)
}
