//! Publishing the current repository.

use crate::context::Context;
use crate::error::CliResult;
use crate::flows::Outcome;

/// Push to the configured remote. The push result is not inspected.
pub async fn publish_project(ctx: &mut Context) -> CliResult<Outcome> {
    ctx.term.info("Publishing project...")?;
    let remote = ctx.config.git.remote.clone();
    ctx.gateway.publish_project(&remote).await;
    ctx.term.margin()?;

    ctx.term.info("To replicate to peers, run `rad node --setup`")?;
    Ok(Outcome::Completed)
}
