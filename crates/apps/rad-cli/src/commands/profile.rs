//! `rad profile`.

use crate::context::Context;
use crate::error::CliResult;
use crate::flows::{profile as flow, Outcome};

/// Optionally create a profile, then list profiles.
pub async fn profile(ctx: &mut Context, init: bool, paths: bool) -> CliResult<Outcome> {
    if init {
        let outcome = flow::create_profile(ctx).await?;
        if !outcome.is_completed() {
            return Ok(outcome);
        }
    }

    let outcome = flow::list_profiles(ctx).await?;
    if paths && outcome.is_completed() {
        return flow::show_paths(ctx).await;
    }
    Ok(outcome)
}
