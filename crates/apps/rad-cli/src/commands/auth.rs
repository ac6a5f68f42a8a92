//! `rad auth`: the entry point for new users.

use crate::context::Context;
use crate::error::CliResult;
use crate::flows::{profile, Outcome};
use crate::guard::ProfileState;
use crate::render;

/// Show existing profiles, or create one.
///
/// With `add`, a new profile is created even if one exists. With `verbose`,
/// the profile's storage paths are printed after a successful run.
pub async fn auth(ctx: &mut Context, add: bool, verbose: bool) -> CliResult<Outcome> {
    if !add {
        ctx.term.print(&render::intro())?;
        ctx.term.margin()?;

        match ctx.home.profile_state() {
            ProfileState::Present(_) => {
                let outcome = profile::list_profiles(ctx).await?;
                ctx.term.info("If you want to create a new profile, please use --add.")?;
                return finish(ctx, outcome, verbose).await;
            }
            ProfileState::Orphaned(id) => {
                ctx.term.warning(&format!("Could not find directory for profile {}.", id))?;
            }
            ProfileState::Missing => {}
        }
    }

    let outcome = profile::create_profile(ctx).await?;
    finish(ctx, outcome, verbose).await
}

async fn finish(ctx: &mut Context, outcome: Outcome, verbose: bool) -> CliResult<Outcome> {
    if verbose && outcome.is_completed() {
        return profile::show_paths(ctx).await;
    }
    Ok(outcome)
}
