//! Profile creation and listing.

use tracing::debug;

use crate::context::Context;
use crate::error::CliResult;
use crate::flows::{fail, Outcome};
use crate::render;

const CREATE_PROMPT: &str = "Create new radicle profile (key pair and initial configuration)";

/// Create a key pair, register the SSH key, and create the default identity.
pub async fn create_profile(ctx: &mut Context) -> CliResult<Outcome> {
    if !ctx.term.yes_no(CREATE_PROMPT)? {
        ctx.term.margin()?;
        return Ok(Outcome::Cancelled);
    }

    // The profile tool may ask for a passphrase, so no spinner here.
    ctx.term.info("Creating new profile and radicle key...")?;
    if let Err(e) = ctx.gateway.create_profile().await {
        return fail(&mut ctx.term, "Could not create profile.", &e);
    }

    ctx.term.info("Adding SSH-key...")?;
    let profile = match ctx.gateway.add_ssh_key().await {
        Ok(profile) => profile,
        Err(e) => return fail(&mut ctx.term, "Could not add SSH key.", &e),
    };

    let name = ctx.term.value("Please enter your username", None)?;
    let person = match ctx.gateway.create_identity(&name).await {
        Ok(person) => person,
        Err(e) => return fail(&mut ctx.term, "Could not create identity.", &e),
    };

    if let Err(e) = ctx.gateway.set_default_identity(&person.urn).await {
        return fail(&mut ctx.term, "Could not set default identity.", &e);
    }

    ctx.term.success("Profile created successfully!")?;
    ctx.term.print(&render::profile(&profile, &person))?;
    ctx.term.info("To add a project to Radicle, run `rad init` in an existing git repository.")?;
    Ok(Outcome::Completed)
}

/// List all profiles, marking the active one.
///
/// A missing active profile is expected on first run and only warns. An
/// empty list renders nothing.
pub async fn list_profiles(ctx: &mut Context) -> CliResult<Outcome> {
    // The profile tool may unlock the keystore, so no spinner here.
    let active = ctx.gateway.active_profile().await;
    let profiles = ctx.gateway.list_profiles().await;

    let active = match active {
        Ok(profile) => Some(profile),
        Err(e) => {
            debug!(error = %e, "No active profile");
            ctx.term.warning("Could not find any profile.")?;
            ctx.term.info("If you want to create a new profile, please use `rad auth`.")?;
            None
        }
    };

    let profiles = match profiles {
        Ok(profiles) => profiles,
        Err(e) => return fail(&mut ctx.term, "Could not get list of profiles.", &e),
    };

    if !profiles.is_empty() {
        ctx.term.info("Found at least one existing profile.")?;
        ctx.term.print(&render::profile_list(&profiles, active.as_ref()))?;
    }
    Ok(Outcome::Completed)
}

/// Print the storage paths of the active profile as the tool reports them.
pub async fn show_paths(ctx: &mut Context) -> CliResult<Outcome> {
    match ctx.gateway.profile_paths().await {
        Ok(paths) => {
            ctx.term.print(paths.trim_end())?;
            Ok(Outcome::Completed)
        }
        Err(e) => fail(&mut ctx.term, "Could not get profile paths.", &e),
    }
}
