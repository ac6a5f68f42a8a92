//! Command dispatch.
//!
//! Commands check preconditions and chain flows; the flows do the work.

pub mod auth;
pub mod completions;
pub mod node;
pub mod profile;
pub mod project;

use crate::cli::Commands;
use crate::context::Context;
use crate::error::CliResult;
use crate::flows::Outcome;

pub use auth::auth;
pub use completions::completions;
pub use node::node;
pub use profile::profile;
pub use project::{init, project, publish};

/// Run `command` to completion.
pub async fn run(command: Commands, ctx: &mut Context) -> CliResult<Outcome> {
    match command {
        Commands::Auth { add, verbose } => auth(ctx, add, verbose).await,
        Commands::Profile { init, paths, .. } => profile(ctx, init, paths).await,
        Commands::Project { init, .. } => project(ctx, init).await,
        Commands::Init => init(ctx).await,
        Commands::Publish => publish(ctx).await,
        Commands::Node { setup, stop } => node(ctx, setup, stop).await,
        Commands::Completions { shell } => {
            completions(shell, ctx.term.writer())?;
            Ok(Outcome::Completed)
        }
    }
}
