//! `rad node`.

use crate::context::Context;
use crate::error::CliResult;
use crate::flows::{node as flow, Outcome};

/// Start or stop the node, or show its status.
pub async fn node(ctx: &mut Context, setup: bool, stop: bool) -> CliResult<Outcome> {
    if setup {
        flow::setup_node(ctx)
    } else if stop {
        flow::shutdown_node(ctx).await
    } else {
        flow::show_node(ctx)
    }
}
