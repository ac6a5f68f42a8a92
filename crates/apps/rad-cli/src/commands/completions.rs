//! Shell completion generation.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CliResult;

/// Write completions for `shell` to `out`.
pub fn completions(shell: Shell, out: &mut dyn Write) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    out.flush()?;
    Ok(())
}
