//! rad CLI binary entry point.

use std::io;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rad_cli::{
    cli::{Cli, Commands},
    commands,
    config::CliConfig,
    context::Context,
    error::{CliError, CliResult},
    flows::Outcome,
    guard::{RadHome, HOME_ENV},
    render::{self, Status},
    terminal::Terminal,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.wants_debug());

    let code = match run(cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            print_error(&e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

/// Install a stderr subscriber when asked for on the command line or via `RUST_LOG`.
fn init_logging(verbose: bool) {
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !verbose && !has_rust_log {
        return;
    }

    let filter = if verbose {
        EnvFilter::from_default_env()
            .add_directive("rad_cli=debug".parse().expect("valid directive"))
            .add_directive("rad_gateway=debug".parse().expect("valid directive"))
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> CliResult<Outcome> {
    // Completions need no home directory.
    if let Commands::Completions { shell } = cli.command {
        commands::completions(shell, &mut io::stdout())?;
        return Ok(Outcome::Completed);
    }

    let home = RadHome::from_env().ok_or(CliError::MissingHome(HOME_ENV))?;
    let config_path = cli.config.unwrap_or_else(|| home.config_path());
    let config = CliConfig::load(&config_path)?;
    let cwd = std::env::current_dir()?;

    let mut ctx = Context::new(home, config, cwd, Terminal::stdout());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(commands::run(cli.command, &mut ctx))
}

/// Print an error as a status line, followed by a hint if there is one.
fn print_error(e: &CliError) {
    println!("{}", render::status_line(Status::Error, &e.to_string()));
    if let Some(hint) = e.hint() {
        println!("{}", render::status_line(Status::Info, &hint));
    }
}
