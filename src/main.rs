use clap::Parser;

mod cli;
mod commands;
mod domain;
mod error;
mod logging;
mod services;

use crate::cli::Cli;
use crate::commands::{dispatch, register_commands};

fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();
    let registry = register_commands()?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let outcome = dispatch(
        &registry,
        &cli.argv(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    tracing::debug!(command = %cli.command, ?outcome, "dispatch finished");

    Ok(())
}
