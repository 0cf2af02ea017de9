//! Command dispatch logic for sograph

use std::time::Instant;

use crate::cli::Cli;
use sograph_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(
        elapsed = ?start.elapsed(),
        policy = %ctx.config.graph.readd_policy,
        "load_config"
    );

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
