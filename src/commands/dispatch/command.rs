//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use sograph_core::config::Config;
use sograph_core::error::Result;
use sograph_core::script::Session;

/// Load the config file and apply CLI overrides
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::discover(cli.config.as_deref())?;
    if let Some(policy) = cli.readd_policy {
        config.graph.readd_policy = policy;
    }
    Ok(config)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        Ok(Self {
            cli,
            config: resolve_config(cli)?,
            start,
        })
    }

    /// A fresh, empty session using the resolved graph config
    pub fn session(&self) -> Session {
        Session::new(&self.config.graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("sograph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Build a social graph from line commands and query hop distances.");
        println!();
        println!("Run `sograph --help` for usage information.");
        Ok(())
    }
}
