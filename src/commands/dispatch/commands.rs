//! Command implementations for all sograph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{demo, query, run};
use sograph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Run { script, summary } => run::execute(ctx, script.as_deref(), *summary),
            Commands::Hops { from, to, script } => query::execute_hops(ctx, script, from, to),
            Commands::Path { from, to, script } => query::execute_path(ctx, script, from, to),
            Commands::Groups { script } => query::execute_groups(ctx, script),
            Commands::Demo => demo::execute(ctx),
        }
    }
}
