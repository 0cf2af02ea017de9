//! One-shot queries over a graph built from a script file

use std::fs;
use std::path::Path;

use sograph_core::error::{GraphError, Result};
use sograph_core::graph::{find_path, friend_groups, shortest_path_hops};
use sograph_core::script::{parse_script, Outcome, Session};
use tracing::debug;

use crate::commands::dispatch::CommandContext;
use crate::commands::render;

/// Build a session from a script file. Query lines in the file are executed
/// but their outcomes are discarded.
pub fn load_session(ctx: &CommandContext, script: &Path) -> Result<Session> {
    let text = fs::read_to_string(script).map_err(|e| {
        GraphError::Other(format!("failed to read script {}: {}", script.display(), e))
    })?;
    let commands = parse_script(&text)?;

    let mut session = ctx.session();
    let discarded = session.run_commands(commands)?;

    debug!(
        elapsed = ?ctx.start.elapsed(),
        vertices = session.graph().vertex_count(),
        edges = session.graph().edge_count(),
        discarded = discarded.len(),
        "load_session"
    );
    Ok(session)
}

pub fn execute_hops(ctx: &CommandContext, script: &Path, from: &str, to: &str) -> Result<()> {
    let session = load_session(ctx, script)?;
    let (from, to) = (from.to_string(), to.to_string());
    let hops = shortest_path_hops(session.graph(), &from, &to)?;
    render::print(ctx.cli.format, &Outcome::Hops { from, to, hops })
}

pub fn execute_path(ctx: &CommandContext, script: &Path, from: &str, to: &str) -> Result<()> {
    let session = load_session(ctx, script)?;
    let result = find_path(session.graph(), &from.to_string(), &to.to_string())?;
    render::print(ctx.cli.format, &Outcome::Path(result))
}

pub fn execute_groups(ctx: &CommandContext, script: &Path) -> Result<()> {
    let session = load_session(ctx, script)?;
    let groups = friend_groups(session.graph());
    render::print(ctx.cli.format, &Outcome::Groups { groups })
}
