//! `sograph demo` - the five-user example graph

use sograph_core::error::Result;
use sograph_core::script::parse_script;

use crate::commands::dispatch::CommandContext;
use crate::commands::render;

/// add 1..5; edges 1->2, 1->3, 2->4, 4->5; then query it
pub const DEMO_SCRIPT: &str = "\
add 1
add 2
add 3
add 4
add 5
edges 1 2
edges 1 3
edges 2 4
edges 4 5
vertices
neighbors 1
hops 1 5
hops 5 1
";

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let mut session = ctx.session();
    let outcomes = session.run_commands(parse_script(DEMO_SCRIPT)?)?;

    for outcome in &outcomes {
        render::print(ctx.cli.format, outcome)?;
    }
    Ok(())
}
