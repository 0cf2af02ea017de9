//! `sograph run` - execute a command script

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use sograph_core::error::{GraphError, Result};
use sograph_core::script::{Outcome, RunSummary, Session};
use tracing::debug;

use crate::commands::dispatch::CommandContext;
use crate::commands::render;

/// Run a script from `script`, or stdin when `None` or `-`
pub fn execute(ctx: &CommandContext, script: Option<&Path>, summary: bool) -> Result<()> {
    let mut session = ctx.session();
    let format = ctx.cli.format;

    let stats = match script.filter(|path| *path != Path::new("-")) {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                GraphError::Other(format!("failed to open script {}: {}", path.display(), e))
            })?;
            run_reader(&mut session, BufReader::new(file), ctx)?
        }
        None => run_reader(&mut session, io::stdin().lock(), ctx)?,
    };

    debug!(
        elapsed = ?ctx.start.elapsed(),
        lines = stats.lines,
        commands = stats.commands,
        stopped = stats.stopped,
        "run"
    );

    if summary && !ctx.cli.quiet {
        let ids = session.graph().sorted_ids().into_iter().cloned().collect();
        render::print(format, &Outcome::Vertices { ids })?;
    }

    Ok(())
}

fn run_reader<R: io::BufRead>(
    session: &mut Session,
    reader: R,
    ctx: &CommandContext,
) -> Result<RunSummary> {
    let format = ctx.cli.format;
    session.run(reader, |outcome| render::print(format, &outcome))
}
