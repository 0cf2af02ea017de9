//! Rendering of query outcomes in each output format

use sograph_core::error::Result;
use sograph_core::format::{record, OutputFormat};
use sograph_core::graph::{Hops, PathResult};
use sograph_core::script::Outcome;

/// Render one outcome. JSON is one compact object per outcome (JSON Lines).
pub fn render(format: OutputFormat, outcome: &Outcome) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(render_human(outcome)),
        OutputFormat::Json => Ok(serde_json::to_string(outcome)?),
        OutputFormat::Records => Ok(render_records(outcome)),
    }
}

/// Render and print one outcome to stdout. Empty renderings print nothing.
pub fn print(format: OutputFormat, outcome: &Outcome) -> Result<()> {
    let text = render(format, outcome)?;
    if !text.is_empty() {
        println!("{}", text);
    }
    Ok(())
}

fn hops_phrase(hops: Hops) -> String {
    match hops {
        Hops::Reachable(1) => "1 hop".to_string(),
        Hops::Reachable(n) => format!("{} hops", n),
        Hops::Unreachable => "unreachable".to_string(),
    }
}

fn human_path(result: &PathResult<String>) -> String {
    if result.found {
        result.path.join(" -> ")
    } else {
        format!("{} -> {}: unreachable", result.from, result.to)
    }
}

fn render_human(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Hops { from, to, hops } => format!("{} -> {}: {}", from, to, hops_phrase(*hops)),
        Outcome::Path(result) => human_path(result),
        Outcome::Vertices { ids } => ids.join("\n"),
        Outcome::Neighbors { id, neighbors } => {
            if neighbors.is_empty() {
                return format!("{} has no outgoing edges", id);
            }
            neighbors
                .iter()
                .map(|n| format!("{} -> {} (weight {})", id, n.id, n.weight))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Outcome::Groups { groups } => {
            let mut lines = vec![format!("{} friend group(s)", groups.len())];
            lines.extend(
                groups
                    .iter()
                    .enumerate()
                    .map(|(i, members)| format!("  {}: {}", i + 1, members.join(" "))),
            );
            lines.join("\n")
        }
    }
}

fn render_records(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Hops { from, to, hops } => {
            format!("{} from={} to={} hops={}", record::HOPS, from, to, hops)
        }
        Outcome::Path(result) => {
            let mut line = format!(
                "{} from={} to={} hops={}",
                record::PATH,
                result.from,
                result.to,
                result.hops()
            );
            if result.found {
                line.push_str(&format!(" path={}", result.path.join(",")));
            }
            line
        }
        Outcome::Vertices { ids } => ids
            .iter()
            .map(|id| format!("{} {}", record::VERTEX, id))
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::Neighbors { id, neighbors } => neighbors
            .iter()
            .map(|n| {
                format!(
                    "{} from={} to={} weight={}",
                    record::NEIGHBOR,
                    id,
                    n.id,
                    n.weight
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::Groups { groups } => groups
            .iter()
            .enumerate()
            .map(|(i, members)| {
                format!(
                    "{} index={} size={} members={}",
                    record::GROUP,
                    i + 1,
                    members.len(),
                    members.join(",")
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
