//! Line-oriented command scripts
//!
//! One command per line, whitespace separated. Blank lines and lines
//! starting with `#` are ignored; `stop` ends the script.
//!
//! ```text
//! add <id>
//! edges <u> <v> [weight]
//! hops <src> <dst>
//! path <src> <dst>
//! vertices
//! neighbors <id>
//! groups
//! stop
//! ```

pub mod session;

pub use session::{Neighbor, Outcome, RunSummary, Session};

use crate::bail_script;
use crate::error::Result;
use crate::graph::Weight;

/// A single parsed script line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddVertex(String),
    /// `weight: None` means the configured default weight
    AddEdge {
        from: String,
        to: String,
        weight: Option<Weight>,
    },
    Hops {
        from: String,
        to: String,
    },
    Path {
        from: String,
        to: String,
    },
    Vertices,
    Neighbors(String),
    Groups,
    Stop,
}

impl Command {
    /// Parse one line. Returns `Ok(None)` for blank and comment lines.
    ///
    /// `line_no` is 1-based and only used for error messages.
    pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let command = match (keyword, args.as_slice()) {
            ("add", [id]) => Command::AddVertex(id.to_string()),
            ("edges" | "edge", [from, to]) => Command::AddEdge {
                from: from.to_string(),
                to: to.to_string(),
                weight: None,
            },
            ("edges" | "edge", [from, to, weight]) => Command::AddEdge {
                from: from.to_string(),
                to: to.to_string(),
                weight: Some(parse_weight(line_no, weight)?),
            },
            ("hops", [from, to]) => Command::Hops {
                from: from.to_string(),
                to: to.to_string(),
            },
            ("path", [from, to]) => Command::Path {
                from: from.to_string(),
                to: to.to_string(),
            },
            ("vertices", []) => Command::Vertices,
            ("neighbors", [id]) => Command::Neighbors(id.to_string()),
            ("groups", []) => Command::Groups,
            ("stop", []) => Command::Stop,
            ("add" | "neighbors", _) => bail_script!(line_no, "usage: {} <id>", keyword),
            ("edges" | "edge", _) => bail_script!(line_no, "usage: {} <u> <v> [weight]", keyword),
            ("hops" | "path", _) => bail_script!(line_no, "usage: {} <src> <dst>", keyword),
            ("vertices" | "groups" | "stop", _) => {
                bail_script!(line_no, "{} takes no arguments", keyword)
            }
            (other, _) => bail_script!(line_no, "unknown command: {}", other),
        };

        Ok(Some(command))
    }

    /// Whether the command only reads the graph
    pub fn is_query(&self) -> bool {
        matches!(
            self,
            Command::Hops { .. }
                | Command::Path { .. }
                | Command::Vertices
                | Command::Neighbors(_)
                | Command::Groups
        )
    }
}

fn parse_weight(line_no: usize, raw: &str) -> Result<Weight> {
    match raw.parse::<Weight>() {
        Ok(weight) if weight.is_finite() => Ok(weight),
        _ => bail_script!(line_no, "invalid weight: {}", raw),
    }
}

/// Parse a whole script into `(line_no, command)` pairs.
///
/// Parsing ends at the first `stop`; later lines are not inspected.
pub fn parse_script(text: &str) -> Result<Vec<(usize, Command)>> {
    let mut commands = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        match Command::parse_line(idx + 1, line)? {
            Some(Command::Stop) => break,
            Some(command) => commands.push((idx + 1, command)),
            None => {}
        }
    }
    Ok(commands)
}
