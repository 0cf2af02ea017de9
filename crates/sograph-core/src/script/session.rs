//! Executes script commands against a graph of string identifiers

use std::io::BufRead;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::config::GraphConfig;
use crate::error::Result;
use crate::graph::{find_path, friend_groups, shortest_path_hops, Graph, Hops, PathResult, Weight};
use crate::script::Command;
use crate::trace_time;

/// An outgoing edge as reported by `neighbors`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub id: String,
    pub weight: Weight,
}

/// Result of a query command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Hops {
        from: String,
        to: String,
        hops: Hops,
    },
    Path(PathResult<String>),
    Vertices { ids: Vec<String> },
    Neighbors {
        id: String,
        neighbors: Vec<Neighbor>,
    },
    Groups { groups: Vec<Vec<String>> },
}

/// Counters for one [`Session::run`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub commands: usize,
    /// Whether input ended with an explicit `stop`
    pub stopped: bool,
}

/// A graph being built and queried by a script
#[derive(Debug)]
pub struct Session {
    graph: Graph<String>,
    default_weight: Weight,
}

impl Session {
    pub fn new(config: &GraphConfig) -> Self {
        Self {
            graph: Graph::with_policy(config.readd_policy),
            default_weight: config.default_weight,
        }
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Apply one command. Mutations return `None`; queries return their outcome.
    pub fn execute(&mut self, command: Command) -> Result<Option<Outcome>> {
        let outcome = match command {
            Command::AddVertex(id) => {
                self.graph.add_vertex(id)?;
                None
            }
            Command::AddEdge { from, to, weight } => {
                self.graph
                    .add_edge(from, to, weight.unwrap_or(self.default_weight));
                None
            }
            Command::Hops { from, to } => {
                let hops = shortest_path_hops(&self.graph, &from, &to)?;
                Some(Outcome::Hops { from, to, hops })
            }
            Command::Path { from, to } => Some(Outcome::Path(find_path(&self.graph, &from, &to)?)),
            Command::Vertices => Some(Outcome::Vertices {
                ids: self.graph.sorted_ids().into_iter().cloned().collect(),
            }),
            Command::Neighbors(id) => {
                let mut neighbors: Vec<Neighbor> = self
                    .graph
                    .get_vertex(&id)?
                    .neighbors()
                    .map(|(neighbor, weight)| Neighbor {
                        id: neighbor.clone(),
                        weight,
                    })
                    .collect();
                neighbors.sort_by(|a, b| a.id.cmp(&b.id));
                Some(Outcome::Neighbors { id, neighbors })
            }
            Command::Groups => Some(Outcome::Groups {
                groups: friend_groups(&self.graph),
            }),
            Command::Stop => None,
        };
        Ok(outcome)
    }

    /// Read commands line by line, executing each as it arrives.
    ///
    /// `emit` receives every query outcome in order. Reading ends at EOF or
    /// `stop`; the first failing line aborts the run.
    pub fn run<R, F>(&mut self, reader: R, mut emit: F) -> Result<RunSummary>
    where
        R: BufRead,
        F: FnMut(Outcome) -> Result<()>,
    {
        let start = Instant::now();
        let mut summary = RunSummary::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            summary.lines = idx + 1;

            let Some(command) = Command::parse_line(idx + 1, &line)? else {
                continue;
            };
            if command == Command::Stop {
                summary.stopped = true;
                break;
            }

            summary.commands += 1;
            if let Some(outcome) = self.execute(command)? {
                emit(outcome)?;
            }
        }

        debug!(
            lines = summary.lines,
            commands = summary.commands,
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "script finished"
        );
        trace_time!(start, "session_run");
        Ok(summary)
    }

    /// Execute pre-parsed commands, collecting query outcomes
    pub fn run_commands(&mut self, commands: Vec<(usize, Command)>) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::new();
        for (line_no, command) in commands {
            debug!(line = line_no, query = command.is_query(), ?command, "execute");
            outcomes.extend(self.execute(command)?);
        }
        Ok(outcomes)
    }
}
