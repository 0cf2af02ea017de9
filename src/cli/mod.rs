//! CLI argument parsing for sograph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --config, --format, --quiet, --verbose, --readd-policy

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_format, parse_readd_policy};
pub use sograph_core::format::OutputFormat;
use sograph_core::graph::ReaddPolicy;

/// Sograph - build a social graph from line commands and query hop distances
#[derive(Parser, Debug)]
#[command(name = "sograph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: $SOGRAPH_CONFIG_DIR/config.toml, then the platform config dir)
    #[arg(long, global = true, env = "SOGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human, json, or records
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. `debug` or `sograph_core=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// What `add <id>` does for an existing vertex: replace, keep, or reject
    #[arg(long, global = true, value_parser = parse_readd_policy)]
    pub readd_policy: Option<ReaddPolicy>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a command script, printing each query result
    Run {
        /// Script file; reads stdin when omitted or `-`
        script: Option<PathBuf>,

        /// Print the vertex set once the script ends
        #[arg(long)]
        summary: bool,
    },

    /// Minimum number of hops between two vertices
    Hops {
        /// Source vertex
        from: String,

        /// Target vertex
        to: String,

        /// Script that builds the graph
        #[arg(long, short)]
        script: PathBuf,
    },

    /// One shortest path between two vertices
    Path {
        /// Source vertex
        from: String,

        /// Target vertex
        to: String,

        /// Script that builds the graph
        #[arg(long, short)]
        script: PathBuf,
    },

    /// List friend groups (connected components, direction ignored)
    Groups {
        /// Script that builds the graph
        #[arg(long, short)]
        script: PathBuf,
    },

    /// Build the five-user example graph and query it
    Demo,
}
