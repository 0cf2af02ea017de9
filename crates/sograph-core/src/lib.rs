//! Sograph Core Library
//!
//! In-memory social graph: a directed, weighted vertex/edge store with
//! breadth-first hop-count queries, plus the config, error, logging, and
//! script plumbing the `sograph` CLI is built on.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod script;
