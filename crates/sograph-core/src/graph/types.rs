use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::GraphError;

/// Edge weight. Stored on every edge but not consulted by hop-count queries.
pub type Weight = f64;

/// Bounds for a caller-supplied vertex identifier.
///
/// `Ord` keeps listings and path tie-breaks deterministic; `Display` is used
/// for error messages and log fields.
pub trait VertexId: Eq + Hash + Ord + Clone + fmt::Debug + fmt::Display {}

impl<T> VertexId for T where T: Eq + Hash + Ord + Clone + fmt::Debug + fmt::Display {}

/// What `add_vertex` does when the identifier is already present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReaddPolicy {
    /// Replace the vertex with a fresh one, discarding its outgoing edges
    #[default]
    Replace,
    /// Leave the existing vertex untouched
    Keep,
    /// Fail with [`GraphError::VertexExists`]
    Reject,
}

impl ReaddPolicy {
    pub const ALL: [ReaddPolicy; 3] = [
        ReaddPolicy::Replace,
        ReaddPolicy::Keep,
        ReaddPolicy::Reject,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReaddPolicy::Replace => "replace",
            ReaddPolicy::Keep => "keep",
            ReaddPolicy::Reject => "reject",
        }
    }
}

impl FromStr for ReaddPolicy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "replace" => Ok(ReaddPolicy::Replace),
            "keep" => Ok(ReaddPolicy::Keep),
            "reject" => Ok(ReaddPolicy::Reject),
            other => {
                crate::bail_invalid!("readd policy (expected replace, keep, or reject)", other)
            }
        }
    }
}

impl fmt::Display for ReaddPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a hop-count query.
///
/// `Reachable(0)` means source and target are the same vertex; a missing
/// path is always `Unreachable`, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "hops", rename_all = "lowercase")]
pub enum Hops {
    Reachable(u32),
    Unreachable,
}

impl Hops {
    pub fn count(&self) -> Option<u32> {
        match self {
            Hops::Reachable(n) => Some(*n),
            Hops::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Hops::Reachable(_))
    }
}

impl From<Option<u32>> for Hops {
    fn from(hops: Option<u32>) -> Self {
        hops.map_or(Hops::Unreachable, Hops::Reachable)
    }
}

impl fmt::Display for Hops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hops::Reachable(n) => write!(f, "{}", n),
            Hops::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Result of a path query: one shortest path, if any
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<Id> {
    pub from: Id,
    pub to: Id,
    pub found: bool,
    /// Vertices from `from` to `to` inclusive; empty when not found
    pub path: Vec<Id>,
}

impl<Id> PathResult<Id> {
    pub fn hops(&self) -> Hops {
        if self.found {
            Hops::Reachable(self.path.len().saturating_sub(1) as u32)
        } else {
            Hops::Unreachable
        }
    }
}
