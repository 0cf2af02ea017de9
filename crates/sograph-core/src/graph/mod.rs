//! Social graph store and traversal operations
//!
//! - `Graph` / `Vertex`: directed, weighted, in-memory store
//! - BFS hop counts and shortest paths (weights ignored)
//! - Friend groups (weakly connected components)
//! - `GraphProvider` trait: the read-only view traversals consume

pub mod bfs;
pub mod groups;
pub mod store;
pub mod traversal;
pub mod types;

pub use bfs::{bfs_distances, find_path, shortest_path_hops};
pub use groups::{count_friend_groups, friend_groups};
pub use store::{Graph, Vertex};
pub use traversal::GraphProvider;
pub use types::{Hops, PathResult, ReaddPolicy, VertexId, Weight};
