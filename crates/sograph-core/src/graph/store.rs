use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::types::{ReaddPolicy, VertexId, Weight};

/// A vertex and its outgoing edges.
///
/// Neighbors are held by identifier, so every key refers to a vertex
/// that existed in the owning [`Graph`] when the edge was added.
#[derive(Debug, Clone)]
pub struct Vertex<Id> {
    id: Id,
    neighbors: HashMap<Id, Weight>,
}

impl<Id: VertexId> Vertex<Id> {
    fn new(id: Id) -> Self {
        Self {
            id,
            neighbors: HashMap::new(),
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Outgoing `(neighbor, weight)` pairs in unspecified order
    pub fn neighbors(&self) -> impl Iterator<Item = (&Id, Weight)> + '_ {
        self.neighbors.iter().map(|(id, w)| (id, *w))
    }

    /// Weight of the edge to `id`, if one exists
    pub fn weight_to(&self, id: &Id) -> Option<Weight> {
        self.neighbors.get(id).copied()
    }

    /// Number of outgoing edges
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    fn connect(&mut self, neighbor: Id, weight: Weight) -> Option<Weight> {
        self.neighbors.insert(neighbor, weight)
    }
}

/// In-memory directed, weighted graph.
///
/// Vertices are never removed. Self-loops and zero weights are allowed.
/// Queries borrow the graph immutably; there must be no concurrent writers
/// during a traversal.
#[derive(Debug, Clone)]
pub struct Graph<Id> {
    vertices: HashMap<Id, Vertex<Id>>,
    policy: ReaddPolicy,
}

impl<Id: VertexId> Graph<Id> {
    pub fn new() -> Self {
        Self::with_policy(ReaddPolicy::default())
    }

    pub fn with_policy(policy: ReaddPolicy) -> Self {
        Self {
            vertices: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> ReaddPolicy {
        self.policy
    }

    /// Add a vertex with no edges.
    ///
    /// If `id` already exists the configured [`ReaddPolicy`] decides:
    /// `Replace` swaps in a fresh vertex (its outgoing edges are lost, edges
    /// pointing at it are kept), `Keep` returns the existing vertex, and
    /// `Reject` fails with [`GraphError::VertexExists`].
    pub fn add_vertex(&mut self, id: Id) -> Result<&Vertex<Id>> {
        let policy = self.policy;
        match self.vertices.entry(id) {
            Entry::Vacant(slot) => {
                trace!(id = %slot.key(), "add_vertex");
                let vertex = Vertex::new(slot.key().clone());
                Ok(slot.insert(vertex))
            }
            Entry::Occupied(mut slot) => match policy {
                ReaddPolicy::Replace => {
                    let dropped = slot.get().degree();
                    debug!(id = %slot.key(), dropped_edges = dropped, "re-added vertex replaced");
                    let vertex = Vertex::new(slot.key().clone());
                    slot.insert(vertex);
                    Ok(slot.into_mut())
                }
                ReaddPolicy::Keep => {
                    trace!(id = %slot.key(), "re-added vertex kept");
                    Ok(slot.into_mut())
                }
                ReaddPolicy::Reject => Err(GraphError::vertex_exists(slot.key())),
            },
        }
    }

    /// Add the directed edge `u -> v`, creating either endpoint if absent.
    ///
    /// A second call for the same pair overwrites the weight. The reverse
    /// edge is never added.
    pub fn add_edge(&mut self, u: Id, v: Id, weight: Weight) {
        if !self.vertices.contains_key(&v) {
            trace!(id = %v, "add_edge created target");
            self.vertices.insert(v.clone(), Vertex::new(v.clone()));
        }

        let source = self.vertices.entry(u).or_insert_with_key(|key| {
            trace!(id = %key, "add_edge created source");
            Vertex::new(key.clone())
        });

        if let Some(previous) = source.connect(v, weight) {
            trace!(from = %source.id, previous, weight, "edge weight overwritten");
        }
    }

    /// Add every `(u, v, weight)` edge in order
    pub fn extend_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (Id, Id, Weight)>,
    {
        for (u, v, weight) in edges {
            self.add_edge(u, v, weight);
        }
    }

    /// Look up a vertex, failing with [`GraphError::VertexNotFound`] if absent
    pub fn get_vertex(&self, id: &Id) -> Result<&Vertex<Id>> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::vertex_not_found(id))
    }

    /// All known identifiers
    pub fn get_vertices(&self) -> HashSet<&Id> {
        self.vertices.keys().collect()
    }

    /// All known identifiers in ascending order
    pub fn sorted_ids(&self) -> Vec<&Id> {
        let mut ids: Vec<&Id> = self.vertices.keys().collect();
        ids.sort();
        ids
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.vertices.contains_key(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::degree).sum()
    }
}

impl<Id: VertexId> Default for Graph<Id> {
    fn default() -> Self {
        Self::new()
    }
}
