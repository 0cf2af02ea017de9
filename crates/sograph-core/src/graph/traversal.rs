use crate::graph::store::Graph;
use crate::graph::types::VertexId;

/// Read-only adjacency view consumed by the traversal algorithms
pub trait GraphProvider {
    type Id: VertexId;

    fn contains(&self, id: &Self::Id) -> bool;

    /// Outgoing neighbor identifiers of `id`, ascending; empty if absent
    fn outbound(&self, id: &Self::Id) -> Vec<&Self::Id>;

    /// Every vertex identifier, ascending
    fn ids(&self) -> Vec<&Self::Id>;
}

impl<Id: VertexId> GraphProvider for Graph<Id> {
    type Id = Id;

    fn contains(&self, id: &Id) -> bool {
        Graph::contains(self, id)
    }

    fn outbound(&self, id: &Id) -> Vec<&Id> {
        let Ok(vertex) = self.get_vertex(id) else {
            return Vec::new();
        };
        let mut neighbors: Vec<&Id> = vertex.neighbors().map(|(neighbor, _)| neighbor).collect();
        neighbors.sort();
        neighbors
    }

    fn ids(&self) -> Vec<&Id> {
        self.sorted_ids()
    }
}
