//! Path reconstruction for BFS results

use std::collections::HashMap;

use crate::graph::VertexId;

/// Walk predecessor links back from `to` and return `from ..= to`.
///
/// Stops early if the chain is broken, so the result then starts at the
/// last vertex that had no predecessor.
pub fn reconstruct_path<'a, Id: VertexId>(
    from: &Id,
    to: &'a Id,
    predecessors: &HashMap<&'a Id, &'a Id>,
) -> Vec<Id> {
    let mut path = vec![to.clone()];
    let mut current = to;

    while current != from {
        match predecessors.get(current) {
            Some(&pred) => {
                path.push(pred.clone());
                current = pred;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
