//! Friend groups: weakly connected components of the social graph.
//!
//! Edge direction is ignored, so if A follows B and B follows C then A, B
//! and C share a group. A vertex with no edges is a group of its own.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::GraphProvider;

/// Every friend group, each sorted ascending, ordered by smallest member
#[tracing::instrument(skip_all)]
pub fn friend_groups<P>(provider: &P) -> Vec<Vec<P::Id>>
where
    P: GraphProvider + ?Sized,
{
    let ids = provider.ids();

    let mut undirected: HashMap<&P::Id, Vec<&P::Id>> = HashMap::with_capacity(ids.len());
    for &id in &ids {
        for neighbor in provider.outbound(id) {
            undirected.entry(id).or_default().push(neighbor);
            undirected.entry(neighbor).or_default().push(id);
        }
    }

    let mut seen: HashSet<&P::Id> = HashSet::with_capacity(ids.len());
    let mut groups = Vec::new();

    for &root in &ids {
        if !seen.insert(root) {
            continue;
        }

        let mut members = vec![root.clone()];
        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            for &next in undirected.get(current).into_iter().flatten() {
                if seen.insert(next) {
                    members.push(next.clone());
                    queue.push_back(next);
                }
            }
        }

        members.sort();
        groups.push(members);
    }

    tracing::debug!(groups = groups.len(), vertices = ids.len(), "friend_groups");
    groups
}

/// Number of friend groups
pub fn count_friend_groups<P>(provider: &P) -> usize
where
    P: GraphProvider + ?Sized,
{
    friend_groups(provider).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_three_groups() {
        // 0 - 1      4 - 5       8 - 6
        //            | \         | /
        //            2  3        7
        let mut graph = Graph::new();
        graph.extend_edges([
            (0, 1, 0.0),
            (4, 2, 0.0),
            (4, 3, 0.0),
            (4, 5, 0.0),
            (6, 7, 0.0),
            (7, 8, 0.0),
            (8, 6, 0.0),
        ]);

        assert_eq!(
            friend_groups(&graph),
            vec![vec![0, 1], vec![2, 3, 4, 5], vec![6, 7, 8]]
        );
        assert_eq!(count_friend_groups(&graph), 3);
    }

    #[test]
    fn test_direction_ignored() {
        let mut graph = Graph::new();
        graph.add_edge("b", "a", 1.0);
        graph.add_edge("c", "b", 1.0);

        assert_eq!(friend_groups(&graph), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_isolated_vertices_form_own_groups() {
        let mut graph = Graph::new();
        graph.add_vertex(2).unwrap();
        graph.add_vertex(1).unwrap();
        graph.add_edge(3, 3, 0.0);

        assert_eq!(friend_groups(&graph), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<u8> = Graph::new();
        assert!(friend_groups(&graph).is_empty());
        assert_eq!(count_friend_groups(&graph), 0);
    }
}
