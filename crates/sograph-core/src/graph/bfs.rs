mod path;


use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::types::{Hops, PathResult};
use crate::graph::GraphProvider;
use crate::trace_time;

/// State tracked during BFS traversal.
///
/// A vertex is visited once it has a distance; each vertex is queued at
/// most once, so the search terminates on any finite graph.
struct BfsState<'a, Id> {
    distance: HashMap<&'a Id, u32>,
    predecessors: HashMap<&'a Id, &'a Id>,
    queue: VecDeque<(&'a Id, u32)>,
    /// Vertices in dequeue order with their distance
    order: Vec<(&'a Id, u32)>,
}

impl<'a, Id: crate::graph::VertexId> BfsState<'a, Id> {
    fn new(src: &'a Id) -> Self {
        let mut state = Self {
            distance: HashMap::new(),
            predecessors: HashMap::new(),
            queue: VecDeque::new(),
            order: Vec::new(),
        };
        state.distance.insert(src, 0);
        state.queue.push_back((src, 0));
        state
    }

    fn is_visited(&self, id: &Id) -> bool {
        self.distance.contains_key(id)
    }
}

/// Breadth-first search from `src`, ignoring edge weights.
///
/// With `dst` set, stops as soon as `dst` is marked visited.
fn bfs_search<'a, P>(provider: &'a P, src: &'a P::Id, dst: Option<&P::Id>) -> BfsState<'a, P::Id>
where
    P: GraphProvider + ?Sized,
{
    let start = Instant::now();
    let mut state = BfsState::new(src);

    if dst == Some(src) {
        return state;
    }

    'search: while let Some((current, hops)) = state.queue.pop_front() {
        state.order.push((current, hops));

        for neighbor in provider.outbound(current) {
            if state.is_visited(neighbor) {
                continue;
            }

            state.distance.insert(neighbor, hops + 1);
            state.predecessors.insert(neighbor, current);
            state.queue.push_back((neighbor, hops + 1));

            if dst == Some(neighbor) {
                break 'search;
            }
        }
    }

    trace_time!(start, "bfs_search", visited = state.distance.len());
    state
}

fn ensure_exists<P>(provider: &P, id: &P::Id) -> Result<()>
where
    P: GraphProvider + ?Sized,
{
    if provider.contains(id) {
        Ok(())
    } else {
        Err(GraphError::vertex_not_found(id))
    }
}

/// Minimum number of directed edges from `src` to `dst`.
///
/// Returns `Reachable(0)` when `src == dst` and `Unreachable` when no
/// directed path exists. Fails with [`GraphError::VertexNotFound`] if either
/// endpoint is absent.
#[tracing::instrument(skip_all, fields(src = %src, dst = %dst))]
pub fn shortest_path_hops<P>(provider: &P, src: &P::Id, dst: &P::Id) -> Result<Hops>
where
    P: GraphProvider + ?Sized,
{
    ensure_exists(provider, src)?;
    ensure_exists(provider, dst)?;

    let state = bfs_search(provider, src, Some(dst));
    let hops = Hops::from(state.distance.get(dst).copied());

    debug!(%hops, visited = state.distance.len(), "shortest_path_hops");
    Ok(hops)
}

/// One shortest directed path from `src` to `dst`.
///
/// Neighbors are expanded in ascending identifier order, so among equally
/// short paths the one discovered first is returned.
#[tracing::instrument(skip_all, fields(src = %src, dst = %dst))]
pub fn find_path<P>(provider: &P, src: &P::Id, dst: &P::Id) -> Result<PathResult<P::Id>>
where
    P: GraphProvider + ?Sized,
{
    ensure_exists(provider, src)?;
    ensure_exists(provider, dst)?;

    let state = bfs_search(provider, src, Some(dst));
    let found = state.is_visited(dst);
    let path = if found {
        path::reconstruct_path(src, dst, &state.predecessors)
    } else {
        Vec::new()
    };

    debug!(found, length = path.len(), "find_path");
    Ok(PathResult {
        from: src.clone(),
        to: dst.clone(),
        found,
        path,
    })
}

/// Every vertex reachable from `src`, in BFS dequeue order, with its hop
/// distance. Distances are non-decreasing along the returned list.
#[tracing::instrument(skip_all, fields(src = %src))]
pub fn bfs_distances<P>(provider: &P, src: &P::Id) -> Result<Vec<(P::Id, u32)>>
where
    P: GraphProvider + ?Sized,
{
    ensure_exists(provider, src)?;

    let state = bfs_search(provider, src, None);
    Ok(state
        .order
        .into_iter()
        .map(|(id, hops)| (id.clone(), hops))
        .collect())
}
