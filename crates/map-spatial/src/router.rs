//! Routing trait, A* and Dijkstra implementations.
//!
//! # Pluggability
//!
//! The serving layer calls routing through the [`Router`] trait.  The default
//! is [`AStarRouter`]; [`DijkstraRouter`] runs the same search without a
//! heuristic and is kept as the optimality baseline.
//!
//! # Per-query state
//!
//! Cost-so-far, predecessor and visited flags live in a [`SearchState`]
//! allocated fresh by every call and dropped when it returns.  Nothing is
//! written to the shared [`SpatialGraph`], so any number of queries can run
//! concurrently on one graph.
//!
//! # Costs
//!
//! Edge cost is the great-circle distance between its endpoints, in miles.
//! The A* heuristic is the great-circle distance to the destination, which
//! never exceeds the remaining road distance, so the first time the
//! destination is popped its cost is optimal and closed nodes never need to
//! be reopened.
//!
//! # Determinism
//!
//! Heap entries with equal `f` are popped in ascending `NodeId` order, so
//! the same graph always yields the same route among equal-length ones.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use map_core::{GeoPoint, NodeId, SearchLimits};

use crate::graph::SpatialGraph;
use crate::{SpatialError, SpatialResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Nodes to visit in order, source first, destination last.
    pub nodes: Vec<NodeId>,
    /// Sum of edge lengths along `nodes`, in miles.
    pub total_miles: f64,
}

impl Route {
    /// Number of nodes on the route.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Implementations must be `Send + Sync` so one router can serve concurrent
/// queries from Rayon worker threads.
pub trait Router: Send + Sync {
    /// Compute the shortest route from `from` to `to`.
    ///
    /// `from == to` yields a single-node route of length 0.  A disconnected
    /// pair yields [`SpatialError::NoRoute`], never a partial path.
    fn route(&self, graph: &SpatialGraph, from: NodeId, to: NodeId) -> SpatialResult<Route>;
}

/// A* with the great-circle heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStarRouter {
    pub limits: SearchLimits,
}

impl AStarRouter {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl Router for AStarRouter {
    fn route(&self, graph: &SpatialGraph, from: NodeId, to: NodeId) -> SpatialResult<Route> {
        let target = graph.point(to)?;
        search(graph, from, to, self.limits, |p| p.distance_miles(target))
    }
}

/// Dijkstra's algorithm: A* with a zero heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraRouter {
    pub limits: SearchLimits,
}

impl DijkstraRouter {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl Router for DijkstraRouter {
    fn route(&self, graph: &SpatialGraph, from: NodeId, to: NodeId) -> SpatialResult<Route> {
        graph.point(to)?;
        search(graph, from, to, self.limits, |_| 0.0)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
struct HeapItem {
    node: NodeId,
    /// `g + h`.
    f: f64,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flipped on both keys: BinaryHeap is a max-heap, we want the
        // smallest f, then the smallest node id.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Scratch state for one query.  Missing entries mean "cost +∞",
/// "no predecessor", "not visited".
#[derive(Default)]
struct SearchState {
    cost:    FxHashMap<NodeId, f64>,
    prev:    FxHashMap<NodeId, NodeId>,
    visited: FxHashSet<NodeId>,
    heap:    BinaryHeap<HeapItem>,
}

impl SearchState {
    #[inline]
    fn cost(&self, node: NodeId) -> f64 {
        self.cost.get(&node).copied().unwrap_or(f64::INFINITY)
    }
}

fn search<H>(
    graph: &SpatialGraph,
    from: NodeId,
    to: NodeId,
    limits: SearchLimits,
    heuristic: H,
) -> SpatialResult<Route>
where
    H: Fn(GeoPoint) -> f64,
{
    let start = graph.point(from)?;
    if from == to {
        return Ok(Route { nodes: vec![from], total_miles: 0.0 });
    }

    let mut state = SearchState::default();
    state.cost.insert(from, 0.0);
    state.heap.push(HeapItem { node: from, f: heuristic(start) });

    while let Some(HeapItem { node, .. }) = state.heap.pop() {
        if state.visited.contains(&node) {
            continue;
        }
        if node == to {
            debug!(%from, %to, settled = state.visited.len(), "route found");
            return reconstruct(&state, from, to);
        }

        state.visited.insert(node);
        if let Some(max) = limits.max_settled {
            if state.visited.len() >= max {
                warn!(%from, %to, settled = max, "route search hit its limit");
                return Err(SpatialError::SearchLimitExceeded { from, to, settled: max });
            }
        }

        let here = graph.point(node)?;
        let g = state.cost(node);
        for &next in graph.neighbors(node)? {
            if state.visited.contains(&next) {
                continue;
            }
            let there = graph.point(next)?;
            let new_cost = g + here.distance_miles(there);
            if new_cost < state.cost(next) {
                state.cost.insert(next, new_cost);
                state.prev.insert(next, node);
                state.heap.push(HeapItem { node: next, f: new_cost + heuristic(there) });
            }
        }
    }

    debug!(%from, %to, settled = state.visited.len(), "no route");
    Err(SpatialError::NoRoute { from, to })
}

/// Walk predecessors back from `to`.  The chain must end at `from`;
/// anything else is reported as unreachable.
fn reconstruct(state: &SearchState, from: NodeId, to: NodeId) -> SpatialResult<Route> {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        match state.prev.get(&cur) {
            Some(&p) => {
                nodes.push(p);
                cur = p;
            }
            None => return Err(SpatialError::NoRoute { from, to }),
        }
    }
    nodes.reverse();
    Ok(Route { nodes, total_miles: state.cost(to) })
}
