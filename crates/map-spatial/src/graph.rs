//! Road graph representation and builder.
//!
//! # Data layout
//!
//! Nodes and ways are arenas keyed by their ingestion ids
//! (`FxHashMap<NodeId, Node>`, `FxHashMap<WayId, Way>`).  Membership is
//! expressed as id lists in both directions: a node lists the ways it belongs
//! to, a way lists its member nodes in order.  No object holds a reference to
//! another, so the whole graph is plain owned data and is `Send + Sync`.
//!
//! A separate `order` vector remembers ingestion order so that
//! [`SpatialGraph::vertices`] (and everything built from it, such as the
//! KD-tree) is deterministic from run to run.
//!
//! # Lifecycle
//!
//! The ingestion collaborator drives a [`SpatialGraphBuilder`].  `build()`
//! runs the one-time cleanup pass (nodes with no neighbors are dropped; they
//! can never be part of a route and must not be snap targets), then indexes
//! the survivors in a [`KdTree`].  The resulting [`SpatialGraph`] is never
//! mutated again.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use map_core::{GeoPoint, NodeId, WayId};

use crate::kdtree::KdTree;
use crate::{SpatialError, SpatialResult};

// ── Node / Way ────────────────────────────────────────────────────────────────

/// A routing node.  Holds no per-query state.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub point: GeoPoint,
    /// Adjacent nodes in insertion order, without duplicates.
    pub neighbors: Vec<NodeId>,
    /// Ways this node belongs to, in association order.
    pub way_ids: Vec<WayId>,
}

/// A road or path.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Way {
    pub id: WayId,
    pub name: Option<String>,
    /// Highway classification tag (`"residential"`, `"primary"`, …).
    pub highway: Option<String>,
    /// Speed limit as supplied by the source, e.g. `"25 mph"`.
    pub max_speed: Option<String>,
    /// Member nodes in order along the way.
    pub nodes: Vec<NodeId>,
}

// ── SpatialGraph ──────────────────────────────────────────────────────────────

/// Undirected road graph plus a KD-tree for snapping coordinates to nodes.
///
/// Do not construct directly; use [`SpatialGraphBuilder`].
pub struct SpatialGraph {
    order: Vec<NodeId>,
    nodes: FxHashMap<NodeId, Node>,
    ways: FxHashMap<WayId, Way>,
    spatial_idx: KdTree,
}

impl SpatialGraph {
    /// Construct an empty graph.  Every routing request against it fails
    /// with [`SpatialError::EmptyNetwork`] or [`SpatialError::NodeNotFound`].
    pub fn empty() -> Self {
        SpatialGraphBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn way_count(&self) -> usize {
        self.ways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// All node ids in ingestion order.  Call again to restart.
    pub fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn way(&self, id: WayId) -> Option<&Way> {
        self.ways.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    #[inline]
    fn get(&self, id: NodeId) -> SpatialResult<&Node> {
        self.nodes.get(&id).ok_or(SpatialError::NodeNotFound(id))
    }

    pub fn point(&self, id: NodeId) -> SpatialResult<GeoPoint> {
        self.get(id).map(|n| n.point)
    }

    pub fn neighbors(&self, id: NodeId) -> SpatialResult<&[NodeId]> {
        self.get(id).map(|n| n.neighbors.as_slice())
    }

    pub fn ways_of(&self, id: NodeId) -> SpatialResult<&[WayId]> {
        self.get(id).map(|n| n.way_ids.as_slice())
    }

    /// Name of a way, or `None` if the way is unknown or unnamed.
    pub fn way_name(&self, id: WayId) -> Option<&str> {
        self.ways.get(&id).and_then(|w| w.name.as_deref())
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// Great-circle distance between two nodes, in miles.
    pub fn distance(&self, v: NodeId, w: NodeId) -> SpatialResult<f64> {
        Ok(self.point(v)?.distance_miles(self.point(w)?))
    }

    /// Initial bearing from `v` towards `w`, in degrees.
    pub fn bearing(&self, v: NodeId, w: NodeId) -> SpatialResult<f64> {
        Ok(self.point(v)?.bearing_deg(self.point(w)?))
    }

    /// The way shared by both endpoints of edge `(u, v)`.
    ///
    /// If several ways qualify, the first one in `u`'s association order
    /// that `v` also lists is returned.
    pub fn common_way(&self, u: NodeId, v: NodeId) -> SpatialResult<Option<WayId>> {
        let u_ways = self.ways_of(u)?;
        let v_ways = self.ways_of(v)?;
        Ok(u_ways.iter().copied().find(|w| v_ways.contains(w)))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the node closest to `pos`.  `None` only if the graph is empty.
    pub fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx.nearest(pos)
    }
}

// ── SpatialGraphBuilder ───────────────────────────────────────────────────────

/// Construct a [`SpatialGraph`] incrementally, then call [`build`](Self::build).
///
/// Every mutator validates its ids first and leaves the builder untouched on
/// error, so a malformed ingestion record cannot corrupt the graph.
///
/// # Example
///
/// ```
/// use map_core::{NodeId, WayId};
/// use map_spatial::SpatialGraphBuilder;
///
/// let mut b = SpatialGraphBuilder::new();
/// b.add_node(NodeId(1), -122.26, 37.87).unwrap();
/// b.add_node(NodeId(2), -122.25, 37.87).unwrap();
/// b.add_node(NodeId(3), -122.24, 37.87).unwrap(); // never connected
/// b.add_adjacency(NodeId(1), NodeId(2)).unwrap();
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2); // isolated node 3 is cleaned away
/// assert_eq!(graph.neighbors(NodeId(2)).unwrap(), &[NodeId(1)]);
/// ```
#[derive(Default)]
pub struct SpatialGraphBuilder {
    order: Vec<NodeId>,
    nodes: FxHashMap<NodeId, Node>,
    ways:  FxHashMap<WayId, Way>,
}

impl SpatialGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of nodes and ways.
    pub fn with_capacity(nodes: usize, ways: usize) -> Self {
        let mut node_map = FxHashMap::default();
        node_map.reserve(nodes);
        let mut way_map = FxHashMap::default();
        way_map.reserve(ways);
        Self {
            order: Vec::with_capacity(nodes),
            nodes: node_map,
            ways:  way_map,
        }
    }

    pub fn node_count(&self) -> usize { self.order.len() }
    pub fn way_count(&self) -> usize { self.ways.len() }

    pub fn add_node(&mut self, id: NodeId, lon: f64, lat: f64) -> SpatialResult<()> {
        if self.nodes.contains_key(&id) {
            return Err(SpatialError::DuplicateNode(id));
        }
        self.nodes.insert(
            id,
            Node {
                id,
                point: GeoPoint::new(lon, lat),
                neighbors: Vec::new(),
                way_ids: Vec::new(),
            },
        );
        self.order.push(id);
        Ok(())
    }

    pub fn add_way(
        &mut self,
        id: WayId,
        name: Option<String>,
        highway: Option<String>,
        max_speed: Option<String>,
    ) -> SpatialResult<()> {
        if self.ways.contains_key(&id) {
            return Err(SpatialError::DuplicateWay(id));
        }
        self.ways.insert(id, Way { id, name, highway, max_speed, nodes: Vec::new() });
        Ok(())
    }

    /// Connect `a` and `b` in **both directions**.
    ///
    /// Repeated calls for the same pair are no-ops; self-loops are ignored
    /// (they can never shorten a route).
    pub fn add_adjacency(&mut self, a: NodeId, b: NodeId) -> SpatialResult<()> {
        if !self.nodes.contains_key(&a) {
            return Err(SpatialError::NodeNotFound(a));
        }
        if !self.nodes.contains_key(&b) {
            return Err(SpatialError::NodeNotFound(b));
        }
        if a == b {
            debug!(node = %a, "ignoring self-loop adjacency");
            return Ok(());
        }
        for (from, to) in [(a, b), (b, a)] {
            if let Some(node) = self.nodes.get_mut(&from) {
                if !node.neighbors.contains(&to) {
                    node.neighbors.push(to);
                }
            }
        }
        Ok(())
    }

    /// Record that `node` lies on `way`.
    pub fn associate_node_with_way(&mut self, node: NodeId, way: WayId) -> SpatialResult<()> {
        if !self.nodes.contains_key(&node) {
            return Err(SpatialError::NodeNotFound(node));
        }
        let Some(w) = self.ways.get_mut(&way) else {
            return Err(SpatialError::WayNotFound(way));
        };
        w.nodes.push(node);
        if let Some(n) = self.nodes.get_mut(&node) {
            n.way_ids.push(way);
        }
        Ok(())
    }

    /// Consume the builder: drop isolated nodes, then index the rest.
    pub fn build(self) -> SpatialGraph {
        let Self { order, mut nodes, mut ways } = self;
        let before = order.len();

        // ── Cleanup: remove nodes with no neighbors ───────────────────────
        let order: Vec<NodeId> = order
            .into_iter()
            .filter(|id| {
                let keep = nodes.get(id).is_some_and(|n| !n.neighbors.is_empty());
                if !keep {
                    nodes.remove(id);
                }
                keep
            })
            .collect();

        for way in ways.values_mut() {
            way.nodes.retain(|id| nodes.contains_key(id));
        }

        // ── Spatial index over the surviving node set ─────────────────────
        let spatial_idx: KdTree = order
            .iter()
            .map(|id| (*id, nodes[id].point))
            .collect();

        info!(
            nodes = order.len(),
            removed = before - order.len(),
            ways = ways.len(),
            "built spatial graph"
        );

        SpatialGraph { order, nodes, ways, spatial_idx }
    }
}
