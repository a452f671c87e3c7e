//! Two-dimensional KD-tree mapping a coordinate to its nearest graph node.
//!
//! # Layout
//!
//! Tree nodes live in a single `Vec` arena; children are `u32` indices with
//! [`NIL`] meaning "no child".  The first inserted point is the root.  The
//! splitting axis alternates with depth:
//!
//! | depth | axis      |
//! |-------|-----------|
//! | even  | longitude |
//! | odd   | latitude  |
//!
//! Points whose split coordinate is *less* than the node's go left, all
//! others (greater **or equal**) go right.  The tree is never rebalanced, so
//! both insertion and search walk it with explicit loops/stacks rather than
//! recursion: a sorted insertion order degrades it to a list, which must not
//! overflow the call stack.
//!
//! # Metric
//!
//! Comparisons use squared planar distance in degree space (see
//! [`GeoPoint::planar_distance_2`]).  That is only scale-correct locally, but
//! the index is used to snap a click to a nearby road node, where it is.

use map_core::{GeoPoint, NodeId};

/// Child sentinel.
const NIL: u32 = u32::MAX;

struct KdNode {
    id:    NodeId,
    point: GeoPoint,
    left:  u32,
    right: u32,
}

/// Read-only-after-build nearest-neighbor index over graph nodes.
#[derive(Default)]
pub struct KdTree {
    nodes: Vec<KdNode>,
}

#[inline]
fn axis_value(p: GeoPoint, depth: usize) -> f64 {
    if depth % 2 == 0 { p.lon } else { p.lat }
}

impl KdTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { nodes: Vec::with_capacity(n) }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a point.  Duplicate coordinates are allowed and land in the
    /// right subtree of their twin.
    pub fn insert(&mut self, id: NodeId, point: GeoPoint) {
        let new = self.nodes.len() as u32;
        self.nodes.push(KdNode { id, point, left: NIL, right: NIL });
        if new == 0 {
            return;
        }

        let mut cur = 0u32;
        let mut depth = 0usize;
        loop {
            let node = &self.nodes[cur as usize];
            let go_left = axis_value(point, depth) < axis_value(node.point, depth);
            let next = if go_left { node.left } else { node.right };
            if next == NIL {
                let node = &mut self.nodes[cur as usize];
                if go_left {
                    node.left = new;
                } else {
                    node.right = new;
                }
                return;
            }
            cur = next;
            depth += 1;
        }
    }

    /// Return the id of the indexed point closest to `query`.
    ///
    /// Returns `None` only if the tree is empty.  When several points are
    /// equally close, the first one reached by the search wins.
    pub fn nearest(&self, query: GeoPoint) -> Option<NodeId> {
        if self.nodes.is_empty() {
            return None;
        }

        let mut best_idx = 0u32;
        let mut best_2 = f64::INFINITY;

        // (node index, depth, squared distance from query to the parent's
        // splitting plane).  The near child is pushed last so it is explored
        // first; by the time a far child is popped, `best_2` reflects the
        // whole near subtree.
        let mut stack: Vec<(u32, usize, f64)> = Vec::with_capacity(64);
        stack.push((0, 0, 0.0));

        while let Some((idx, depth, plane_2)) = stack.pop() {
            if plane_2 >= best_2 {
                continue;
            }
            let node = &self.nodes[idx as usize];

            let d_2 = node.point.planar_distance_2(query);
            if d_2 < best_2 {
                best_2 = d_2;
                best_idx = idx;
            }

            let diff = axis_value(query, depth) - axis_value(node.point, depth);
            let (near, far) = if diff < 0.0 {
                (node.left, node.right)
            } else {
                (node.right, node.left)
            };
            if far != NIL {
                stack.push((far, depth + 1, diff * diff));
            }
            if near != NIL {
                stack.push((near, depth + 1, 0.0));
            }
        }

        Some(self.nodes[best_idx as usize].id)
    }
}

impl FromIterator<(NodeId, GeoPoint)> for KdTree {
    fn from_iter<I: IntoIterator<Item = (NodeId, GeoPoint)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tree = KdTree::with_capacity(iter.size_hint().0);
        for (id, point) in iter {
            tree.insert(id, point);
        }
        tree
    }
}
