//! Spatial-subsystem error type.

use thiserror::Error;

use map_core::{NodeId, WayId};

/// Errors produced by `map-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("way {0} not found in graph")]
    WayNotFound(WayId),

    #[error("node {0} was already added")]
    DuplicateNode(NodeId),

    #[error("way {0} was already added")]
    DuplicateWay(WayId),

    #[error("graph has no nodes to snap to")]
    EmptyNetwork,

    #[error("route search from {from} to {to} gave up after settling {settled} nodes")]
    SearchLimitExceeded { from: NodeId, to: NodeId, settled: usize },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
