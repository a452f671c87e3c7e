//! `map-spatial` — road graph, nearest-node index, routing, and directions.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`graph`]      | `SpatialGraph`, `SpatialGraphBuilder`, `Node`, `Way`      |
//! | [`kdtree`]     | `KdTree` nearest-node index                               |
//! | [`router`]     | `Router` trait, `Route`, `AStarRouter`, `DijkstraRouter`  |
//! | [`directions`] | `route_directions`, `NavigationDirection`, `Direction`    |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod directions;
pub mod error;
pub mod graph;
pub mod kdtree;
pub mod router;

#[cfg(test)]
mod tests;

pub use directions::{
    Direction, DirectionParseError, NavigationDirection, UNKNOWN_ROAD, route_directions,
};
pub use error::{SpatialError, SpatialResult};
pub use graph::{Node, SpatialGraph, SpatialGraphBuilder, Way};
pub use kdtree::KdTree;
pub use router::{AStarRouter, DijkstraRouter, Route, Router};
