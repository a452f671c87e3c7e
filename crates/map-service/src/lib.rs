//! `map-service` — query façade for the rust_maps engine.
//!
//! # Lifecycle
//!
//! ```text
//! ingestion ──► MapBuilder ──build(MapConfig)──► MapService (immutable)
//!                 │                                 │
//!                 ├─ SpatialGraphBuilder            ├─ shortest_path / navigate / route_many
//!                 ├─ PrefixIndex                    ├─ route_directions
//!                 └─ LocationIndex                  ├─ search_by_prefix / search_by_exact_name
//!                                                   └─ select_tiles / select_tiles_many
//! ```
//!
//! `build` cleans the road graph (isolated nodes are dropped), indexes it
//! with a KD-tree, picks the router named by `MapConfig::algorithm`, and
//! precomputes the tile depth table.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs batch queries on Rayon's thread pool.             |
//! | `serde`    | Serde derives on config, routes, directions, tiles.    |

pub mod builder;
pub mod error;
pub mod service;


pub use builder::MapBuilder;
pub use error::{ServiceError, ServiceResult};
pub use service::MapService;

pub use map_search::normalize_name;
