//! `map-core` — foundational types for the `rust_maps` query engine.
//!
//! This crate is a dependency of every other `map-*` crate.  It has no
//! `map-*` dependencies and a single required external one (`thiserror`),
//! plus optional `serde`.
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `NodeId`, `WayId`, `LocationId`                            |
//! | [`geo`]    | `GeoPoint` (haversine miles, bearing), `BoundingBox`       |
//! | [`config`] | `MapConfig`, `RasterConfig`, `SearchLimits`, `RoutingAlgorithm` |
//! | [`error`]  | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{MapConfig, RasterConfig, RoutingAlgorithm, SearchLimits};
pub use error::{CoreError, CoreResult};
pub use geo::{BoundingBox, EARTH_RADIUS_MILES, GeoPoint};
pub use ids::{LocationId, NodeId, WayId};
