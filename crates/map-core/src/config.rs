//! Startup configuration.
//!
//! Everything here is fixed once at startup and then shared read-only by all
//! queries.  Typically loaded from a JSON/TOML file by the application crate
//! (with the `serde` feature) and passed to `MapBuilder::build`.

use crate::{BoundingBox, CoreError, CoreResult};

// ── RasterConfig ──────────────────────────────────────────────────────────────

/// Static inputs of the tile selector.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RasterConfig {
    /// Area covered by the single depth-0 tile.
    pub root: BoundingBox,

    /// Native edge length of one tile image, in pixels.
    pub tile_size: u32,

    /// Deepest zoom level available on disk.  Depth `d` has `2^d × 2^d` tiles.
    pub max_depth: u8,
}

impl RasterConfig {
    pub const DEFAULT_ROOT: BoundingBox = BoundingBox {
        ullon: -122.2998046875,
        ullat: 37.892195547244356,
        lrlon: -122.2119140625,
        lrlat: 37.82280243352756,
    };

    pub const DEFAULT_TILE_SIZE: u32 = 256;
    pub const DEFAULT_MAX_DEPTH: u8 = 7;

    /// Upper bound on `max_depth`; keeps `2^depth` well inside `u32`.
    pub const DEPTH_LIMIT: u8 = 30;

    pub fn validate(&self) -> CoreResult<()> {
        if self.root.is_degenerate() {
            return Err(CoreError::Config(format!(
                "raster root box is degenerate: {:?}",
                self.root
            )));
        }
        if self.tile_size == 0 {
            return Err(CoreError::Config("tile_size must be positive".into()));
        }
        if self.max_depth > Self::DEPTH_LIMIT {
            return Err(CoreError::Config(format!(
                "max_depth {} exceeds limit {}",
                self.max_depth,
                Self::DEPTH_LIMIT
            )));
        }
        Ok(())
    }
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            root:      Self::DEFAULT_ROOT,
            tile_size: Self::DEFAULT_TILE_SIZE,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

// ── SearchLimits ──────────────────────────────────────────────────────────────

/// Per-query work bound for path search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchLimits {
    /// Stop a route query after settling this many nodes.  `None` = unbounded.
    pub max_settled: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self { max_settled: None }
    }

    pub fn with_max_settled(max_settled: usize) -> Self {
        Self { max_settled: Some(max_settled) }
    }
}

// ── RoutingAlgorithm ──────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoutingAlgorithm {
    /// Great-circle heuristic.
    #[default]
    AStar,
    /// No heuristic.  Same results, more nodes settled.
    Dijkstra,
}

// ── MapConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration of a map service.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    pub raster: RasterConfig,

    pub search: SearchLimits,

    pub algorithm: RoutingAlgorithm,

    /// Worker thread count for batch queries.  `None` uses Rayon's global pool.
    pub num_threads: Option<usize>,
}

impl MapConfig {
    pub fn validate(&self) -> CoreResult<()> {
        self.raster.validate()?;
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be at least 1".into()));
        }
        if self.search.max_settled == Some(0) {
            return Err(CoreError::Config("search.max_settled must be at least 1".into()));
        }
        Ok(())
    }
}
