//! Tile selection.
//!
//! The map is pre-rendered as a quadtree of square images.  Depth `d` splits
//! the root box into `2^d × 2^d` tiles named `d{d}_x{x}_y{y}.png`, with
//! `x` growing eastwards and `y` growing southwards.
//!
//! # Choosing a depth
//!
//! Longitudinal distance per pixel (LonDPP) of a depth-`d` tile is
//! `root_width / tile_size / 2^d`.  The selector picks the shallowest depth
//! whose LonDPP is at most the LonDPP the viewport asks for
//! (`query_width / viewport_px`), capped at `max_depth`.
//!
//! | depth | tiles per side | LonDPP (default root)  |
//! |-------|----------------|------------------------|
//! | 0     | 1              | 3.43e-4                |
//! | 1     | 2              | 1.72e-4                |
//! | …     | …              | halves each level      |
//! | 7     | 128            | 2.68e-6                |
//!
//! # Choosing the window
//!
//! Per axis, count the tile boundaries `root + k·step` (`k = 0..=2^d`) at or
//! before each edge of the query box.  The upper-left count minus one is the
//! first tile; the lower-right count, capped at `2^d`, minus one is the last.
//! Boundaries are computed by multiplication so no error accumulates across
//! deep levels.

use tracing::debug;

use map_core::{BoundingBox, RasterConfig};

use crate::RasterResult;

// ── Request / response ────────────────────────────────────────────────────────

/// A viewport: the geographic box it shows and its width in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterRequest {
    pub ullon: f64,
    pub ullat: f64,
    pub lrlon: f64,
    pub lrlat: f64,
    /// Viewport width in pixels.
    pub width: f64,
}

impl RasterRequest {
    pub fn new(bbox: BoundingBox, width: f64) -> Self {
        Self {
            ullon: bbox.ullon,
            ullat: bbox.ullat,
            lrlon: bbox.lrlon,
            lrlat: bbox.lrlat,
            width,
        }
    }

    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(self.ullon, self.ullat, self.lrlon, self.lrlat)
    }
}

/// Tiles to draw, in row-major order (row 0 is the northernmost), and the
/// exact area they cover.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    pub render_grid: Vec<Vec<String>>,
    pub raster_ul_lon: f64,
    pub raster_ul_lat: f64,
    pub raster_lr_lon: f64,
    pub raster_lr_lat: f64,
    pub depth: u8,
    pub query_success: bool,
}

impl TileGrid {
    /// The answer to a query that cannot be served.
    pub fn rejected() -> Self {
        Self {
            render_grid: Vec::new(),
            raster_ul_lon: 0.0,
            raster_ul_lat: 0.0,
            raster_lr_lon: 0.0,
            raster_lr_lat: 0.0,
            depth: 0,
            query_success: false,
        }
    }

    pub fn rows(&self) -> usize {
        self.render_grid.len()
    }

    pub fn cols(&self) -> usize {
        self.render_grid.first().map_or(0, Vec::len)
    }

    /// Area covered by the selected tiles.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            self.raster_ul_lon,
            self.raster_ul_lat,
            self.raster_lr_lon,
            self.raster_lr_lat,
        )
    }
}

pub fn tile_file_name(depth: u8, x: u32, y: u32) -> String {
    format!("d{depth}_x{x}_y{y}.png")
}

// ── TileSelector ──────────────────────────────────────────────────────────────

/// Immutable tile selector.  Build once, share freely.
#[derive(Clone, Debug)]
pub struct TileSelector {
    config: RasterConfig,
    /// `depth_lon_dpp[d]` = LonDPP of a depth-`d` tile, `d = 0..=max_depth`.
    depth_lon_dpp: Vec<f64>,
}

impl TileSelector {
    pub fn new(config: RasterConfig) -> RasterResult<Self> {
        config.validate()?;

        let mut depth_lon_dpp = Vec::with_capacity(config.max_depth as usize + 1);
        depth_lon_dpp.push(config.root.width() / f64::from(config.tile_size));
        for d in 1..=config.max_depth as usize {
            depth_lon_dpp.push(depth_lon_dpp[d - 1] / 2.0);
        }

        Ok(Self { config, depth_lon_dpp })
    }

    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    pub fn depth_lon_dpp(&self) -> &[f64] {
        &self.depth_lon_dpp
    }

    /// Shallowest depth whose LonDPP does not exceed `requested`.
    pub fn depth_for(&self, requested_lon_dpp: f64) -> u8 {
        self.depth_lon_dpp
            .iter()
            .position(|&dpp| dpp <= requested_lon_dpp)
            .map_or(self.config.max_depth, |d| d as u8)
    }

    pub fn select(&self, req: &RasterRequest) -> TileGrid {
        let root = self.config.root;
        let query = req.bbox();

        if query.is_degenerate()
            || root.is_disjoint(&query)
            || !req.width.is_finite()
            || req.width <= 0.0
        {
            debug!(?req, "tile query rejected");
            return TileGrid::rejected();
        }

        let depth = self.depth_for(query.width() / req.width);
        let tiles = 1u32 << depth;
        let x_step = root.width() / f64::from(tiles);
        let y_step = (root.lrlat - root.ullat) / f64::from(tiles);

        let lon_at = |k: u32| root.ullon + f64::from(k) * x_step;
        let lat_at = |k: u32| root.ullat + f64::from(k) * y_step;

        // Boundaries at or before each edge.  Latitude runs southwards, so
        // "before" means "at or north of".
        let count_lon = |edge: f64| boundaries_before(tiles, |k| lon_at(k) <= edge);
        let count_lat = |edge: f64| boundaries_before(tiles, |k| lat_at(k) >= edge);

        let first = |count: u32| count.min(tiles).saturating_sub(1);
        let x_left = first(count_lon(query.ullon));
        let x_right = first(count_lon(query.lrlon));
        let y_upper = first(count_lat(query.ullat));
        let y_lower = first(count_lat(query.lrlat));

        let render_grid = (y_upper..=y_lower)
            .map(|y| (x_left..=x_right).map(|x| tile_file_name(depth, x, y)).collect())
            .collect();

        TileGrid {
            render_grid,
            raster_ul_lon: lon_at(x_left),
            raster_ul_lat: lat_at(y_upper),
            raster_lr_lon: lon_at(x_right + 1),
            raster_lr_lat: lat_at(y_lower + 1),
            depth,
            query_success: true,
        }
    }
}

/// Number of `k` in `0..=tiles` for which `before(k)` holds.  `before` must be
/// true on a prefix of that range and false after it.
fn boundaries_before(tiles: u32, before: impl Fn(u32) -> bool) -> u32 {
    let (mut lo, mut hi) = (0u32, tiles + 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if before(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}
