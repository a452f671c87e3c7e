//! The frozen query façade.

use tracing::debug;

use map_core::{GeoPoint, MapConfig, NodeId};
use map_raster::{RasterRequest, TileGrid, TileSelector};
use map_search::{LocationIndex, NamedLocation, PrefixIndex};
use map_spatial::{NavigationDirection, Route, Router, SpatialError, SpatialGraph};

use crate::{ServiceError, ServiceResult};

/// Answers routing, directions, search and tile queries.
///
/// Built by [`MapBuilder`](crate::MapBuilder) and never mutated afterwards.
/// Every query takes `&self`, and the service is `Send + Sync`, so one
/// instance can serve any number of threads without locking.
///
/// # Batches
///
/// [`route_many`](Self::route_many) and
/// [`select_tiles_many`](Self::select_tiles_many) answer a slice of requests
/// and return results in input order.  With the `parallel` feature they run
/// on Rayon (on a dedicated pool when `MapConfig::num_threads` is set).
pub struct MapService {
    pub(crate) graph:     SpatialGraph,
    pub(crate) prefix:    PrefixIndex,
    pub(crate) locations: LocationIndex,
    pub(crate) tiles:     TileSelector,
    pub(crate) router:    Box<dyn Router>,
    pub(crate) config:    MapConfig,
    #[cfg(feature = "parallel")]
    pub(crate) pool:      Option<rayon::ThreadPool>,
}

impl MapService {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn graph(&self) -> &SpatialGraph {
        &self.graph
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn tile_selector(&self) -> &TileSelector {
        &self.tiles
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// The graph node closest to `pos`.
    ///
    /// Non-finite coordinates are rejected before the index is searched.
    pub fn nearest_node(&self, pos: GeoPoint) -> ServiceResult<NodeId> {
        if !pos.is_finite() {
            return Err(ServiceError::InvalidCoordinate(pos));
        }
        Ok(self.graph.nearest_node(pos).ok_or(SpatialError::EmptyNetwork)?)
    }

    /// Snap both coordinates to their nearest nodes and route between them.
    pub fn shortest_path(&self, start: GeoPoint, dest: GeoPoint) -> ServiceResult<Route> {
        let from = self.nearest_node(start)?;
        let to = self.nearest_node(dest)?;
        debug!(%start, %dest, %from, %to, "routing");
        Ok(self.router.route(&self.graph, from, to)?)
    }

    /// Turn-by-turn directions along an already computed node route.
    pub fn route_directions(&self, route: &[NodeId]) -> ServiceResult<Vec<NavigationDirection>> {
        Ok(map_spatial::route_directions(&self.graph, route)?)
    }

    /// [`shortest_path`](Self::shortest_path) followed by
    /// [`route_directions`](Self::route_directions).
    pub fn navigate(
        &self,
        start: GeoPoint,
        dest: GeoPoint,
    ) -> ServiceResult<(Route, Vec<NavigationDirection>)> {
        let route = self.shortest_path(start, dest)?;
        let directions = self.route_directions(&route.nodes)?;
        Ok((route, directions))
    }

    pub fn route_many(&self, pairs: &[(GeoPoint, GeoPoint)]) -> Vec<ServiceResult<Route>> {
        self.run_batch(pairs, |&(start, dest)| self.shortest_path(start, dest))
    }

    // ── Search ────────────────────────────────────────────────────────────

    /// Names of every location whose normalized name starts with the
    /// normalized `prefix`, sorted.
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<String> {
        self.prefix.query(prefix)
    }

    /// Every location registered under exactly `name`.
    pub fn search_by_exact_name(&self, name: &str) -> Vec<NamedLocation> {
        self.locations.lookup(name).into_iter().cloned().collect()
    }

    // ── Tiles ─────────────────────────────────────────────────────────────

    pub fn select_tiles(&self, req: &RasterRequest) -> TileGrid {
        self.tiles.select(req)
    }

    pub fn select_tiles_many(&self, reqs: &[RasterRequest]) -> Vec<TileGrid> {
        self.run_batch(reqs, |req| self.tiles.select(req))
    }

    // ── Batch execution ───────────────────────────────────────────────────

    fn run_batch<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        #[cfg(not(feature = "parallel"))]
        {
            items.iter().map(f).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            match &self.pool {
                Some(pool) => pool.install(|| items.par_iter().map(&f).collect()),
                None => items.par_iter().map(&f).collect(),
            }
        }
    }
}
