//! Ingestion builder for a [`MapService`].

use tracing::{debug, info};

use map_core::{LocationId, MapConfig, NodeId, RoutingAlgorithm, WayId};
use map_raster::TileSelector;
use map_search::{LocationIndex, PrefixIndex};
use map_spatial::{AStarRouter, DijkstraRouter, Router, SpatialGraphBuilder};

#[cfg(feature = "parallel")]
use crate::ServiceError;
use crate::{MapService, ServiceResult};

/// Collects everything the ingestion collaborator supplies, then freezes it.
///
/// | Method                       | Feeds                               |
/// |------------------------------|-------------------------------------|
/// | `.add_node(..)`              | road graph                          |
/// | `.add_way(..)`               | road graph                          |
/// | `.add_adjacency(..)`         | road graph (both directions)        |
/// | `.associate_node_with_way(..)` | road graph                        |
/// | `.add_location(..)`          | exact-name table and prefix index   |
/// | `.register_location(..)`     | exact-name table and prefix index   |
///
/// # Example
///
/// ```
/// use map_core::{GeoPoint, MapConfig, NodeId};
/// use map_service::MapBuilder;
///
/// let mut b = MapBuilder::new();
/// b.add_node(NodeId(1), -122.26, 37.87)?;
/// b.add_node(NodeId(2), -122.25, 37.87)?;
/// b.add_adjacency(NodeId(1), NodeId(2))?;
/// let map = b.build(MapConfig::default())?;
///
/// let route = map.shortest_path(GeoPoint::new(-122.261, 37.87), GeoPoint::new(-122.249, 37.87))?;
/// assert_eq!(route.nodes, vec![NodeId(1), NodeId(2)]);
/// # Ok::<(), map_service::ServiceError>(())
/// ```
#[derive(Default)]
pub struct MapBuilder {
    graph:     SpatialGraphBuilder,
    prefix:    PrefixIndex,
    locations: LocationIndex,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate the road graph for the expected number of nodes and ways.
    pub fn with_capacity(nodes: usize, ways: usize) -> Self {
        Self {
            graph: SpatialGraphBuilder::with_capacity(nodes, ways),
            ..Self::default()
        }
    }

    pub fn add_node(&mut self, id: NodeId, lon: f64, lat: f64) -> ServiceResult<()> {
        Ok(self.graph.add_node(id, lon, lat)?)
    }

    pub fn add_way(
        &mut self,
        id: WayId,
        name: Option<String>,
        highway: Option<String>,
        max_speed: Option<String>,
    ) -> ServiceResult<()> {
        Ok(self.graph.add_way(id, name, highway, max_speed)?)
    }

    pub fn add_adjacency(&mut self, a: NodeId, b: NodeId) -> ServiceResult<()> {
        Ok(self.graph.add_adjacency(a, b)?)
    }

    pub fn associate_node_with_way(&mut self, node: NodeId, way: WayId) -> ServiceResult<()> {
        Ok(self.graph.associate_node_with_way(node, way)?)
    }

    /// Add a named location.  It becomes searchable by prefix and by exact
    /// name.
    pub fn add_location(
        &mut self,
        id: LocationId,
        lon: f64,
        lat: f64,
        name: &str,
    ) -> ServiceResult<()> {
        self.locations.add_location(id, lon, lat, name)?;
        self.prefix.insert(name);
        Ok(())
    }

    /// Make an already-added location findable under another `name`.
    pub fn register_location(&mut self, name: &str, id: LocationId) -> ServiceResult<()> {
        self.locations.register_location(name, id)?;
        self.prefix.insert(name);
        Ok(())
    }

    /// Validate `config`, clean and index the graph, and return the frozen
    /// service.
    pub fn build(self, config: MapConfig) -> ServiceResult<MapService> {
        config.validate()?;

        let graph = self.graph.build();
        let tiles = TileSelector::new(config.raster.clone())?;

        let router: Box<dyn Router> = match config.algorithm {
            RoutingAlgorithm::AStar => Box::new(AStarRouter::new(config.search)),
            RoutingAlgorithm::Dijkstra => Box::new(DijkstraRouter::new(config.search)),
        };

        #[cfg(feature = "parallel")]
        let pool = match config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| ServiceError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };
        if cfg!(not(feature = "parallel")) && config.num_threads.is_some() {
            debug!("num_threads is ignored without the `parallel` feature");
        }

        info!(
            names = self.prefix.len(),
            locations = self.locations.len(),
            algorithm = ?config.algorithm,
            "built map service"
        );

        Ok(MapService {
            graph,
            prefix: self.prefix,
            locations: self.locations,
            tiles,
            router,
            config,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
