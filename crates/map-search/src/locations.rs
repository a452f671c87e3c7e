//! Exact-name lookup of named locations.
//!
//! Several locations may share one display name (chain stores, bus stops), so
//! the name table maps a name to a list of ids.  Lookup is on the name exactly
//! as ingested; use [`PrefixIndex`](crate::PrefixIndex) for forgiving search.

use rustc_hash::FxHashMap;

use map_core::{GeoPoint, LocationId};

use crate::{SearchError, SearchResult};

/// A point of interest.  Independent of routing nodes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedLocation {
    pub id: LocationId,
    pub point: GeoPoint,
    pub name: String,
}

impl NamedLocation {
    pub fn lon(&self) -> f64 {
        self.point.lon
    }

    pub fn lat(&self) -> f64 {
        self.point.lat
    }
}

#[derive(Clone, Debug, Default)]
pub struct LocationIndex {
    locations: FxHashMap<LocationId, NamedLocation>,
    /// Display name → ids in registration order.
    by_name: FxHashMap<String, Vec<LocationId>>,
}

impl LocationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Number of distinct names that resolve to at least one location.
    pub fn name_count(&self) -> usize {
        self.by_name.len()
    }

    /// Add a location and register it under its own name.
    pub fn add_location(
        &mut self,
        id: LocationId,
        lon: f64,
        lat: f64,
        name: impl Into<String>,
    ) -> SearchResult<()> {
        if self.locations.contains_key(&id) {
            return Err(SearchError::DuplicateLocation(id));
        }
        let name = name.into();
        self.locations.insert(
            id,
            NamedLocation { id, point: GeoPoint::new(lon, lat), name: name.clone() },
        );
        self.link(name, id);
        Ok(())
    }

    /// Make an existing location reachable under `name` as well.
    pub fn register_location(&mut self, name: impl Into<String>, id: LocationId) -> SearchResult<()> {
        if !self.locations.contains_key(&id) {
            return Err(SearchError::UnknownLocation(id));
        }
        self.link(name.into(), id);
        Ok(())
    }

    fn link(&mut self, name: String, id: LocationId) {
        let ids = self.by_name.entry(name).or_default();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    pub fn get(&self, id: LocationId) -> Option<&NamedLocation> {
        self.locations.get(&id)
    }

    /// Every location registered under exactly `name`, in registration order.
    pub fn lookup(&self, name: &str) -> Vec<&NamedLocation> {
        self.by_name
            .get(name)
            .map(|ids| ids.iter().filter_map(|id| self.locations.get(id)).collect())
            .unwrap_or_default()
    }
}
