//! Geographic coordinate types and great-circle math.
//!
//! `GeoPoint` stores `f64` longitude/latitude.  Distances are in **miles**
//! (Earth radius 3963 mi) and bearings in degrees.  Routing costs, the A*
//! heuristic and turn classification all go through the two functions here,
//! so their arithmetic is kept in one place and in a fixed operation order.

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3963.0;

/// A WGS-84 coordinate.  Note the argument order of [`GeoPoint::new`]:
/// longitude first, matching the `(x, y)` convention of the tile grid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Haversine great-circle distance in miles.
    ///
    /// ```text
    /// a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
    /// d = 2 · R · atan2(√a, √(1−a))
    /// ```
    ///
    /// Symmetric bit for bit: swapping the points only negates the deltas,
    /// and both are squared through `sin`.
    pub fn distance_miles(self, other: GeoPoint) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_phi = (other.lat - self.lat).to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        let mut a = (d_phi / 2.0).sin() * (d_phi / 2.0).sin();
        a += phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin() * (d_lambda / 2.0).sin();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_MILES * c
    }

    /// Initial bearing in degrees of the great-circle path towards `other`,
    /// in `[-180, 180]` (0 = north, 90 = east).
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let lambda1 = self.lon.to_radians();
        let lambda2 = other.lon.to_radians();

        let y = (lambda2 - lambda1).sin() * phi2.cos();
        let mut x = phi1.cos() * phi2.sin();
        x -= phi1.sin() * phi2.cos() * (lambda2 - lambda1).cos();
        y.atan2(x).to_degrees()
    }

    /// Squared planar distance in degree space.  Only meaningful for
    /// comparing nearby candidates; used by the nearest-node index.
    #[inline]
    pub fn planar_distance_2(self, other: GeoPoint) -> f64 {
        let d_lon = self.lon - other.lon;
        let d_lat = self.lat - other.lat;
        d_lon * d_lon + d_lat * d_lat
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// Axis-aligned box given by its upper-left and lower-right corners.
///
/// Latitude decreases downwards, so a well-formed box has
/// `ullon < lrlon` and `ullat > lrlat`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub ullon: f64,
    pub ullat: f64,
    pub lrlon: f64,
    pub lrlat: f64,
}

impl BoundingBox {
    pub fn new(ullon: f64, ullat: f64, lrlon: f64, lrlat: f64) -> Self {
        Self { ullon, ullat, lrlon, lrlat }
    }

    /// Longitudinal extent (positive for a well-formed box).
    #[inline]
    pub fn width(&self) -> f64 {
        self.lrlon - self.ullon
    }

    /// Latitudinal extent (positive for a well-formed box).
    #[inline]
    pub fn height(&self) -> f64 {
        self.ullat - self.lrlat
    }

    /// `true` if the box has zero or negative extent on either axis, or any
    /// coordinate is not finite.
    pub fn is_degenerate(&self) -> bool {
        let finite = self.ullon.is_finite()
            && self.ullat.is_finite()
            && self.lrlon.is_finite()
            && self.lrlat.is_finite();
        !finite || self.ullon >= self.lrlon || self.ullat <= self.lrlat
    }

    /// `true` if the two boxes share no area on at least one axis.
    /// Touching edges count as disjoint.
    pub fn is_disjoint(&self, other: &BoundingBox) -> bool {
        other.lrlat >= self.ullat
            || other.lrlon <= self.ullon
            || other.ullat <= self.lrlat
            || other.ullon >= self.lrlon
    }
}
