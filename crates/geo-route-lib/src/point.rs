//! Geographic point storage and validation
//!
//! This module provides the `GeoPoint` value type: a validated latitude/longitude
//! pair with flat-surface distance and heading computations.

use crate::{GeoError, Result, utils};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Inclusive coordinate bounds enforced when constructing a [`GeoPoint`]
///
/// Fields are public for `const` construction; [`PointBounds::new`] checks them.
/// [`GeoPoint::with_bounds`] refuses bounds that fail [`PointBounds::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointBounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl PointBounds {
    /// Full WGS84 range: latitude in [-90, 90], longitude in [-180, 180]
    pub const WGS84: PointBounds = PointBounds {
        min_latitude: -90.0,
        max_latitude: 90.0,
        min_longitude: -180.0,
        max_longitude: 180.0,
    };

    /// Create bounds, rejecting NaN limits and empty (min > max) ranges
    pub fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Result<Self> {
        let bounds = Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        };
        if !bounds.is_valid() {
            return Err(GeoError::InvalidArgument(format!("invalid bounds {bounds}")));
        }
        Ok(bounds)
    }

    /// True when neither range is empty and no limit is NaN
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min_latitude <= self.max_latitude && self.min_longitude <= self.max_longitude
    }

    /// Check whether the coordinate pair lies inside these bounds
    #[inline]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&latitude)
            && (self.min_longitude..=self.max_longitude).contains(&longitude)
    }
}

impl fmt::Display for PointBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.min_latitude, self.max_latitude, self.min_longitude, self.max_longitude
        )
    }
}

impl Default for PointBounds {
    fn default() -> Self {
        Self::WGS84
    }
}

/// An immutable geographic coordinate in decimal degrees
///
/// Equality is exact coordinate equality, without tolerance.
#[derive(Clone, Copy, Debug)]
pub struct GeoPoint {
    /// x = longitude, y = latitude
    point: geo::Point<f64>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl GeoPoint {
    /// Create a point within the default WGS84 bounds
    ///
    /// # Arguments
    /// * `latitude` - Degrees north, in [-90, 90]
    /// * `longitude` - Degrees east, in [-180, 180]
    ///
    /// # Returns
    /// The point, or `InvalidArgument` for non-finite or out-of-range input
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Self::with_bounds(latitude, longitude, &PointBounds::WGS84)
    }

    /// Create a point validated against caller-chosen bounds
    pub fn with_bounds(latitude: f64, longitude: f64, bounds: &PointBounds) -> Result<Self> {
        if !bounds.is_valid() {
            return Err(GeoError::InvalidArgument(format!("invalid bounds {bounds}")));
        }
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeoError::InvalidArgument(format!(
                "non-finite coordinate ({latitude}, {longitude})"
            )));
        }
        if !bounds.contains(latitude, longitude) {
            return Err(GeoError::InvalidArgument(format!(
                "coordinate ({latitude}, {longitude}) outside {bounds}"
            )));
        }

        // Normalise -0.0 so equality and hashing agree
        Ok(Self {
            point: geo::Point::new(longitude + 0.0, latitude + 0.0),
        })
    }

    /// Create a point from integer millionths of a degree
    pub fn from_millionths(latitude_e6: i32, longitude_e6: i32) -> Result<Self> {
        Self::new(
            utils::millionths_to_degrees(latitude_e6),
            utils::millionths_to_degrees(longitude_e6),
        )
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.point.y()
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.point.x()
    }

    /// The point as a `geo` point (x = longitude, y = latitude)
    #[inline]
    pub fn as_geo_point(&self) -> geo::Point<f64> {
        self.point
    }

    /// Flat-surface distance to `other` in kilometers
    ///
    /// Non-negative and symmetric.
    #[inline]
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        utils::flat_distance_km(self.point, other.point)
    }

    /// Compass heading towards `other` in degrees, within [0, 360)
    ///
    /// When `other == self` the value carries no meaning; it is finite and the
    /// call never fails.
    #[inline]
    pub fn heading_to(&self, other: &GeoPoint) -> f64 {
        utils::flat_heading_degrees(self.point, other.point)
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

// Construction rejects NaN, so equality is reflexive
impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.point.x().to_bits().hash(state);
        self.point.y().to_bits().hash(state);
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        point.point
    }
}

impl From<GeoPoint> for geo::Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        point.point.0
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.latitude(), self.longitude())
    }
}
