//! Utility functions for the flat-surface approximation and heading arithmetic

use geo::Point;

/// Kilometers covered by one degree of latitude (flat-surface approximation)
pub const KM_PER_DEGREE_LATITUDE: f64 = 110.901;

/// Kilometers covered by one degree of longitude at the reference latitude (~32.8°N)
pub const KM_PER_DEGREE_LONGITUDE: f64 = 93.681;

/// Number of millionths in a degree, for integer coordinate input
pub const MILLIONTHS_PER_DEGREE: f64 = 1_000_000.0;

/// Full turn in degrees
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Planar offset from `from` to `to` in kilometers
///
/// # Arguments
/// * `from` - Origin point (x = longitude, y = latitude, degrees)
/// * `to` - Destination point (x = longitude, y = latitude, degrees)
///
/// # Returns
/// A tuple of (east, north) displacement in kilometers
#[inline(always)]
pub fn flat_offset_km(from: Point<f64>, to: Point<f64>) -> (f64, f64) {
    let east = (to.x() - from.x()) * KM_PER_DEGREE_LONGITUDE;
    let north = (to.y() - from.y()) * KM_PER_DEGREE_LATITUDE;
    (east, north)
}

/// Flat-surface distance between two points in kilometers
#[inline(always)]
pub fn flat_distance_km(from: Point<f64>, to: Point<f64>) -> f64 {
    let (east, north) = flat_offset_km(from, to);
    east.hypot(north)
}

/// Compass heading from `from` to `to` in degrees, within [0, 360)
///
/// 0 is north and 90 is east. Identical points yield 0.
#[inline(always)]
pub fn flat_heading_degrees(from: Point<f64>, to: Point<f64>) -> f64 {
    let (east, north) = flat_offset_km(from, to);
    normalize_heading(east.atan2(north).to_degrees())
}

/// Wrap an angle in degrees into [0, 360)
#[inline(always)]
pub fn normalize_heading(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid can round a tiny negative input up to exactly 360
    if wrapped >= FULL_TURN_DEGREES {
        0.0
    } else {
        wrapped
    }
}

/// Smallest absolute difference between two headings, in [0, 180]
#[inline]
pub fn heading_difference(a: f64, b: f64) -> f64 {
    let diff = normalize_heading(a - b);
    diff.min(FULL_TURN_DEGREES - diff)
}

/// Convert a millionths-of-degree integer into decimal degrees
#[inline(always)]
pub fn millionths_to_degrees(value: i32) -> f64 {
    value as f64 / MILLIONTHS_PER_DEGREE
}
