//! Example segments for front-ends, tests and benchmarks
//!
//! A small campus street network: a main avenue split into several pieces, side
//! paths branching off it, a ring road closing the loop and one piece listed in
//! both directions.

use crate::{GeoError, GeoPoint, GeoSegment, Result};

/// Named landmarks in millionths of a degree (latitude, longitude)
const POINTS: &[(&str, i32, i32)] = &[
    ("Main Gate", 32_774_500, 35_020_000),
    ("Library", 32_776_000, 35_021_500),
    ("Fountain", 32_777_500, 35_023_000),
    ("Physics Lab", 32_779_000, 35_023_000),
    ("Dormitories", 32_780_500, 35_024_500),
    ("Pool", 32_777_500, 35_026_000),
    ("Stadium", 32_776_000, 35_027_500),
];

/// Segments as (name, from landmark, to landmark)
const SEGMENTS: &[(&str, &str, &str)] = &[
    ("Campus Ave", "Main Gate", "Library"),
    ("Campus Ave", "Library", "Fountain"),
    ("Campus Ave", "Fountain", "Physics Lab"),
    ("Campus Ave", "Physics Lab", "Dormitories"),
    ("Campus Ave", "Fountain", "Library"),
    ("Pool Path", "Fountain", "Pool"),
    ("Pool Path", "Pool", "Stadium"),
    ("Science Walk", "Library", "Physics Lab"),
    ("Science Walk", "Physics Lab", "Pool"),
    ("Ring Rd", "Stadium", "Main Gate"),
    ("Ring Rd", "Dormitories", "Stadium"),
];

/// All sample landmarks with their names
pub fn example_points() -> Result<Vec<(&'static str, GeoPoint)>> {
    POINTS
        .iter()
        .map(|&(name, lat, lon)| Ok((name, GeoPoint::from_millionths(lat, lon)?)))
        .collect()
}

/// Look up a sample landmark by name
pub fn example_point(name: &str) -> Result<GeoPoint> {
    let &(_, lat, lon) = POINTS
        .iter()
        .find(|(candidate, _, _)| *candidate == name)
        .ok_or_else(|| GeoError::InvalidArgument(format!("unknown sample point \"{name}\"")))?;
    GeoPoint::from_millionths(lat, lon)
}

/// All sample segments, in a stable order suitable for index-based picking
pub fn example_segments() -> Result<Vec<GeoSegment>> {
    SEGMENTS
        .iter()
        .map(|&(name, from, to)| GeoSegment::new(name, example_point(from)?, example_point(to)?))
        .collect()
}
