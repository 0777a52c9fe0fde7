//! Text panels for the application
//!
//! The segment list mirrors the picker, the route panel shows the route one
//! feature per line. Panels only read from the route.

use geo_route_lib::{GeoSegment, Route, utils};
use std::io::{self, Write};

/// Headings closer than this are reported as "continue straight"
const STRAIGHT_TOLERANCE_DEGREES: f64 = 10.0;

/// Render the numbered list of pickable segments
pub fn render_segment_list(out: &mut impl Write, segments: &[GeoSegment]) -> io::Result<()> {
    writeln!(out, "GeoSegments:")?;
    for (index, segment) in segments.iter().enumerate() {
        writeln!(
            out,
            "{index:>3}  {segment}  {:.3} km @ {:.0}°",
            segment.length(),
            segment.heading()
        )?;
    }
    Ok(())
}

/// Render the route panel: one line per feature, then the total
pub fn render_route(out: &mut impl Write, route: &Route) -> io::Result<()> {
    writeln!(out, "Route ({} segments):", route.segment_count())?;

    let mut previous_heading: Option<f64> = None;
    for feature in route.geo_features() {
        let turn = previous_heading
            .map(|heading| describe_turn(heading, feature.start_heading()))
            .unwrap_or("start");
        writeln!(
            out,
            "  {turn:<8} {:<16} {:>8.3} km  {:>3.0}° -> {:>3.0}°",
            feature.name(),
            feature.length(),
            feature.start_heading(),
            feature.end_heading()
        )?;
        previous_heading = Some(feature.end_heading());
    }

    writeln!(out, "Total: {:.3} km", route.length())
}

/// Render the route as (lon, lat) pairs
pub fn render_line_string(out: &mut impl Write, route: &Route) -> io::Result<()> {
    let line: geo::LineString<f64> = route.to_line_string();
    let coords: Vec<String> = line
        .coords()
        .map(|c| format!("({:.6}, {:.6})", c.x, c.y))
        .collect();
    writeln!(out, "LineString: {}", coords.join(" "))
}

/// Classify the change of direction between two headings
pub fn describe_turn(from_heading: f64, to_heading: f64) -> &'static str {
    if utils::heading_difference(from_heading, to_heading) <= STRAIGHT_TOLERANCE_DEGREES {
        return "straight";
    }
    // Clockwise offset in (0, 360): below 180 turns right
    let offset = utils::normalize_heading(to_heading - from_heading);
    if offset < 180.0 { "right" } else { "left" }
}
