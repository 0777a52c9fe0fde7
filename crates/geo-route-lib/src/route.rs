//! Route storage and incremental feature grouping
//!
//! This module provides the `Route` struct: a contiguous path over arbitrary
//! segments, viewed both as a flat segment sequence and as a sequence of maximal
//! same-named [`GeoFeature`]s. Appending returns a new route with the grouping
//! extended by one step.

use crate::feature::path_line_string;
use crate::{GeoError, GeoFeature, GeoPoint, GeoSegment, Result, Segments};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Lazy, restartable iterator over features in travel order
pub type Features<'a> = std::slice::Iter<'a, GeoFeature>;

/// An immutable path that traverses segments regardless of their names
///
/// No two consecutive features share a name, and the features concatenated
/// segment-wise reproduce the flat segment sequence exactly.
#[derive(Clone, Debug)]
pub struct Route {
    /// Segments in travel order (never empty)
    segments: Vec<GeoSegment>,
    /// Maximal same-named runs of `segments` (never empty)
    features: Vec<GeoFeature>,
    /// Cached metadata (computed once per construction/append)
    start: GeoPoint,
    end: GeoPoint,
    start_heading: f64,
    end_heading: f64,
    /// Cached total length in kilometers
    length: f64,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Route {
    /// Create a route of one segment and one feature
    pub fn new(segment: GeoSegment) -> Self {
        let route = Self {
            start: segment.p1(),
            end: segment.p2(),
            start_heading: segment.heading(),
            end_heading: segment.heading(),
            length: segment.length(),
            features: vec![GeoFeature::new(segment.clone())],
            segments: vec![segment],
        };
        route.check_rep();
        route
    }

    /// Build a route by appending `segments` in order
    ///
    /// # Returns
    /// The route, `InvalidArgument` when `segments` is empty, or the first
    /// `PreconditionViolation` hit while chaining.
    pub fn from_segments<I>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = GeoSegment>,
    {
        #[cfg(feature = "profiling")]
        profiling::scope!("route::from_segments");

        let mut segments = segments.into_iter();
        let first = segments.next().ok_or_else(|| {
            GeoError::InvalidArgument("a route needs at least one segment".to_string())
        })?;
        segments.try_fold(Route::new(first), |route, segment| {
            route.add_segment(segment)
        })
    }

    /// Create a new route equal to this one with `segment` appended
    ///
    /// The last feature absorbs `segment` when the names match; otherwise a new
    /// single-segment feature is opened. Names appearing earlier in the route
    /// play no part in the decision.
    ///
    /// # Arguments
    /// * `segment` - Must start at `self.end()`; any name is accepted
    ///
    /// # Returns
    /// The extended route, or `PreconditionViolation` if the segment does not
    /// start where the route ends. The receiver is never modified.
    pub fn add_segment(&self, segment: GeoSegment) -> Result<Route> {
        #[cfg(feature = "profiling")]
        profiling::scope!("route::add_segment");

        if segment.p1() != self.end {
            tracing::warn!(
                segment = %segment,
                route_end = %self.end,
                "Rejected segment that does not start at the route end"
            );
            return Err(GeoError::PreconditionViolation {
                reason: format!(
                    "segment starts at {} but the route ends at {}",
                    segment.p1(),
                    self.end
                ),
            });
        }

        let end = segment.p2();
        let end_heading = segment.heading();
        let length = self.length + segment.length();

        // Every feature but the last carries over as-is
        let (last_feature, closed) = self.split_last_feature();
        let mut features = Vec::with_capacity(self.features.len() + 1);
        features.extend_from_slice(closed);
        if segment.name() == last_feature.name() {
            features.push(last_feature.add_segment(segment.clone())?);
        } else {
            features.push(last_feature.clone());
            features.push(GeoFeature::new(segment.clone()));
        }

        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);

        let extended = Self {
            segments,
            features,
            start: self.start,
            end,
            start_heading: self.start_heading,
            end_heading,
            length,
        };
        extended.check_rep();
        tracing::debug!(
            segments = extended.segments.len(),
            features = extended.features.len(),
            length_km = extended.length,
            "Extended route"
        );
        Ok(extended)
    }

    /// Location where the route starts
    #[inline]
    pub fn start(&self) -> GeoPoint {
        self.start
    }

    /// Location where the route ends
    #[inline]
    pub fn end(&self) -> GeoPoint {
        self.end
    }

    /// Direction of travel at the start, in degrees
    #[inline]
    pub fn start_heading(&self) -> f64 {
        self.start_heading
    }

    /// Direction of travel at the end, in degrees
    #[inline]
    pub fn end_heading(&self) -> f64 {
        self.end_heading
    }

    /// Total distance travelled along the route, in kilometers
    ///
    /// This is O(1) as the value is cached during construction.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// The segment the route ends with
    #[inline]
    pub fn last_segment(&self) -> &GeoSegment {
        &self.segments[self.segments.len() - 1]
    }

    /// The feature the route ends with; the next same-named segment extends it
    #[inline]
    pub fn last_feature(&self) -> &GeoFeature {
        self.split_last_feature().0
    }

    /// Iterate all segments in travel order
    #[inline]
    pub fn geo_segments(&self) -> Segments<'_> {
        self.segments.iter()
    }

    /// Iterate the maximal same-named features in travel order
    #[inline]
    pub fn geo_features(&self) -> Features<'_> {
        self.features.iter()
    }

    /// The traversed path as a `geo` line string (x = longitude, y = latitude)
    pub fn to_line_string(&self) -> geo::LineString<f64> {
        path_line_string(self.start, &self.segments)
    }

    #[inline]
    fn split_last_feature(&self) -> (&GeoFeature, &[GeoFeature]) {
        // Non-empty by construction
        let (closed, last) = self.features.split_at(self.features.len() - 1);
        (&last[0], closed)
    }

    #[inline]
    fn check_rep(&self) {
        debug_assert!(!self.segments.is_empty(), "route has no segments");
        debug_assert!(!self.features.is_empty(), "route has no features");
        debug_assert!(self.length >= 0.0, "route length is negative");
        debug_assert!(
            self.segments.windows(2).all(|w| w[0].connects_to(&w[1])),
            "route is not contiguous"
        );
        debug_assert!(
            self.features.windows(2).all(|w| w[0].name() != w[1].name()),
            "route has consecutive features with the same name"
        );
        debug_assert!(
            self.features
                .iter()
                .flat_map(GeoFeature::geo_segments)
                .eq(self.segments.iter()),
            "route features do not reproduce its segments"
        );
        debug_assert!(
            self.segments.first().map(GeoSegment::p1) == Some(self.start)
                && self.segments.last().map(GeoSegment::p2) == Some(self.end),
            "route endpoints out of sync"
        );
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.features == other.features
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.features.hash(state);
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route:")?;
        for feature in &self.features {
            writeln!(f, "  {}: {feature}", feature.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn segment(name: &str, from: GeoPoint, to: GeoPoint) -> GeoSegment {
        GeoSegment::new(name, from, to).unwrap()
    }

    /// A(0,0), B(0,1), C(0,2), D(0,3)
    fn abcd() -> (GeoPoint, GeoPoint, GeoPoint, GeoPoint) {
        (
            point(0.0, 0.0),
            point(0.0, 1.0),
            point(0.0, 2.0),
            point(0.0, 3.0),
        )
    }

    fn names(route: &Route) -> Vec<&str> {
        route.geo_features().map(GeoFeature::name).collect()
    }

    #[test]
    fn test_route_creation() {
        let (a, b, _, _) = abcd();
        let s1 = segment("Main St", a, b);
        let route = Route::new(s1.clone());

        assert_eq!(route.start(), a);
        assert_eq!(route.end(), b);
        assert_eq!(route.start_heading(), s1.heading());
        assert_eq!(route.end_heading(), s1.heading());
        assert_eq!(route.length(), s1.length());
        assert_eq!(route.segment_count(), 1);
        assert_eq!(route.feature_count(), 1);
        assert_eq!(route.last_segment(), &s1);
        assert_eq!(route.last_feature(), &GeoFeature::new(s1));
    }

    #[test]
    fn test_same_name_is_absorbed() {
        let (a, b, c, _) = abcd();
        let s1 = segment("Main St", a, b);
        let s2 = segment("Main St", b, c);
        let route = Route::new(s1.clone()).add_segment(s2.clone()).unwrap();

        assert_eq!(route.feature_count(), 1);
        let feature = route.geo_features().next().unwrap();
        assert_eq!(feature.name(), "Main St");
        assert!(feature.geo_segments().eq([&s1, &s2]));
        assert!((route.length() - (s1.length() + s2.length())).abs() < 1e-12);
        assert_eq!(route.end(), c);
    }

    #[test]
    fn test_other_name_opens_feature() {
        let (a, b, c, _) = abcd();
        let s1 = segment("Main St", a, b);
        let s3 = segment("Side St", b, c);
        let route = Route::new(s1).add_segment(s3.clone()).unwrap();

        assert_eq!(route.feature_count(), 2);
        assert_eq!(names(&route), ["Main St", "Side St"]);
        assert_eq!(route.end_heading(), s3.heading());
        assert_eq!(route.last_feature().start(), b);
    }

    #[test]
    fn test_grouping_only_looks_at_last_feature() {
        let (a, b, c, d) = abcd();
        let route = Route::from_segments([
            segment("Main St", a, b),
            segment("Side St", b, c),
            segment("Main St", c, d),
        ])
        .unwrap();

        assert_eq!(names(&route), ["Main St", "Side St", "Main St"]);
        assert!(route.geo_features().all(|f| f.segment_count() == 1));
    }

    #[test]
    fn test_feature_count_property() {
        let (a, b, c, d) = abcd();
        let route = Route::from_segments([segment("Main St", a, b), segment("Side St", b, c)])
            .unwrap();

        let same = route.add_segment(segment("Side St", c, d)).unwrap();
        assert_eq!(same.feature_count(), route.feature_count());

        let other = route.add_segment(segment("Main St", c, d)).unwrap();
        assert_eq!(other.feature_count(), route.feature_count() + 1);
    }

    #[test]
    fn test_add_segment_leaves_receiver_unchanged() {
        let (a, b, c, _) = abcd();
        let route = Route::new(segment("Main St", a, b));
        let before = route.clone();
        let _ = route.add_segment(segment("Main St", b, c)).unwrap();

        assert_eq!(route, before);
        assert_eq!(route.segment_count(), 1);
        assert_eq!(route.end(), b);
        assert_eq!(route.length(), before.length());
        assert_eq!(route.last_feature().segment_count(), 1);
    }

    #[test]
    fn test_add_segment_rejects_gap() {
        let (a, b, c, d) = abcd();
        let route = Route::new(segment("Main St", a, b));

        let result = route.add_segment(segment("Main St", c, d));
        assert!(matches!(
            result,
            Err(GeoError::PreconditionViolation { .. })
        ));

        // Misoriented segments are not reversed on the caller's behalf
        let backwards = segment("Side St", c, b);
        assert!(route.add_segment(backwards.clone()).is_err());
        assert!(route.add_segment(backwards.reverse()).is_ok());
    }

    #[test]
    fn test_from_segments_empty_fails() {
        let result = Route::from_segments(Vec::new());
        assert!(matches!(result, Err(GeoError::InvalidArgument(_))));
    }

    #[test]
    fn test_from_segments_stops_at_gap() {
        let (a, b, c, d) = abcd();
        let result = Route::from_segments([segment("Main St", a, b), segment("Main St", c, d)]);
        assert!(matches!(
            result,
            Err(GeoError::PreconditionViolation { .. })
        ));
    }

    #[test]
    fn test_features_reproduce_segments() {
        let (a, b, c, d) = abcd();
        let e = point(1.0, 3.0);
        let route = Route::from_segments([
            segment("Main St", a, b),
            segment("Main St", b, c),
            segment("Side St", c, d),
            segment("Hill Rd", d, e),
            segment("Hill Rd", e, d),
        ])
        .unwrap();

        let flattened: Vec<&GeoSegment> = route
            .geo_features()
            .flat_map(GeoFeature::geo_segments)
            .collect();
        let flat: Vec<&GeoSegment> = route.geo_segments().collect();
        assert_eq!(flattened, flat);

        assert_eq!(names(&route), ["Main St", "Side St", "Hill Rd"]);
        assert!(
            route
                .geo_features()
                .collect::<Vec<_>>()
                .windows(2)
                .all(|w| w[0].end() == w[1].start() && w[0].name() != w[1].name())
        );

        let feature_sum: f64 = route.geo_features().map(GeoFeature::length).sum();
        let segment_sum: f64 = route.geo_segments().map(GeoSegment::length).sum();
        assert!((route.length() - feature_sum).abs() < 1e-9);
        assert!((route.length() - segment_sum).abs() < 1e-9);
        assert_eq!(route.end(), d);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let (a, b, c, _) = abcd();
        let route = Route::from_segments([segment("Main St", a, b), segment("Side St", b, c)])
            .unwrap();

        assert!(route.geo_segments().eq(route.geo_segments()));
        assert!(route.geo_features().eq(route.geo_features()));

        let features = route.geo_features();
        let replay = features.clone();
        assert_eq!(features.count(), 2);
        assert_eq!(replay.count(), 2);
    }

    #[test]
    fn test_equality_compares_feature_boundaries() {
        let (a, b, c, _) = abcd();
        let one = Route::from_segments([segment("Main St", a, b), segment("Main St", b, c)])
            .unwrap();
        let same = Route::new(segment("Main St", a, b))
            .add_segment(segment("Main St", b, c))
            .unwrap();
        let renamed = Route::from_segments([segment("Main St", a, b), segment("Side St", b, c)])
            .unwrap();

        assert_eq!(one, same);
        assert_ne!(one, renamed);
        assert_ne!(one, Route::new(segment("Main St", a, b)));
    }

    #[test]
    fn test_degenerate_segment_route() {
        let p = point(3.0, 3.0);
        let route = Route::new(segment("Plaza", p, p));

        assert_eq!(route.length(), 0.0);
        assert_eq!(route.start(), route.end());
        assert!(route.start_heading().is_finite());

        let route = route.add_segment(segment("Plaza", p, p)).unwrap();
        assert_eq!(route.feature_count(), 1);
        assert_eq!(route.segment_count(), 2);
    }

    #[test]
    fn test_concurrent_appends_on_shared_route() {
        let (a, b, _, _) = abcd();
        let route = Route::new(segment("Main St", a, b));
        let targets: Vec<GeoPoint> = (0..64).map(|i| point(1.0, i as f64 * 0.1)).collect();

        let successors: Vec<Route> = targets
            .par_iter()
            .enumerate()
            .map(|(i, &to)| {
                let name = if i % 2 == 0 { "Main St" } else { "Side St" };
                route.add_segment(segment(name, b, to)).unwrap()
            })
            .collect();

        assert_eq!(route.segment_count(), 1);
        for (i, successor) in successors.iter().enumerate() {
            assert_eq!(successor.segment_count(), 2);
            assert_eq!(successor.end(), targets[i]);
            assert_eq!(successor.feature_count(), if i % 2 == 0 { 1 } else { 2 });
        }
    }

    #[test]
    fn test_to_line_string() {
        let (a, b, c, _) = abcd();
        let route = Route::from_segments([segment("Main St", a, b), segment("Side St", b, c)])
            .unwrap();
        let line = route.to_line_string();
        assert_eq!(line.coords().count(), 3);
        assert_eq!(line.0[2], geo::Coord { x: 2.0, y: 0.0 });
    }

    #[test]
    fn test_display() {
        let (a, b, _, _) = abcd();
        let route = Route::new(segment("Main St", a, b));
        assert_eq!(
            route.to_string(),
            "Route:\n  Main St: [(\"Main St\",(0,0),(0,1))]\n"
        );
    }
}
