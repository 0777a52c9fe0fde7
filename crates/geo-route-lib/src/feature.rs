//! Named geographic features built from contiguous same-named segments
//!
//! A `GeoFeature` represents travel along one nonlinear feature such as a winding
//! road or river. Features only grow at their end, and every append returns a new
//! value.

use crate::{GeoError, GeoPoint, GeoSegment, Result};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Lazy, restartable iterator over segments in travel order
pub type Segments<'a> = std::slice::Iter<'a, GeoSegment>;

/// An immutable chain of endpoint-contiguous segments sharing one name
///
/// Because a feature need not be straight, its length (the distance travelled
/// along it) is generally larger than the distance between its endpoints.
#[derive(Clone, Debug)]
pub struct GeoFeature {
    /// Name shared by every segment
    name: Arc<str>,
    /// Segments in travel order (never empty)
    segments: Vec<GeoSegment>,
    /// Cached metadata (computed from the first/last segment on construction and append)
    start: GeoPoint,
    end: GeoPoint,
    start_heading: f64,
    end_heading: f64,
    /// Cached total length in kilometers
    length: f64,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl GeoFeature {
    /// Create a single-segment feature named after `segment`
    pub fn new(segment: GeoSegment) -> Self {
        let feature = Self {
            name: Arc::clone(segment.name_arc()),
            start: segment.p1(),
            end: segment.p2(),
            start_heading: segment.heading(),
            end_heading: segment.heading(),
            length: segment.length(),
            segments: vec![segment],
        };
        feature.check_rep();
        feature
    }

    /// Create a new feature equal to this one with `segment` appended
    ///
    /// # Arguments
    /// * `segment` - Must start at `self.end()` and carry `self.name()`
    ///
    /// # Returns
    /// The extended feature, or `PreconditionViolation` if the segment is
    /// misoriented or misnamed. The receiver is never modified.
    pub fn add_segment(&self, segment: GeoSegment) -> Result<GeoFeature> {
        #[cfg(feature = "profiling")]
        profiling::scope!("feature::add_segment");

        if segment.name() != self.name() {
            tracing::warn!(
                feature = %self.name,
                segment = %segment,
                "Rejected segment with a different name"
            );
            return Err(GeoError::PreconditionViolation {
                reason: format!(
                    "segment name \"{}\" does not match feature \"{}\"",
                    segment.name(),
                    self.name
                ),
            });
        }
        if segment.p1() != self.end {
            tracing::warn!(
                feature = %self.name,
                segment = %segment,
                "Rejected segment that does not start at the feature end"
            );
            return Err(GeoError::PreconditionViolation {
                reason: format!(
                    "segment starts at {} but feature \"{}\" ends at {}",
                    segment.p1(),
                    self.name,
                    self.end
                ),
            });
        }

        let end = segment.p2();
        let end_heading = segment.heading();
        let length = self.length + segment.length();

        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);

        let extended = Self {
            name: Arc::clone(&self.name),
            segments,
            start: self.start,
            end,
            start_heading: self.start_heading,
            end_heading,
            length,
        };
        extended.check_rep();
        tracing::debug!(
            feature = %extended.name,
            segments = extended.segments.len(),
            length_km = extended.length,
            "Extended feature"
        );
        Ok(extended)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location where the feature starts
    #[inline]
    pub fn start(&self) -> GeoPoint {
        self.start
    }

    /// Location where the feature ends
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

    /// Total distance travelled along the feature, in kilometers
    ///
    /// This is NOT as-the-crow-flies.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Iterate the segments in travel order
    ///
    /// Each call returns a fresh iterator; the iterator itself is `Clone`, so it
    /// can be restarted without touching the feature.
    #[inline]
    pub fn geo_segments(&self) -> Segments<'_> {
        self.segments.iter()
    }

    /// The traversed path as a `geo` line string (x = longitude, y = latitude)
    pub fn to_line_string(&self) -> geo::LineString<f64> {
        path_line_string(self.start, &self.segments)
    }

    #[inline]
    fn check_rep(&self) {
        debug_assert!(!self.name.is_empty(), "feature name is empty");
        debug_assert!(!self.segments.is_empty(), "feature has no segments");
        debug_assert!(self.length >= 0.0, "feature length is negative");
        debug_assert!(
            self.segments.iter().all(|s| s.name() == &*self.name),
            "feature \"{}\" holds a segment with another name",
            self.name
        );
        debug_assert!(
            self.segments.windows(2).all(|w| w[0].connects_to(&w[1])),
            "feature \"{}\" is not contiguous",
            self.name
        );
        debug_assert!(
            self.segments.first().map(GeoSegment::p1) == Some(self.start)
                && self.segments.last().map(GeoSegment::p2) == Some(self.end),
            "feature \"{}\" endpoints out of sync",
            self.name
        );
    }
}

/// Line string through `start` and the end of every segment
pub(crate) fn path_line_string(start: GeoPoint, segments: &[GeoSegment]) -> geo::LineString<f64> {
    let mut coords: Vec<geo::Coord<f64>> = Vec::with_capacity(segments.len() + 1);
    coords.push(start.into());
    coords.extend(segments.iter().map(|s| geo::Coord::from(s.p2())));
    geo::LineString::from(coords)
}

impl PartialEq for GeoFeature {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for GeoFeature {}

impl Hash for GeoFeature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl fmt::Display for GeoFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{segment}")?;
        }
        write!(f, "]")
    }
}
