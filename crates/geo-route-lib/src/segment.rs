//! Named straight segments between two geographic points

use crate::{GeoError, GeoPoint, Result};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A named, directed straight edge from `p1` to `p2`
///
/// Length (km) and heading (degrees) are computed once at construction.
/// Equality and hashing consider only the name and the two endpoints.
#[derive(Clone, Debug)]
pub struct GeoSegment {
    /// Name of the feature this segment belongs to (never empty)
    name: Arc<str>,
    p1: GeoPoint,
    p2: GeoPoint,
    /// Cached `p1.distance_to(p2)`
    length: f64,
    /// Cached `p1.heading_to(p2)`, meaningless when `p1 == p2`
    heading: f64,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl GeoSegment {
    /// Create a new segment
    ///
    /// # Arguments
    /// * `name` - Non-empty name of the geographic feature
    /// * `p1` - Start point
    /// * `p2` - End point
    ///
    /// # Returns
    /// The segment, or `InvalidArgument` if the name is empty
    pub fn new(name: impl Into<Arc<str>>, p1: GeoPoint, p2: GeoPoint) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(GeoError::InvalidArgument(
                "segment name must not be empty".to_string(),
            ));
        }

        let segment = Self {
            name,
            p1,
            p2,
            length: p1.distance_to(&p2),
            heading: p1.heading_to(&p2),
        };
        segment.check_rep();
        Ok(segment)
    }

    /// A new segment with the same name travelling from `p2` to `p1`
    ///
    /// Heading is recomputed from the swapped points rather than offset by 180.
    pub fn reverse(&self) -> GeoSegment {
        let reversed = Self {
            name: Arc::clone(&self.name),
            p1: self.p2,
            p2: self.p1,
            length: self.p2.distance_to(&self.p1),
            heading: self.p2.heading_to(&self.p1),
        };
        reversed.check_rep();
        reversed
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle to the name, for cheap comparisons between segments
    #[inline]
    pub(crate) fn name_arc(&self) -> &Arc<str> {
        &self.name
    }

    #[inline]
    pub fn p1(&self) -> GeoPoint {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> GeoPoint {
        self.p2
    }

    /// Length in kilometers
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Compass heading from `p1` to `p2`, in degrees within [0, 360)
    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// True for zero-length segments, whose heading is unspecified
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    /// Whether `next` can follow this segment without a gap
    #[inline]
    pub fn connects_to(&self, next: &GeoSegment) -> bool {
        self.p2 == next.p1
    }

    #[inline]
    fn check_rep(&self) {
        debug_assert!(!self.name.is_empty(), "segment name is empty");
        debug_assert!(self.length >= 0.0, "segment length is negative");
        debug_assert!(
            (0.0..360.0).contains(&self.heading),
            "segment heading {} out of range",
            self.heading
        );
    }
}

impl PartialEq for GeoSegment {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.p1 == other.p1 && self.p2 == other.p2
    }
}

impl Eq for GeoSegment {}

impl Hash for GeoSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.p1.hash(state);
        self.p2.hash(state);
    }
}

impl fmt::Display for GeoSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(\"{}\",{},{})", self.name, self.p1, self.p2)
    }
}
