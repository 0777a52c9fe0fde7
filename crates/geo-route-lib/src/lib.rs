//! Geo Route Library - Core Data Structures for Segment-Based Travel
//!
//! This library models geographic travel as straight segments composed into named
//! features and unnamed routes. All types are immutable values: "adding" a segment
//! produces a new value and leaves the receiver untouched.
//!
//! # Architecture
//!
//! - **[`GeoPoint`]**: Validated latitude/longitude with flat-surface distance and heading
//! - **[`GeoSegment`]**: Named, directed straight edge between two points
//! - **[`GeoFeature`]**: Contiguous chain of same-named segments (a winding road or river)
//! - **[`Route`]**: Contiguous chain of arbitrary segments, grouped into maximal features
//! - **[`samples`]**: Static example network for front-ends, tests and benchmarks
//!
//! # Performance Characteristics
//!
//! - **Append**: O(N) per call (copy-on-append), N = segments already held
//! - **Accessors**: O(1), derived quantities are cached at construction
//! - **Iteration**: lazy, restartable, no allocation

mod feature;
mod point;
mod route;
mod segment;
pub mod samples;
pub mod utils;

// Public API exports
pub use feature::{GeoFeature, Segments};
pub use point::{GeoPoint, PointBounds};
pub use route::{Features, Route};
pub use segment::GeoSegment;

/// Error types for the geo-route model
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Precondition violation: {reason}")]
    PreconditionViolation { reason: String },
}

pub type Result<T> = std::result::Result<T, GeoError>;
