//! Application state management
//!
//! This module holds the route being built. The route is only ever replaced by
//! the value returned from `Route::add_segment`; it is never modified in place.

use geo_route_lib::{GeoSegment, Route};

/// Outcome of picking a segment
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    /// The segment started a new route
    Started,
    /// The segment was appended to the current route
    Appended,
    /// The segment does not start where the route ends and was ignored
    Rejected,
}

/// Route under construction
#[derive(Default)]
pub struct RouteState {
    /// Current route, `None` until the first pick
    route: Option<Route>,

    /// Picks that were ignored because they did not connect
    rejected: Vec<GeoSegment>,
}

impl RouteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `segment` would be started or appended rather than rejected
    #[inline]
    pub fn accepts(&self, segment: &GeoSegment) -> bool {
        self.route
            .as_ref()
            .is_none_or(|route| route.end() == segment.p1())
    }

    /// Apply a picked segment
    ///
    /// Misoriented picks are checked here, before calling into the route, so the
    /// route's append precondition always holds.
    pub fn pick(&mut self, segment: GeoSegment) -> geo_route_lib::Result<PickOutcome> {
        let Some(route) = &self.route else {
            tracing::info!(segment = %segment, "Starting route");
            self.route = Some(Route::new(segment));
            return Ok(PickOutcome::Started);
        };

        if !self.accepts(&segment) {
            tracing::warn!(
                segment = %segment,
                route_end = %route.end(),
                "Ignoring segment that does not start at the route end"
            );
            self.rejected.push(segment);
            return Ok(PickOutcome::Rejected);
        }

        let extended = route.add_segment(segment)?;
        self.route = Some(extended);
        Ok(PickOutcome::Appended)
    }

    #[inline]
    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    #[inline]
    pub fn rejected(&self) -> &[GeoSegment] {
        &self.rejected
    }
}
