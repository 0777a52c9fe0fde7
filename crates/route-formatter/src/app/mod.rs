//! Application module
//!
//! This module provides the main application structure:
//! - Example segment list (the picker)
//! - Route state driven only through `Route::add_segment`
//! - Route panel with one line per feature

pub(crate) mod settings;
mod state;
mod ui_panels;

use crate::app::settings::{Pick, Settings};
use crate::app::state::RouteState;
use geo_route_lib::{GeoError, GeoSegment, Route, samples};
use std::io::{self, Write};

pub use state::PickOutcome;

/// Errors surfaced to the user by the application
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Pick {pick} is out of range (0..{available})")]
    PickOutOfRange { pick: Pick, available: usize },

    #[error("Pick {pick} ({segment}) does not start where the route ends")]
    Disconnected { pick: Pick, segment: GeoSegment },
}

/// Main application structure
pub struct RouteFormatterApp {
    /// Settings parsed from the command line
    settings: Settings,

    /// Segments offered for picking
    segments: Vec<GeoSegment>,

    /// Route under construction
    state: RouteState,
}

impl RouteFormatterApp {
    /// Create the application with the built-in example segments
    pub fn new(settings: Settings) -> Result<Self, AppError> {
        let segments = samples::example_segments()?;
        tracing::debug!(segments = segments.len(), "Loaded example segments");
        Ok(Self {
            settings,
            segments,
            state: RouteState::new(),
        })
    }

    /// Apply every pick from the settings, then render the requested panels
    pub fn run(&mut self, out: &mut impl Write) -> Result<(), AppError> {
        if self.settings.list {
            ui_panels::render_segment_list(out, &self.segments)?;
        }

        for pick in self.settings.picks.clone() {
            self.apply_pick(pick)?;
        }

        match self.state.route() {
            Some(route) => {
                ui_panels::render_route(out, route)?;
                if self.settings.line_string {
                    ui_panels::render_line_string(out, route)?;
                }
            }
            None if !self.settings.list => {
                writeln!(out, "No segments picked. Use --list to see the choices.")?;
            }
            None => {}
        }

        let rejected = self.state.rejected();
        if !rejected.is_empty() {
            writeln!(out, "Skipped {} disconnected pick(s).", rejected.len())?;
        }
        Ok(())
    }

    /// Resolve a pick against the segment list and hand it to the route state
    pub fn apply_pick(&mut self, pick: Pick) -> Result<PickOutcome, AppError> {
        let segment = self
            .segments
            .get(pick.index)
            .ok_or(AppError::PickOutOfRange {
                pick,
                available: self.segments.len(),
            })?;
        let segment = if pick.reversed {
            segment.reverse()
        } else {
            segment.clone()
        };

        #[cfg(feature = "profiling")]
        profiling::scope!("app::apply_pick");

        if self.settings.strict && !self.state.accepts(&segment) {
            tracing::warn!(segment = %segment, "Disconnected pick in strict mode");
            return Err(AppError::Disconnected { pick, segment });
        }
        Ok(self.state.pick(segment)?)
    }

    pub fn route(&self) -> Option<&Route> {
        self.state.route()
    }
}
