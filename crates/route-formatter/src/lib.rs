//! Route Formatter - Application Library
//!
//! Text front-end over `geo-route-lib`: lists the example segments, applies
//! the user's picks to a route and prints the route feature by feature.

mod app;
mod logging;

pub use app::settings::{Pick, Settings};
pub use app::{AppError, PickOutcome, RouteFormatterApp};
pub use logging::setup_logging;
