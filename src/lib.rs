//! line-graph: geometry and interaction engine for a single-series line chart.
//!
//! The engine maps a data series into an inset view box, builds the line,
//! overlay and background paths, keeps one marker per point, animates the
//! initial line reveal and positions a throttled hover tooltip. All drawing
//! goes through the [`render::DrawSurface`] trait so any backend can host it.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{GraphConfig, LineGraph};
pub use error::{GraphError, GraphResult};
