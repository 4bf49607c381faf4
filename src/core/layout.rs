use serde::{Deserialize, Serialize};

use crate::core::mapper::compute_layout;
use crate::core::path::{build_background_mask, build_line_path, build_overlay_path};
use crate::core::{DataSeries, GraphPaths, GraphSettings, Point, SurfaceSize, ViewBox};
use crate::error::GraphResult;

/// Every derived quantity of one layout pass.
///
/// A new value is computed wholesale on init, resize and data replacement,
/// and only handed to the surface once the whole pass succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    pub surface: SurfaceSize,
    pub view_box: ViewBox,
    pub ratio: f64,
    pub circle_radius: f64,
    pub circle_stroke_width: f64,
    pub line_stroke_width: f64,
    pub points: Vec<Point>,
    pub paths: GraphPaths,
}

impl LayoutState {
    pub fn compute(
        series: &DataSeries,
        settings: GraphSettings,
        base: ViewBox,
        surface: SurfaceSize,
    ) -> GraphResult<Self> {
        let coordinates = compute_layout(series, settings, base, surface)?;
        let circle_diameter = 2.0 * coordinates.circle_radius;
        let paths = GraphPaths {
            line: build_line_path(&coordinates.points),
            overlay: build_overlay_path(&coordinates.points, coordinates.view_box),
            background: build_background_mask(coordinates.view_box, circle_diameter),
        };

        Ok(Self {
            surface,
            view_box: coordinates.view_box,
            ratio: coordinates.ratio,
            circle_radius: coordinates.circle_radius,
            circle_stroke_width: coordinates.circle_stroke_width,
            line_stroke_width: settings.line_stroke * coordinates.ratio,
            points: coordinates.points,
            paths,
        })
    }

    #[must_use]
    pub fn circle_diameter(&self) -> f64 {
        2.0 * self.circle_radius
    }
}
