use tracing::trace;

use crate::core::primitives::round4;
use crate::core::{DataSeries, GraphSettings, Point, SurfaceSize, ViewBox};
use crate::error::{GraphError, GraphResult};

/// Scale ratio, inset view box and per-value points for one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateLayout {
    pub view_box: ViewBox,
    /// View box units per rendered pixel.
    pub ratio: f64,
    pub circle_radius: f64,
    pub circle_stroke_width: f64,
    pub points: Vec<Point>,
}

/// Maps a series into view box coordinates for the given surface size.
///
/// `base` carries the configured view box extent; its origin is ignored and
/// replaced by the marker inset. Higher values map to smaller `y`.
pub fn compute_layout(
    series: &DataSeries,
    settings: GraphSettings,
    base: ViewBox,
    surface: SurfaceSize,
) -> GraphResult<CoordinateLayout> {
    if !surface.is_valid() {
        return Err(GraphError::InvalidSurface {
            width: surface.width,
            height: surface.height,
        });
    }
    if !base.width.is_finite() || !base.height.is_finite() || base.width <= 0.0 || base.height <= 0.0
    {
        return Err(GraphError::InvalidConfig(
            "view box extent must be finite and > 0".to_owned(),
        ));
    }
    let max_value = series.max_value().ok_or(GraphError::EmptySeries)?;

    let ratio = base.width / surface.width;
    let circle_radius = ratio * settings.circle_size;
    let circle_stroke_width = ratio * settings.circle_stroke;

    let circle_stroke_half = circle_stroke_width / 2.0;
    let circle_extent = ratio * -settings.circle_size;
    let inset_origin = circle_extent - circle_stroke_half;
    let view_box = ViewBox::new(inset_origin, inset_origin, base.width, base.height);

    let offset = 2.0 * ratio * settings.circle_size + ratio * settings.circle_stroke;
    let usable_width = (base.width - offset).max(0.0);
    let usable_height = (base.height - offset).max(0.0);

    let y_for = |value: f64| {
        if max_value == 0.0 {
            round4(usable_height)
        } else {
            // Divide first: `usable_height / max_value` overflows for subnormal maxima.
            round4((max_value - value) / max_value * usable_height)
        }
    };

    let values = series.values();
    let points: Vec<Point> = if values.len() == 1 {
        vec![Point::new(round4(usable_width / 2.0), y_for(values[0]))]
    } else {
        let step_x = usable_width / (values.len() - 1) as f64;
        values
            .iter()
            .enumerate()
            .map(|(index, value)| Point::new(round4(index as f64 * step_x), y_for(*value)))
            .collect()
    };

    if let Some(name) =
        non_finite_geometry(ratio, circle_radius, circle_stroke_width, inset_origin)
    {
        return Err(GraphError::InvalidData(format!(
            "layout produced non-finite {name} for surface width {}",
            surface.width
        )));
    }
    if let Some(index) = points
        .iter()
        .position(|point| !point.x.is_finite() || !point.y.is_finite())
    {
        return Err(GraphError::InvalidData(format!(
            "layout produced non-finite point at index {index}"
        )));
    }

    trace!(
        ratio,
        inset_origin,
        max_value,
        offset,
        count = points.len(),
        "computed coordinate layout"
    );

    Ok(CoordinateLayout {
        view_box,
        ratio,
        circle_radius,
        circle_stroke_width,
        points,
    })
}

fn non_finite_geometry(
    ratio: f64,
    circle_radius: f64,
    circle_stroke_width: f64,
    inset_origin: f64,
) -> Option<&'static str> {
    [
        ("ratio", ratio),
        ("circle radius", circle_radius),
        ("circle stroke width", circle_stroke_width),
        ("view box origin", inset_origin),
    ]
    .into_iter()
    .find_map(|(name, value)| (!value.is_finite()).then_some(name))
}
