use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::primitives::format_number;
use crate::core::{DataSeries, LayoutState, Point};
use crate::error::{GraphError, GraphResult};
use crate::render::{DrawSurface, MarkerAttributes, MarkerId, SurfaceElement, attr};

/// Fill and stroke paint of the data point markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub fill: String,
    pub stroke: String,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            fill: "white".to_owned(),
            stroke: "#ff7714".to_owned(),
        }
    }
}

/// A marker element bound to one series index and its raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    id: MarkerId,
    index: usize,
    value: f64,
    content: String,
    point: Point,
}

impl Marker {
    #[must_use]
    pub fn id(&self) -> MarkerId {
        self.id
    }

    #[must_use]
    pub fn element(&self) -> SurfaceElement {
        SurfaceElement::Marker(self.id)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Text shown by the tooltip when this marker is hovered.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn point(&self) -> Point {
        self.point
    }
}

/// Owns the marker elements. Markers are created once and afterwards only
/// moved and restyled in place, so handles held by the host stay valid
/// across resizes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
}

impl MarkerLayer {
    /// Creates one marker per point of `layout`, in series order.
    pub fn create<S: DrawSurface>(
        surface: &mut S,
        series: &DataSeries,
        layout: &LayoutState,
        style: &MarkerStyle,
    ) -> GraphResult<Self> {
        Self::plan(series, layout, style)?.realize(surface)
    }

    /// Validates every marker of a pass without touching the surface.
    pub fn plan(
        series: &DataSeries,
        layout: &LayoutState,
        style: &MarkerStyle,
    ) -> GraphResult<MarkerPlan> {
        ensure_len(series.len(), layout.points.len())?;

        let mut entries = Vec::with_capacity(layout.points.len());
        for (index, (point, value)) in layout.points.iter().zip(series.values()).enumerate() {
            let attributes = MarkerAttributes {
                cx: point.x,
                cy: point.y,
                r: layout.circle_radius,
                stroke_width: layout.circle_stroke_width,
                fill: style.fill.clone(),
                stroke: style.stroke.clone(),
                content: format_number(*value),
            };
            attributes.validate()?;
            entries.push(PlannedMarker {
                index,
                value: *value,
                point: *point,
                attributes,
            });
        }
        Ok(MarkerPlan { entries })
    }

    /// Moves every marker to its new point without recreating it.
    pub fn reposition<S: DrawSurface>(
        &mut self,
        surface: &mut S,
        points: &[Point],
    ) -> GraphResult<()> {
        ensure_len(self.markers.len(), points.len())?;
        for (marker, point) in self.markers.iter_mut().zip(points) {
            surface.set_attribute(marker.element(), attr::CX, format_number(point.x))?;
            surface.set_attribute(marker.element(), attr::CY, format_number(point.y))?;
            marker.point = *point;
        }
        Ok(())
    }

    /// Applies the radius and stroke width of a new scale ratio.
    pub fn restyle<S: DrawSurface>(&self, surface: &mut S, layout: &LayoutState) -> GraphResult<()> {
        let radius = format_number(layout.circle_radius);
        let stroke_width = format_number(layout.circle_stroke_width);
        for marker in &self.markers {
            surface.set_attribute(marker.element(), attr::R, radius.clone())?;
            surface.set_attribute(marker.element(), attr::STROKE_WIDTH, stroke_width.clone())?;
        }
        Ok(())
    }

    /// Binds new raw values to the existing markers.
    pub fn rebind_values<S: DrawSurface>(
        &mut self,
        surface: &mut S,
        series: &DataSeries,
    ) -> GraphResult<()> {
        ensure_len(self.markers.len(), series.len())?;
        for (marker, value) in self.markers.iter_mut().zip(series.values()) {
            let content = format_number(*value);
            if content != marker.content {
                surface.set_attribute(marker.element(), attr::DATA_CONTENT, content.clone())?;
                marker.content = content;
            }
            marker.value = *value;
        }
        Ok(())
    }

    /// Removes every marker element from the surface.
    pub fn remove_all<S: DrawSurface>(&mut self, surface: &mut S) -> GraphResult<()> {
        for marker in self.markers.drain(..) {
            surface.remove_element(marker.element())?;
        }
        Ok(())
    }

    /// Marker bound to a surface handle, if the handle is one of ours.
    #[must_use]
    pub fn hit(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.id == id)
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Rendered pixel width of the first marker.
    pub fn measured_diameter_px<S: DrawSurface>(&self, surface: &S) -> GraphResult<Option<f64>> {
        self.markers
            .first()
            .map(|marker| surface.bounding_box(marker.element()).map(|bbox| bbox.width))
            .transpose()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PlannedMarker {
    index: usize,
    value: f64,
    point: Point,
    attributes: MarkerAttributes,
}

/// Validated marker attributes of one pass, ready to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPlan {
    entries: Vec<PlannedMarker>,
}

impl MarkerPlan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Creates the planned markers. When the surface rejects one, the
    /// markers created so far are removed again before the error returns.
    pub fn realize<S: DrawSurface>(self, surface: &mut S) -> GraphResult<MarkerLayer> {
        let mut markers: Vec<Marker> = Vec::with_capacity(self.entries.len());
        for entry in self.entries {
            match surface.create_marker(&entry.attributes) {
                Ok(id) => markers.push(Marker {
                    id,
                    index: entry.index,
                    value: entry.value,
                    content: entry.attributes.content,
                    point: entry.point,
                }),
                Err(err) => {
                    warn!(
                        created = markers.len(),
                        index = entry.index,
                        "marker creation failed, rolling back"
                    );
                    for marker in &markers {
                        if let Err(cleanup) = surface.remove_element(marker.element()) {
                            warn!(error = %cleanup, "failed to remove partially created marker");
                        }
                    }
                    return Err(err);
                }
            }
        }
        trace!(count = markers.len(), "created markers");
        Ok(MarkerLayer { markers })
    }
}

fn ensure_len(expected: usize, actual: usize) -> GraphResult<()> {
    if expected != actual {
        return Err(GraphError::InvalidData(format!(
            "marker count mismatch: expected {expected}, got {actual}"
        )));
    }
    Ok(())
}
