use indexmap::IndexMap;

use crate::core::path::{parse_polyline, polyline_length};
use crate::core::{BoundingBox, SurfaceSize, ViewBox};
use crate::error::{GraphError, GraphResult};
use crate::render::{
    DrawSurface, MarkerAttributes, MarkerId, SurfaceCommand, SurfaceElement, attr,
};

/// Text metrics used to size the tooltip box from its content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipMetrics {
    pub char_width_px: f64,
    pub horizontal_padding_px: f64,
    pub height_px: f64,
}

impl Default for TooltipMetrics {
    fn default() -> Self {
        Self {
            char_width_px: 8.0,
            horizontal_padding_px: 6.0,
            height_px: 24.0,
        }
    }
}

/// Current attributes, styles, classes and content of one element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementState {
    pub attributes: IndexMap<String, String>,
    pub styles: IndexMap<String, String>,
    pub classes: Vec<String>,
    pub content: Option<String>,
}

/// Headless surface used by tests and hosts without a paint backend.
///
/// It records every command in arrival order, keeps the resulting element
/// state, and answers geometry queries by projecting view box units onto
/// the configured pixel size.
#[derive(Debug)]
pub struct RecordingSurface {
    size: SurfaceSize,
    left: f64,
    top: f64,
    tooltip_metrics: TooltipMetrics,
    elements: IndexMap<SurfaceElement, ElementState>,
    commands: Vec<SurfaceCommand>,
    next_marker: u32,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        let elements = [
            SurfaceElement::Root,
            SurfaceElement::Background,
            SurfaceElement::Overlay,
            SurfaceElement::Line,
            SurfaceElement::Tooltip,
        ]
        .into_iter()
        .map(|element| (element, ElementState::default()))
        .collect();

        Self {
            size,
            left: 0.0,
            top: 0.0,
            tooltip_metrics: TooltipMetrics::default(),
            elements,
            commands: Vec::new(),
            next_marker: 0,
        }
    }

    /// Places the root element at a page offset.
    #[must_use]
    pub fn with_origin(mut self, left: f64, top: f64) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    #[must_use]
    pub fn with_tooltip_metrics(mut self, metrics: TooltipMetrics) -> Self {
        self.tooltip_metrics = metrics;
        self
    }

    /// Simulates the host viewport changing the rendered size.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    #[must_use]
    pub fn element(&self, element: SurfaceElement) -> Option<&ElementState> {
        self.elements.get(&element)
    }

    #[must_use]
    pub fn attribute(&self, element: SurfaceElement, name: &str) -> Option<&str> {
        self.elements
            .get(&element)
            .and_then(|state| state.attributes.get(name))
            .map(String::as_str)
    }

    #[must_use]
    pub fn style(&self, element: SurfaceElement, property: &str) -> Option<&str> {
        self.elements
            .get(&element)
            .and_then(|state| state.styles.get(property))
            .map(String::as_str)
    }

    #[must_use]
    pub fn has_class(&self, element: SurfaceElement, class: &str) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|state| state.classes.iter().any(|c| c == class))
    }

    /// Marker handles in creation order.
    #[must_use]
    pub fn marker_ids(&self) -> Vec<MarkerId> {
        self.elements
            .keys()
            .filter_map(|element| match element {
                SurfaceElement::Marker(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub(super) fn elements(&self) -> impl Iterator<Item = (&SurfaceElement, &ElementState)> {
        self.elements.iter()
    }

    fn state_mut(&mut self, element: SurfaceElement) -> GraphResult<&mut ElementState> {
        self.elements
            .get_mut(&element)
            .ok_or_else(|| GraphError::InvalidData(format!("unknown surface element {element:?}")))
    }

    fn numeric_attribute(&self, element: SurfaceElement, name: &str) -> GraphResult<f64> {
        let raw = self.attribute(element, name).ok_or_else(|| {
            GraphError::InvalidData(format!("{element:?} has no `{name}` attribute"))
        })?;
        raw.parse::<f64>()
            .map_err(|e| GraphError::InvalidData(format!("invalid `{name}` value `{raw}`: {e}")))
    }

    fn view_box(&self) -> GraphResult<ViewBox> {
        let raw = self
            .attribute(SurfaceElement::Root, attr::VIEW_BOX)
            .ok_or(GraphError::NotInitialized)?;
        let parts = raw
            .split_whitespace()
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| GraphError::InvalidData(format!("invalid view box `{raw}`: {e}")))?;
        match parts.as_slice() {
            [origin_x, origin_y, width, height] => {
                Ok(ViewBox::new(*origin_x, *origin_y, *width, *height))
            }
            _ => Err(GraphError::InvalidData(format!("invalid view box `{raw}`"))),
        }
    }

    /// Maps a view box rectangle to page pixels with a uniform width-based scale.
    fn project(&self, view_box: ViewBox, x: f64, y: f64, width: f64, height: f64) -> BoundingBox {
        let scale = self.size.width / view_box.width;
        BoundingBox::new(
            self.left + (x - view_box.origin_x) * scale,
            self.top + (y - view_box.origin_y) * scale,
            width * scale,
            height * scale,
        )
    }

    fn record(&mut self, command: SurfaceCommand) {
        self.commands.push(command);
    }
}

impl DrawSurface for RecordingSurface {
    fn pixel_size(&self) -> SurfaceSize {
        self.size
    }

    fn bounding_box(&self, element: SurfaceElement) -> GraphResult<BoundingBox> {
        if !self.elements.contains_key(&element) {
            return Err(GraphError::InvalidData(format!(
                "unknown surface element {element:?}"
            )));
        }
        match element {
            SurfaceElement::Root => Ok(BoundingBox::new(
                self.left,
                self.top,
                self.size.width,
                self.size.height,
            )),
            SurfaceElement::Tooltip => {
                let chars = self
                    .content(element)
                    .map_or(0, |content| content.chars().count());
                let metrics = self.tooltip_metrics;
                Ok(BoundingBox::new(
                    self.left,
                    self.top,
                    chars as f64 * metrics.char_width_px + 2.0 * metrics.horizontal_padding_px,
                    metrics.height_px,
                ))
            }
            SurfaceElement::Marker(_) => {
                let view_box = self.view_box()?;
                let cx = self.numeric_attribute(element, attr::CX)?;
                let cy = self.numeric_attribute(element, attr::CY)?;
                let r = self.numeric_attribute(element, attr::R)?;
                let stroke_width = self.numeric_attribute(element, attr::STROKE_WIDTH)?;
                let extent = r + stroke_width / 2.0;
                Ok(self.project(
                    view_box,
                    cx - extent,
                    cy - extent,
                    2.0 * extent,
                    2.0 * extent,
                ))
            }
            SurfaceElement::Line | SurfaceElement::Overlay | SurfaceElement::Background => {
                let view_box = self.view_box()?;
                let vertices = parse_polyline(self.attribute(element, attr::D).unwrap_or(""))?;
                let Some(first) = vertices.first().copied() else {
                    return Ok(BoundingBox::new(self.left, self.top, 0.0, 0.0));
                };
                let (mut min, mut max) = (first, first);
                for vertex in &vertices {
                    min.x = min.x.min(vertex.x);
                    min.y = min.y.min(vertex.y);
                    max.x = max.x.max(vertex.x);
                    max.y = max.y.max(vertex.y);
                }
                Ok(self.project(view_box, min.x, min.y, max.x - min.x, max.y - min.y))
            }
        }
    }

    fn content(&self, element: SurfaceElement) -> Option<String> {
        self.elements
            .get(&element)
            .and_then(|state| state.content.clone())
    }

    fn path_length(&self, element: SurfaceElement) -> GraphResult<f64> {
        let data = self.attribute(element, attr::D).unwrap_or("");
        Ok(polyline_length(&parse_polyline(data)?))
    }

    fn set_attribute(
        &mut self,
        element: SurfaceElement,
        name: &str,
        value: String,
    ) -> GraphResult<()> {
        self.state_mut(element)?
            .attributes
            .insert(name.to_owned(), value.clone());
        self.record(SurfaceCommand::SetAttribute {
            element,
            name: name.to_owned(),
            value,
        });
        Ok(())
    }

    fn set_style(
        &mut self,
        element: SurfaceElement,
        property: &str,
        value: String,
    ) -> GraphResult<()> {
        self.state_mut(element)?
            .styles
            .insert(property.to_owned(), value.clone());
        self.record(SurfaceCommand::SetStyle {
            element,
            property: property.to_owned(),
            value,
        });
        Ok(())
    }

    fn add_class(&mut self, element: SurfaceElement, class: &str) -> GraphResult<()> {
        let state = self.state_mut(element)?;
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_owned());
        }
        self.record(SurfaceCommand::AddClass {
            element,
            class: class.to_owned(),
        });
        Ok(())
    }

    fn remove_class(&mut self, element: SurfaceElement, class: &str) -> GraphResult<()> {
        self.state_mut(element)?.classes.retain(|c| c != class);
        self.record(SurfaceCommand::RemoveClass {
            element,
            class: class.to_owned(),
        });
        Ok(())
    }

    fn set_content(&mut self, element: SurfaceElement, content: String) -> GraphResult<()> {
        self.state_mut(element)?.content = Some(content.clone());
        self.record(SurfaceCommand::SetContent { element, content });
        Ok(())
    }

    fn create_marker(&mut self, attributes: &MarkerAttributes) -> GraphResult<MarkerId> {
        // Backstop for callers that bypass `MarkerLayer::plan`.
        attributes.validate()?;
        let id = MarkerId(self.next_marker);
        self.next_marker += 1;

        let state = ElementState {
            attributes: attributes
                .to_attribute_list()
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value))
                .collect(),
            ..ElementState::default()
        };
        self.elements.insert(SurfaceElement::Marker(id), state);
        self.record(SurfaceCommand::CreateMarker {
            id,
            attributes: attributes.clone(),
        });
        Ok(id)
    }

    fn remove_element(&mut self, element: SurfaceElement) -> GraphResult<()> {
        if !matches!(element, SurfaceElement::Marker(_)) {
            return Err(GraphError::InvalidData(format!(
                "{element:?} is a fixed element and cannot be removed"
            )));
        }
        self.elements
            .shift_remove(&element)
            .ok_or_else(|| GraphError::InvalidData(format!("unknown surface element {element:?}")))?;
        self.record(SurfaceCommand::RemoveElement { element });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordingSurface, TooltipMetrics};
    use crate::core::SurfaceSize;
    use crate::render::{DrawSurface, MarkerAttributes, SurfaceElement, attr};

    fn marker_attributes() -> MarkerAttributes {
        MarkerAttributes {
            cx: 0.0,
            cy: 0.0,
            r: 10.0,
            stroke_width: 3.0,
            fill: "white".to_owned(),
            stroke: "#ff7714".to_owned(),
            content: "5".to_owned(),
        }
    }

    #[test]
    fn marker_box_projects_view_box_units_to_pixels() {
        let mut surface = RecordingSurface::new(SurfaceSize::new(200.0, 200.0)).with_origin(5.0, 7.0);
        surface
            .set_attribute(SurfaceElement::Root, attr::VIEW_BOX, "-11.5 -11.5 100 100".to_owned())
            .expect("view box");
        let id = surface.create_marker(&marker_attributes()).expect("marker");

        let bbox = surface
            .bounding_box(SurfaceElement::Marker(id))
            .expect("marker box");
        // Scale is 2 px per unit, extent 11.5 units around the origin.
        assert_eq!(bbox.left, 5.0);
        assert_eq!(bbox.top, 7.0);
        assert_eq!(bbox.width, 46.0);
    }

    #[test]
    fn marker_box_requires_view_box() {
        let mut surface = RecordingSurface::new(SurfaceSize::new(100.0, 100.0));
        let id = surface.create_marker(&marker_attributes()).expect("marker");
        surface
            .bounding_box(SurfaceElement::Marker(id))
            .expect_err("no view box yet");
    }

    #[test]
    fn fixed_elements_cannot_be_removed() {
        let mut surface = RecordingSurface::new(SurfaceSize::new(100.0, 100.0));
        surface
            .remove_element(SurfaceElement::Line)
            .expect_err("line is fixed");
    }

    #[test]
    fn tooltip_width_follows_content_and_metrics() {
        let mut surface = RecordingSurface::new(SurfaceSize::new(100.0, 100.0))
            .with_tooltip_metrics(TooltipMetrics {
                char_width_px: 10.0,
                horizontal_padding_px: 4.0,
                height_px: 20.0,
            });
        surface
            .set_content(SurfaceElement::Tooltip, "12.5".to_owned())
            .expect("content");

        let bbox = surface
            .bounding_box(SurfaceElement::Tooltip)
            .expect("tooltip box");
        assert_eq!(bbox.width, 48.0);
        assert_eq!(bbox.height, 20.0);
    }
}
