use serde::{Deserialize, Serialize};

use crate::core::primitives::format_number;
use crate::error::GraphResult;
use crate::render::{DrawSurface, Marker, SurfaceElement, TRANSITION_CLASS, style};

/// Tooltip translation relative to the surface's top-left corner, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipTransform {
    pub x: f64,
    pub y: f64,
}

impl TooltipTransform {
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "translate({}px, {}px)",
            format_number(self.x),
            format_number(self.y)
        )
    }
}

/// Public tooltip state exposed to host applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub content: Option<String>,
    pub transform: Option<TooltipTransform>,
    /// `true` until the first placement after init or the last reset.
    pub first_hover: bool,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            content: None,
            transform: None,
            first_hover: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipController {
    state: TooltipState,
    tooltip_offset: f64,
}

impl TooltipController {
    #[must_use]
    pub fn new(tooltip_offset: f64) -> Self {
        Self {
            state: TooltipState::default(),
            tooltip_offset,
        }
    }

    #[must_use]
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    /// Shows `marker`'s value and moves the tooltip above it.
    ///
    /// The first placement after init or a reset is applied without the
    /// easing transition so the tooltip does not slide in from a stale spot.
    pub fn place<S: DrawSurface>(
        &mut self,
        surface: &mut S,
        marker: &Marker,
    ) -> GraphResult<TooltipTransform> {
        if surface.content(SurfaceElement::Tooltip).as_deref() != Some(marker.content()) {
            surface.set_content(SurfaceElement::Tooltip, marker.content().to_owned())?;
        }

        let parent = surface.bounding_box(SurfaceElement::Root)?;
        let marker_box = surface.bounding_box(marker.element())?;
        let tooltip_box = surface.bounding_box(SurfaceElement::Tooltip)?;
        let size_delta = (tooltip_box.width - marker_box.width).abs();

        let transform = TooltipTransform {
            x: marker_box.left + size_delta / 2.0 - parent.left,
            y: marker_box.top + size_delta / 2.0 - self.tooltip_offset - parent.top,
        };

        if !self.state.first_hover {
            surface.add_class(SurfaceElement::Tooltip, TRANSITION_CLASS)?;
        }
        surface.set_style(SurfaceElement::Tooltip, style::TRANSFORM, transform.to_css())?;

        self.state.content = Some(marker.content().to_owned());
        self.state.transform = Some(transform);
        self.state.first_hover = false;
        Ok(transform)
    }

    /// Disables the easing transition and re-arms the first placement.
    pub fn reset<S: DrawSurface>(&mut self, surface: &mut S) -> GraphResult<()> {
        surface.remove_class(SurfaceElement::Tooltip, TRANSITION_CLASS)?;
        self.state.first_hover = true;
        Ok(())
    }
}
