use serde::{Deserialize, Serialize};

use crate::core::primitives::format_number;
use crate::error::{GraphError, GraphResult};
use crate::render::{MarkerId, SurfaceElement};

/// Attribute names written by the engine.
pub mod attr {
    pub const VIEW_BOX: &str = "viewBox";
    pub const D: &str = "d";
    pub const CX: &str = "cx";
    pub const CY: &str = "cy";
    pub const R: &str = "r";
    pub const FILL: &str = "fill";
    pub const STROKE: &str = "stroke";
    pub const STROKE_WIDTH: &str = "stroke-width";
    pub const DATA_CONTENT: &str = "data-content";
}

/// Style properties written by the engine.
pub mod style {
    pub const STROKE_DASHARRAY: &str = "stroke-dasharray";
    pub const STROKE_WIDTH: &str = "stroke-width";
    pub const TRANSFORM: &str = "transform";
}

/// Initial attributes of a marker element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerAttributes {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub stroke_width: f64,
    pub fill: String,
    pub stroke: String,
    pub content: String,
}

impl MarkerAttributes {
    pub fn validate(&self) -> GraphResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(GraphError::InvalidData(
                "marker center must be finite".to_owned(),
            ));
        }
        if !self.r.is_finite() || self.r < 0.0 {
            return Err(GraphError::InvalidData(
                "marker radius must be finite and >= 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(GraphError::InvalidData(
                "marker stroke width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Attribute list in the order a marker element is written.
    #[must_use]
    pub fn to_attribute_list(&self) -> Vec<(&'static str, String)> {
        vec![
            (attr::CX, format_number(self.cx)),
            (attr::CY, format_number(self.cy)),
            (attr::R, format_number(self.r)),
            (attr::FILL, self.fill.clone()),
            (attr::STROKE, self.stroke.clone()),
            (attr::STROKE_WIDTH, format_number(self.stroke_width)),
            (attr::DATA_CONTENT, self.content.clone()),
        ]
    }
}

/// One command received by a recording surface, in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceCommand {
    SetAttribute {
        element: SurfaceElement,
        name: String,
        value: String,
    },
    SetStyle {
        element: SurfaceElement,
        property: String,
        value: String,
    },
    AddClass {
        element: SurfaceElement,
        class: String,
    },
    RemoveClass {
        element: SurfaceElement,
        class: String,
    },
    SetContent {
        element: SurfaceElement,
        content: String,
    },
    CreateMarker {
        id: MarkerId,
        attributes: MarkerAttributes,
    },
    RemoveElement {
        element: SurfaceElement,
    },
}

impl SurfaceCommand {
    #[must_use]
    pub fn element(&self) -> SurfaceElement {
        match self {
            Self::SetAttribute { element, .. }
            | Self::SetStyle { element, .. }
            | Self::AddClass { element, .. }
            | Self::RemoveClass { element, .. }
            | Self::SetContent { element, .. }
            | Self::RemoveElement { element } => *element,
            Self::CreateMarker { id, .. } => SurfaceElement::Marker(*id),
        }
    }
}
