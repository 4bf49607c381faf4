mod markers;
mod primitives;
mod recording_surface;
mod reveal;
mod svg_document;

pub use markers::{Marker, MarkerLayer, MarkerPlan, MarkerStyle};
pub use primitives::{MarkerAttributes, SurfaceCommand, attr, style};
pub use recording_surface::{ElementState, RecordingSurface, TooltipMetrics};
pub use reveal::{RevealAnimator, RevealPhase};

use serde::{Deserialize, Serialize};

use crate::core::{BoundingBox, SurfaceSize};
use crate::error::GraphResult;

/// CSS class toggled on the line and the tooltip to enable eased motion.
pub const TRANSITION_CLASS: &str = "transition";

/// Handle of a marker element created on a draw surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerId(pub u32);

/// Addressable elements of the chart on a draw surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceElement {
    /// The drawing root that owns the view box.
    Root,
    Line,
    Overlay,
    Background,
    Tooltip,
    Marker(MarkerId),
}

/// Contract implemented by any rendering backend.
///
/// The engine only reads geometry through the query half and only mutates the
/// scene through the command half, so layout logic stays independent of the
/// technology that finally paints pixels.
pub trait DrawSurface {
    /// Current rendered size of the root element.
    fn pixel_size(&self) -> SurfaceSize;

    /// Page-space bounding rectangle of an element.
    fn bounding_box(&self, element: SurfaceElement) -> GraphResult<BoundingBox>;

    /// Text content of an element, if any.
    fn content(&self, element: SurfaceElement) -> Option<String>;

    /// Total stroke length of a path element in view box units.
    fn path_length(&self, element: SurfaceElement) -> GraphResult<f64>;

    fn set_attribute(
        &mut self,
        element: SurfaceElement,
        name: &str,
        value: String,
    ) -> GraphResult<()>;

    fn set_style(
        &mut self,
        element: SurfaceElement,
        property: &str,
        value: String,
    ) -> GraphResult<()>;

    fn add_class(&mut self, element: SurfaceElement, class: &str) -> GraphResult<()>;

    fn remove_class(&mut self, element: SurfaceElement, class: &str) -> GraphResult<()>;

    fn set_content(&mut self, element: SurfaceElement, content: String) -> GraphResult<()>;

    /// Adds a marker element. The engine only passes attributes that already
    /// passed [`MarkerAttributes::validate`].
    fn create_marker(&mut self, attributes: &MarkerAttributes) -> GraphResult<MarkerId>;

    fn remove_element(&mut self, element: SurfaceElement) -> GraphResult<()>;
}
