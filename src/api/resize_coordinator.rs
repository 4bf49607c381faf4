use tracing::debug;

use crate::core::LayoutState;
use crate::core::primitives::format_number;
use crate::error::GraphResult;
use crate::render::{DrawSurface, SurfaceElement, attr, style};

use super::LineGraph;

pub(super) struct ResizeCoordinator;

impl ResizeCoordinator {
    /// Re-lays out the graph for the surface's current pixel size.
    ///
    /// The new layout is computed in full before anything is written, so a
    /// failing pass leaves the previous layout on screen.
    pub(super) fn on_resize<S: DrawSurface>(graph: &mut LineGraph<S>) -> GraphResult<()> {
        graph.ensure_active()?;
        let layout = graph.compute_layout_for(&graph.series)?;
        Self::apply(graph, &layout)?;
        debug!(
            width = layout.surface.width,
            height = layout.surface.height,
            ratio = layout.ratio,
            "line graph resized"
        );
        graph.layout = Some(layout);
        Ok(())
    }

    /// Writes `layout` onto existing elements without recreating markers.
    pub(super) fn apply<S: DrawSurface>(
        graph: &mut LineGraph<S>,
        layout: &LayoutState,
    ) -> GraphResult<()> {
        write_view_box(&mut graph.surface, layout)?;
        write_line_path(&mut graph.surface, layout)?;
        let total_length = graph.surface.path_length(SurfaceElement::Line)?;
        graph.reveal.refresh_length(&mut graph.surface, total_length)?;
        write_line_stroke(&mut graph.surface, layout)?;

        graph.markers.restyle(&mut graph.surface, layout)?;
        graph.markers.reposition(&mut graph.surface, &layout.points)?;
        write_paths(&mut graph.surface, layout)?;
        graph.marker_diameter_px = graph.markers.measured_diameter_px(&graph.surface)?;

        graph.tooltip.reset(&mut graph.surface)
    }
}

impl<S: DrawSurface> LineGraph<S> {
    /// Viewport resize hook.
    pub fn on_resize(&mut self) -> GraphResult<()> {
        ResizeCoordinator::on_resize(self)
    }
}

pub(super) fn write_view_box<S: DrawSurface>(
    surface: &mut S,
    layout: &LayoutState,
) -> GraphResult<()> {
    let view_box = layout.view_box;
    let value = [
        view_box.origin_x,
        view_box.origin_y,
        view_box.width,
        view_box.height,
    ]
    .map(format_number)
    .join(" ");
    surface.set_attribute(SurfaceElement::Root, attr::VIEW_BOX, value)
}

pub(super) fn write_line_path<S: DrawSurface>(
    surface: &mut S,
    layout: &LayoutState,
) -> GraphResult<()> {
    surface.set_attribute(SurfaceElement::Line, attr::D, layout.paths.line.clone())
}

pub(super) fn write_line_stroke<S: DrawSurface>(
    surface: &mut S,
    layout: &LayoutState,
) -> GraphResult<()> {
    surface.set_style(
        SurfaceElement::Line,
        style::STROKE_WIDTH,
        format!("{}px", format_number(layout.line_stroke_width)),
    )
}

/// Overlay and background paths.
pub(super) fn write_paths<S: DrawSurface>(surface: &mut S, layout: &LayoutState) -> GraphResult<()> {
    surface.set_attribute(
        SurfaceElement::Overlay,
        attr::D,
        layout.paths.overlay.clone(),
    )?;
    surface.set_attribute(
        SurfaceElement::Background,
        attr::D,
        layout.paths.background.clone(),
    )
}
