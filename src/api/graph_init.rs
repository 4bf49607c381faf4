use tracing::debug;

use crate::core::{DataSeries, LayoutState};
use crate::error::{GraphError, GraphResult};
use crate::interaction::{PointerSubscription, Throttle, TooltipController};
use crate::render::{DrawSurface, MarkerLayer, RevealAnimator, SurfaceElement};

use super::resize_coordinator::{write_line_path, write_line_stroke, write_paths, write_view_box};
use super::{GraphConfig, Lifecycle, LineGraph};

impl<S: DrawSurface> LineGraph<S> {
    /// Creates an idle graph. Invalid settings fall back to their defaults.
    #[must_use]
    pub fn new(surface: S, series: DataSeries, config: GraphConfig) -> Self {
        let config = config.sanitized();
        Self {
            surface,
            series,
            layout: None,
            markers: MarkerLayer::default(),
            reveal: RevealAnimator::default(),
            tooltip: TooltipController::new(config.settings.tooltip_offset),
            throttle: Throttle::new(config.throttle_window()),
            subscription: None,
            lifecycle: Lifecycle::Created,
            marker_diameter_px: None,
            config,
        }
    }

    /// Runs the first layout pass, creates the markers, hides the line ahead
    /// of its reveal and subscribes to pointer movement.
    ///
    /// Nothing is written to the surface when the layout or any marker is
    /// invalid. Markers the surface already accepted are removed again when a
    /// later write fails, and the graph stays uninitialized.
    pub fn initialize(&mut self) -> GraphResult<()> {
        match self.lifecycle {
            Lifecycle::Created => {}
            Lifecycle::Active => return Err(GraphError::AlreadyInitialized),
            Lifecycle::TornDown => return Err(GraphError::TornDown),
        }

        let layout = self.compute_layout_for(&self.series)?;
        let plan = MarkerLayer::plan(&self.series, &layout, &self.config.marker_style)?;

        // Markers go first: a rejected marker rolls back before any other
        // element has been written.
        let mut markers = plan.realize(&mut self.surface)?;
        let scene = self.write_initial_scene(&layout).and_then(|total_length| {
            Ok((total_length, markers.measured_diameter_px(&self.surface)?))
        });
        let (total_length, marker_diameter_px) = match scene {
            Ok(scene) => scene,
            Err(err) => {
                self.reveal = RevealAnimator::default();
                markers.remove_all(&mut self.surface)?;
                return Err(err);
            }
        };
        self.marker_diameter_px = marker_diameter_px;
        self.markers = markers;

        self.subscription = Some(PointerSubscription::acquire());
        self.lifecycle = Lifecycle::Active;
        debug!(
            points = layout.points.len(),
            ratio = layout.ratio,
            total_length,
            "line graph initialized"
        );
        self.layout = Some(layout);
        Ok(())
    }

    fn write_initial_scene(&mut self, layout: &LayoutState) -> GraphResult<f64> {
        write_view_box(&mut self.surface, layout)?;
        write_line_path(&mut self.surface, layout)?;
        let total_length = self.surface.path_length(SurfaceElement::Line)?;
        self.reveal.hide(&mut self.surface, total_length)?;
        write_line_stroke(&mut self.surface, layout)?;
        write_paths(&mut self.surface, layout)?;
        Ok(total_length)
    }
}
