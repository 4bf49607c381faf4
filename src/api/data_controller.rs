use tracing::debug;

use crate::core::DataSeries;
use crate::error::{GraphError, GraphResult};
use crate::render::{DrawSurface, MarkerLayer};

use super::resize_coordinator::ResizeCoordinator;
use super::{Lifecycle, LineGraph};

impl<S: DrawSurface> LineGraph<S> {
    /// Replaces the data series.
    ///
    /// After initialization this runs a full re-layout. Markers are kept and
    /// rebound when the length is unchanged, otherwise they are recreated.
    /// The reveal animation is never replayed. The layout and every marker
    /// are validated before the first surface write.
    pub fn set_series(&mut self, series: DataSeries) -> GraphResult<()> {
        match self.lifecycle {
            Lifecycle::Created => {
                debug!(count = series.len(), "set series before initialize");
                self.series = series;
                return Ok(());
            }
            Lifecycle::TornDown => return Err(GraphError::TornDown),
            Lifecycle::Active => {}
        }

        let layout = self.compute_layout_for(&series)?;
        let plan = MarkerLayer::plan(&series, &layout, &self.config.marker_style)?;
        let recreated = plan.len() != self.markers.len();
        if recreated {
            // New markers are created before the old ones go, so a rejected
            // marker leaves the current set in place.
            let replacement = plan.realize(&mut self.surface)?;
            self.markers.remove_all(&mut self.surface)?;
            self.markers = replacement;
        } else {
            self.markers.rebind_values(&mut self.surface, &series)?;
        }
        ResizeCoordinator::apply(self, &layout)?;

        debug!(count = series.len(), recreated, "set series");
        self.series = series;
        self.layout = Some(layout);
        Ok(())
    }
}
