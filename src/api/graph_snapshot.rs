use serde::{Deserialize, Serialize};

use crate::core::{DataSeries, LayoutState};
use crate::error::{GraphError, GraphResult};
use crate::interaction::TooltipState;
use crate::render::{DrawSurface, Marker, RevealPhase};

use super::{Lifecycle, LineGraph};

/// Serializable view of the engine state, for diagnostics and fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub lifecycle: Lifecycle,
    pub series: DataSeries,
    pub layout: Option<LayoutState>,
    pub markers: Vec<Marker>,
    pub reveal: RevealPhase,
    pub tooltip: TooltipState,
    pub marker_diameter_px: Option<f64>,
}

impl GraphSnapshot {
    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("failed to parse snapshot json: {e}")))
    }
}

impl<S: DrawSurface> LineGraph<S> {
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            lifecycle: self.lifecycle,
            series: self.series.clone(),
            layout: self.layout.clone(),
            markers: self.markers.markers().to_vec(),
            reveal: self.reveal.phase(),
            tooltip: self.tooltip.state().clone(),
            marker_diameter_px: self.marker_diameter_px,
        }
    }
}
