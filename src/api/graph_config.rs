use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{GraphSettings, ViewBox};
use crate::error::{GraphError, GraphResult};
use crate::render::MarkerStyle;

/// Public graph bootstrap configuration.
///
/// Serializable so hosts can load appearance options from JSON; every field
/// missing from the input keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub settings: GraphSettings,
    #[serde(default = "default_view_box_extent")]
    pub view_box_width: f64,
    #[serde(default = "default_view_box_extent")]
    pub view_box_height: f64,
    #[serde(default)]
    pub marker_style: MarkerStyle,
    #[serde(default = "default_throttle_window_ms")]
    pub throttle_window_ms: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            settings: GraphSettings::default(),
            view_box_width: default_view_box_extent(),
            view_box_height: default_view_box_extent(),
            marker_style: MarkerStyle::default(),
            throttle_window_ms: default_throttle_window_ms(),
        }
    }
}

impl GraphConfig {
    /// Creates a config with default view box and throttle window.
    #[must_use]
    pub fn new(settings: GraphSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Sets the view box extent in view box units.
    #[must_use]
    pub fn with_view_box(mut self, width: f64, height: f64) -> Self {
        self.view_box_width = width;
        self.view_box_height = height;
        self
    }

    #[must_use]
    pub fn with_marker_style(mut self, marker_style: MarkerStyle) -> Self {
        self.marker_style = marker_style;
        self
    }

    /// Sets the minimum spacing between processed pointer events.
    #[must_use]
    pub fn with_throttle_window_ms(mut self, window_ms: u64) -> Self {
        self.throttle_window_ms = window_ms;
        self
    }

    #[must_use]
    pub fn base_view_box(&self) -> ViewBox {
        ViewBox::sized(self.view_box_width, self.view_box_height)
    }

    #[must_use]
    pub fn throttle_window(&self) -> Duration {
        Duration::from_millis(self.throttle_window_ms)
    }

    /// Strict validation for hosts that want errors instead of fallbacks.
    pub fn validate(self) -> GraphResult<Self> {
        self.settings.validate()?;
        for (name, value) in [
            ("view_box_width", self.view_box_width),
            ("view_box_height", self.view_box_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GraphError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }

    /// Replaces invalid values with defaults, logging each fallback.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.settings = self.settings.sanitized();
        for (name, value) in [
            ("view_box_width", &mut self.view_box_width),
            ("view_box_height", &mut self.view_box_height),
        ] {
            if !value.is_finite() || *value <= 0.0 {
                warn!(setting = name, value = *value, "falling back to default view box extent");
                *value = default_view_box_extent();
            }
        }
        self
    }

    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("failed to parse graph config json: {e}")))
    }

    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            GraphError::InvalidData(format!("failed to serialize graph config json: {e}"))
        })
    }
}

fn default_view_box_extent() -> f64 {
    100.0
}

fn default_throttle_window_ms() -> u64 {
    50
}
