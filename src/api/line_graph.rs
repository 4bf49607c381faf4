use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataSeries, LayoutState};
use crate::error::{GraphError, GraphResult};
use crate::interaction::{
    PointerSubscription, SubscriptionToken, Throttle, TooltipController, TooltipState,
};
use crate::render::{DrawSurface, Marker, MarkerLayer, RevealAnimator, RevealPhase};

use super::GraphConfig;

/// Lifecycle of one rendering session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    Created,
    Active,
    TornDown,
}

/// Main orchestration facade consumed by host applications.
///
/// `LineGraph` owns the layout, the marker layer, the reveal animation and
/// the tooltip, and drives them from the host's lifecycle hooks:
/// `initialize`, `on_tick`, `pointer_move`, `on_resize` and `teardown`.
/// Every hook takes `&mut self`, so passes never interleave.
pub struct LineGraph<S: DrawSurface> {
    pub(super) surface: S,
    pub(super) config: GraphConfig,
    pub(super) series: DataSeries,
    pub(super) layout: Option<LayoutState>,
    pub(super) markers: MarkerLayer,
    pub(super) reveal: RevealAnimator,
    pub(super) tooltip: TooltipController,
    pub(super) throttle: Throttle,
    pub(super) subscription: Option<PointerSubscription>,
    pub(super) lifecycle: Lifecycle,
    pub(super) marker_diameter_px: Option<f64>,
}

impl<S: DrawSurface> LineGraph<S> {
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for hosts that drive the surface directly, e.g. to
    /// apply a new viewport size before calling `on_resize`.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    #[must_use]
    pub fn series(&self) -> &DataSeries {
        &self.series
    }

    #[must_use]
    pub fn layout(&self) -> Option<&LayoutState> {
        self.layout.as_ref()
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        self.markers.markers()
    }

    #[must_use]
    pub fn reveal_phase(&self) -> RevealPhase {
        self.reveal.phase()
    }

    #[must_use]
    pub fn tooltip_state(&self) -> &TooltipState {
        self.tooltip.state()
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Rendered width of a marker as measured after the last layout pass.
    #[must_use]
    pub fn marker_diameter_px(&self) -> Option<f64> {
        self.marker_diameter_px
    }

    /// Token for external event sources; `None` before init and after teardown.
    #[must_use]
    pub fn pointer_subscription_token(&self) -> Option<SubscriptionToken> {
        self.subscription.as_ref().map(PointerSubscription::token)
    }

    /// Second phase of the reveal animation, called on the host's next
    /// scheduling tick once the surface has settled after `initialize`.
    ///
    /// Returns `true` when the line was revealed by this call.
    pub fn on_tick(&mut self) -> GraphResult<bool> {
        if self.lifecycle != Lifecycle::Active {
            return Ok(false);
        }
        self.reveal.on_tick(&mut self.surface)
    }

    /// Releases the pointer subscription. Later pointer events are ignored
    /// and later resizes are rejected.
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
        }
        if self.lifecycle != Lifecycle::TornDown {
            debug!(markers = self.markers.len(), "line graph torn down");
        }
        self.lifecycle = Lifecycle::TornDown;
    }

    pub(super) fn ensure_active(&self) -> GraphResult<()> {
        match self.lifecycle {
            Lifecycle::Created => Err(GraphError::NotInitialized),
            Lifecycle::Active => Ok(()),
            Lifecycle::TornDown => Err(GraphError::TornDown),
        }
    }

    pub(super) fn compute_layout_for(&self, series: &DataSeries) -> GraphResult<LayoutState> {
        LayoutState::compute(
            series,
            self.config.settings,
            self.config.base_view_box(),
            self.surface.pixel_size(),
        )
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
