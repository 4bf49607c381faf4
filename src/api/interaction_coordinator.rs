use tracing::trace;

use crate::error::GraphResult;
use crate::interaction::{PointerEvent, PointerSubscription};
use crate::render::{DrawSurface, SurfaceElement};

use super::LineGraph;

pub(super) struct InteractionCoordinator;

impl InteractionCoordinator {
    pub(super) fn pointer_move<S: DrawSurface>(
        graph: &mut LineGraph<S>,
        event: PointerEvent,
    ) -> GraphResult<bool> {
        if !graph
            .subscription
            .as_ref()
            .is_some_and(PointerSubscription::is_live)
        {
            trace!("pointer event without live subscription ignored");
            return Ok(false);
        }
        if !graph.throttle.admit(event.at) {
            return Ok(false);
        }

        let SurfaceElement::Marker(id) = event.target else {
            return Ok(false);
        };
        let Some(marker) = graph.markers.hit(id) else {
            return Ok(false);
        };
        let transform = graph.tooltip.place(&mut graph.surface, marker)?;
        trace!(
            index = marker.index(),
            x = transform.x,
            y = transform.y,
            "tooltip placed"
        );
        Ok(true)
    }
}

impl<S: DrawSurface> LineGraph<S> {
    /// Pointer-move hook, rate limited by the configured throttle window.
    ///
    /// Returns `true` when the event moved the tooltip. The tooltip is left
    /// untouched by events over non-marker elements, events inside the
    /// throttle window and events after teardown.
    pub fn pointer_move(&mut self, event: PointerEvent) -> GraphResult<bool> {
        InteractionCoordinator::pointer_move(self, event)
    }
}
