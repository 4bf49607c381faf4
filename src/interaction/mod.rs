mod subscription;
mod throttle;
mod tooltip;

pub use subscription::{PointerSubscription, SubscriptionToken};
pub use throttle::{DEFAULT_THROTTLE_WINDOW, Throttle};
pub use tooltip::{TooltipController, TooltipState, TooltipTransform};

use std::time::Instant;

use crate::render::SurfaceElement;

/// Pointer movement over the draw surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Element under the pointer.
    pub target: SurfaceElement,
    pub at: Instant,
}

impl PointerEvent {
    #[must_use]
    pub fn new(target: SurfaceElement, at: Instant) -> Self {
        Self { target, at }
    }
}
