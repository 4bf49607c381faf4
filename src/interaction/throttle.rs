use std::time::{Duration, Instant};

use tracing::trace;

pub const DEFAULT_THROTTLE_WINDOW: Duration = Duration::from_millis(50);

/// Leading-edge rate limiter.
///
/// An event is admitted when no other event was admitted during the
/// preceding window; everything else is dropped, never queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    window: Duration,
    last_admitted: Option<Instant>,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_WINDOW)
    }
}

impl Throttle {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_admitted: None,
        }
    }

    #[must_use]
    pub fn window(self) -> Duration {
        self.window
    }

    pub fn admit(&mut self, at: Instant) -> bool {
        if let Some(last) = self.last_admitted {
            let elapsed = at.saturating_duration_since(last);
            if elapsed < self.window {
                trace!(elapsed_ms = elapsed.as_millis() as u64, "pointer event throttled");
                return false;
            }
        }
        self.last_admitted = Some(at);
        true
    }
}
