use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Scoped pointer-move subscription.
///
/// Acquired when the graph initializes and released on teardown or drop.
/// Event sources hold a [`SubscriptionToken`] and stop delivering once it
/// reports the subscription as released.
#[derive(Debug)]
pub struct PointerSubscription {
    live: Arc<AtomicBool>,
}

/// Cheap observer of a [`PointerSubscription`]'s liveness.
#[derive(Debug, Clone)]
pub struct SubscriptionToken {
    live: Arc<AtomicBool>,
}

impl PointerSubscription {
    #[must_use]
    pub fn acquire() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    #[must_use]
    pub fn token(&self) -> SubscriptionToken {
        SubscriptionToken {
            live: Arc::clone(&self.live),
        }
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn release(self) {
        drop(self);
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        self.live.store(false, Ordering::Release);
    }
}

impl SubscriptionToken {
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::PointerSubscription;

    #[test]
    fn token_observes_release() {
        let subscription = PointerSubscription::acquire();
        let token = subscription.token();
        assert!(token.is_live());
        subscription.release();
        assert!(!token.is_live());
    }
}
