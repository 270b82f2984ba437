//! What the engine currently wants from its driver.

use std::time::Instant;

/// Declared interest in external events.
///
/// The driver re-reads this after every update. An unmounted engine declares
/// nothing, so keyboard delivery and timer scheduling stop with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Subscription {
    /// Deliver arrow-key events.
    pub keyboard: bool,
    /// Call `tick` once this instant has passed.
    pub wake_at: Option<Instant>,
}

impl Subscription {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        !self.keyboard && self.wake_at.is_none()
    }
}
