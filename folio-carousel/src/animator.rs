//! Time-based progress of the in-flight index transition

use std::time::{Duration, Instant};

use folio_config::Easing;

use crate::types::{Direction, TransitionOrigin};

/// A transition from one centered index to the next.
///
/// The index is committed when the transition starts; this only tracks how
/// far the presenter should be through animating towards it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from_index: usize,
    pub to_index: usize,
    pub direction: Direction,
    pub origin: TransitionOrigin,
    pub started_at: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn ends_at(&self) -> Instant {
        self.started_at + self.duration
    }

    /// Eased progress in `0..=1` at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration || self.duration.is_zero() {
            return 1.0;
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        self.easing.apply(t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.ends_at()
    }
}
