//! Engine-owned deadline slots.
//!
//! Every deferred action of the carousel is one optional instant. Arming a slot
//! replaces its previous deadline, cancelling clears it, and teardown clears
//! all of them at once. Nothing here sleeps: the driver asks for the earliest
//! deadline and calls back into the engine once it has passed.

use std::time::Instant;

/// Deferred actions the engine can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// End of the in-flight transition.
    TransitionEnd,
    /// End of the post-navigation cooldown; re-enables auto-rotation.
    Resume,
    /// Next auto-rotation step.
    AutoAdvance,
}

impl TimerKind {
    /// Firing order when several deadlines fall on the same instant.
    const ORDER: [TimerKind; 3] = [
        TimerKind::TransitionEnd,
        TimerKind::Resume,
        TimerKind::AutoAdvance,
    ];
}

#[derive(Debug, Clone, Default)]
pub struct Deadlines {
    transition_end: Option<Instant>,
    resume: Option<Instant>,
    auto_advance: Option<Instant>,
}

impl Deadlines {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: TimerKind) -> Option<Instant> {
        match kind {
            TimerKind::TransitionEnd => self.transition_end,
            TimerKind::Resume => self.resume,
            TimerKind::AutoAdvance => self.auto_advance,
        }
    }

    fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<Instant> {
        match kind {
            TimerKind::TransitionEnd => &mut self.transition_end,
            TimerKind::Resume => &mut self.resume,
            TimerKind::AutoAdvance => &mut self.auto_advance,
        }
    }

    pub fn arm(&mut self, kind: TimerKind, at: Instant) {
        *self.slot_mut(kind) = Some(at);
    }

    pub fn cancel(&mut self, kind: TimerKind) {
        *self.slot_mut(kind) = None;
    }

    pub fn get(&self, kind: TimerKind) -> Option<Instant> {
        self.slot(kind)
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.slot(kind).is_some()
    }

    pub fn is_empty(&self) -> bool {
        TimerKind::ORDER.iter().all(|kind| !self.is_armed(*kind))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Earliest armed deadline.
    pub fn earliest(&self) -> Option<Instant> {
        TimerKind::ORDER
            .iter()
            .filter_map(|kind| self.slot(*kind))
            .min()
    }

    /// Disarm and return the earliest deadline at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerKind, Instant)> {
        let (kind, at) = TimerKind::ORDER
            .iter()
            .filter_map(|kind| self.slot(*kind).map(|at| (*kind, at)))
            .filter(|(_, at)| *at <= now)
            // min_by_key keeps the first of equal keys, i.e. ORDER breaks ties
            .min_by_key(|(_, at)| *at)?;
        self.cancel(kind);
        Some((kind, at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn pops_in_chronological_order_then_tie_order() {
        let t0 = Instant::now();
        let mut deadlines = Deadlines::new();
        deadlines.arm(TimerKind::AutoAdvance, t0 + Duration::from_millis(10));
        deadlines.arm(TimerKind::Resume, t0 + Duration::from_millis(10));
        deadlines.arm(TimerKind::TransitionEnd, t0 + Duration::from_millis(20));

        let now = t0 + Duration::from_millis(30);
        let fired: Vec<_> = std::iter::from_fn(|| deadlines.pop_due(now))
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(
            fired,
            vec![
                TimerKind::Resume,
                TimerKind::AutoAdvance,
                TimerKind::TransitionEnd
            ]
        );
        assert!(deadlines.is_empty());
    }

    #[test]
    fn future_deadlines_stay_armed() {
        let t0 = Instant::now();
        let mut deadlines = Deadlines::new();
        deadlines.arm(TimerKind::AutoAdvance, t0 + Duration::from_secs(4));
        assert_eq!(deadlines.pop_due(t0), None);
        assert_eq!(deadlines.earliest(), Some(t0 + Duration::from_secs(4)));
    }

    #[test]
    fn rearming_replaces_and_clear_cancels_everything() {
        let t0 = Instant::now();
        let mut deadlines = Deadlines::new();
        deadlines.arm(TimerKind::Resume, t0 + Duration::from_secs(1));
        deadlines.arm(TimerKind::Resume, t0 + Duration::from_secs(5));
        assert_eq!(
            deadlines.get(TimerKind::Resume),
            Some(t0 + Duration::from_secs(5))
        );

        deadlines.arm(TimerKind::TransitionEnd, t0);
        deadlines.clear();
        assert!(deadlines.is_empty());
        assert_eq!(deadlines.earliest(), None);
    }
}
