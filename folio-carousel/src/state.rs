//! CarouselEngine: index rotation, auto-advance and detail selection over a
//! read-only catalog.
//!
//! The engine never reads the clock. Every operation that can start or cancel
//! a timer takes `now`, and deferred work lives in [`Deadlines`] until the
//! driver calls [`CarouselEngine::tick`].

use std::time::{Duration, Instant};

use folio_config::CarouselConfig;
use folio_model::{CarouselItem, Catalog, ItemId};

use crate::animator::Transition;
use crate::error::{CarouselError, Result};
use crate::keyboard::{self, Key};
use crate::subscription::Subscription;
use crate::timers::{Deadlines, TimerKind};
use crate::types::{Direction, Lifecycle, TransitionOrigin};
use crate::view::{CarouselView, VisibleEntry, derive_entries};
use crate::window::wrap_index;

/// Floor for every scheduled delay so a zero setting cannot spin `tick`.
const MIN_DELAY: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct CarouselEngine {
    // Content
    catalog: Catalog,
    config: CarouselConfig,

    // Rotation
    current_index: usize,
    is_transitioning: bool,
    transition: Option<Transition>,
    auto_rotate_enabled: bool,
    /// When the last auto-advance fired; the next one is due an interval later.
    last_auto_advance: Option<Instant>,

    // Presentation state
    last_error: Option<String>,
    selected: Option<ItemId>,

    // Lifetime
    lifecycle: Lifecycle,
    deadlines: Deadlines,
    revision: u64,
}

impl CarouselEngine {
    /// Create the engine for `catalog` and arm auto-rotation if configured.
    pub fn mount(catalog: Catalog, config: CarouselConfig, now: Instant) -> Self {
        let mut engine = Self {
            catalog,
            auto_rotate_enabled: config.auto_rotate_on_mount,
            config,
            current_index: 0,
            is_transitioning: false,
            transition: None,
            last_auto_advance: None,
            last_error: None,
            selected: None,
            lifecycle: Lifecycle::Mounted,
            deadlines: Deadlines::new(),
            revision: 0,
        };
        if engine.auto_rotate_enabled {
            engine.arm_auto_advance(now);
        }
        // Surface a failing initial layout so `retry` has something to clear.
        if let Err(err) = engine.visible_entries() {
            log::warn!("Carousel layout failed on mount: {err}");
            engine.last_error = Some(err.to_string());
        }
        log::debug!(
            "Carousel mounted with {} items (auto_rotate={})",
            engine.catalog.len(),
            engine.auto_rotate_enabled
        );
        engine
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> Option<&CarouselItem> {
        self.catalog.get(self.current_index)
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    pub fn auto_rotate_enabled(&self) -> bool {
        self.auto_rotate_enabled
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn selected(&self) -> Option<&ItemId> {
        self.selected.as_ref()
    }

    pub fn selected_item(&self) -> Option<&CarouselItem> {
        self.selected.as_ref().and_then(|id| self.catalog.find(id))
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Bumped by every state mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Pending deadline for `kind`, if armed.
    pub fn deadline(&self, kind: TimerKind) -> Option<Instant> {
        self.deadlines.get(kind)
    }

    pub fn has_pending_timers(&self) -> bool {
        !self.deadlines.is_empty()
    }

    /// Move the center one step. Ignored while a transition is in flight, when
    /// the catalog is empty, or after unmount.
    ///
    /// A successful rotation suspends auto-rotation; it resumes one cooldown
    /// after the transition settles unless the user navigates again.
    pub fn rotate(&mut self, direction: Direction, now: Instant) -> bool {
        if !self.is_mounted() || self.is_transitioning || self.catalog.is_empty()
        {
            log::trace!("Carousel rotate({direction:?}) ignored");
            return false;
        }

        match self.begin_transition(direction, TransitionOrigin::Manual, now) {
            Ok(()) => {
                self.auto_rotate_enabled = false;
                self.deadlines.cancel(TimerKind::AutoAdvance);
                self.deadlines.cancel(TimerKind::Resume);
                true
            }
            Err(err) => {
                self.record_failure(err);
                false
            }
        }
    }

    /// Arrow keys rotate; everything else is ignored.
    pub fn handle_key(&mut self, key: Key, now: Instant) -> bool {
        if !self.is_mounted() {
            return false;
        }
        match keyboard::binding(key) {
            Some(direction) => self.rotate(direction, now),
            None => false,
        }
    }

    pub fn toggle_auto_rotate(&mut self, now: Instant) -> bool {
        let enabled = !self.auto_rotate_enabled;
        self.set_auto_rotate(enabled, now)
    }

    /// Turning auto-rotation on arms a fresh interval; turning it off cancels
    /// the pending step and any pending cooldown resume.
    pub fn set_auto_rotate(&mut self, enabled: bool, now: Instant) -> bool {
        if !self.is_mounted() || self.auto_rotate_enabled == enabled {
            return false;
        }
        self.auto_rotate_enabled = enabled;
        self.deadlines.cancel(TimerKind::Resume);
        if enabled {
            self.arm_auto_advance(now);
        } else {
            self.deadlines.cancel(TimerKind::AutoAdvance);
        }
        self.touch();
        log::debug!("Carousel auto-rotate {}", if enabled { "on" } else { "off" });
        true
    }

    /// Open `id` in the detail view, or close it with `None`. Unknown ids are
    /// ignored. Rotation state is never touched.
    pub fn select(&mut self, id: Option<ItemId>) -> bool {
        if !self.is_mounted() {
            return false;
        }
        if let Some(id) = &id
            && !self.catalog.contains(id)
        {
            log::warn!("Carousel select ignored unknown item {id}");
            return false;
        }
        if self.selected != id {
            self.selected = id;
            self.touch();
        }
        true
    }

    /// Re-derive the layout for the current index and clear `last_error` if it
    /// now succeeds.
    pub fn retry(&mut self) -> bool {
        if !self.is_mounted() || self.last_error.is_none() {
            return false;
        }
        match derive_entries(&self.catalog, self.current_index, &self.config) {
            Ok(_) => {
                self.last_error = None;
                self.touch();
                true
            }
            Err(err) => {
                self.record_failure(err);
                false
            }
        }
    }

    /// Fire every deadline at or before `now`, oldest first.
    pub fn tick(&mut self, now: Instant) {
        if !self.is_mounted() {
            return;
        }
        while let Some((kind, at)) = self.deadlines.pop_due(now) {
            self.fire(kind, at);
        }
    }

    /// Tear down: cancel every timer and stop accepting intents.
    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.lifecycle = Lifecycle::Unmounted;
        self.deadlines.clear();
        self.touch();
        log::debug!("Carousel unmounted at index {}", self.current_index);
    }

    pub fn subscription(&self) -> Subscription {
        if !self.is_mounted() {
            return Subscription::none();
        }
        Subscription {
            keyboard: true,
            wake_at: self.deadlines.earliest(),
        }
    }

    pub fn visible_entries(&self) -> Result<Vec<VisibleEntry>> {
        derive_entries(&self.catalog, self.current_index, &self.config)
    }

    pub fn transition_progress(&self, now: Instant) -> Option<f32> {
        self.transition.map(|transition| transition.progress(now))
    }

    pub fn view(&self) -> CarouselView {
        let (entries, derive_error) = match self.visible_entries() {
            Ok(entries) => (entries, None),
            Err(err) => (Vec::new(), Some(err.to_string())),
        };
        CarouselView {
            entries,
            len: self.catalog.len(),
            current_index: self.current_index,
            is_transitioning: self.is_transitioning,
            auto_rotate_enabled: self.auto_rotate_enabled,
            last_error: self.last_error.clone().or(derive_error),
            selected: self.selected_item().cloned(),
            transition: self.transition,
            revision: self.revision,
            mounted: self.is_mounted(),
        }
    }

    fn begin_transition(
        &mut self,
        direction: Direction,
        origin: TransitionOrigin,
        now: Instant,
    ) -> Result<()> {
        let from = self.current_index;
        let to = wrap_index(from, direction.delta(), self.catalog.len())?;
        // Lay out the target before committing so a failure leaves the index alone.
        derive_entries(&self.catalog, to, &self.config)?;

        let duration = self.config.transition().max(MIN_DELAY);
        self.current_index = to;
        self.is_transitioning = true;
        self.transition = Some(Transition {
            from_index: from,
            to_index: to,
            direction,
            origin,
            started_at: now,
            duration,
            easing: self.config.easing,
        });
        self.deadlines.arm(TimerKind::TransitionEnd, now + duration);
        self.last_error = None;
        self.touch();
        log::debug!("Carousel {origin:?} rotation {from} -> {to}");
        Ok(())
    }

    fn fire(&mut self, kind: TimerKind, at: Instant) {
        match kind {
            TimerKind::TransitionEnd => self.finish_transition(at),
            TimerKind::Resume => {
                self.auto_rotate_enabled = true;
                self.arm_auto_advance(at);
                self.touch();
                log::debug!("Carousel auto-rotate resumed after cooldown");
            }
            TimerKind::AutoAdvance => self.auto_advance(at),
        }
    }

    fn finish_transition(&mut self, at: Instant) {
        self.is_transitioning = false;
        let origin = self.transition.take().map(|transition| transition.origin);
        self.touch();

        match origin {
            Some(TransitionOrigin::Manual) if !self.auto_rotate_enabled => {
                let cooldown = self.config.resume_cooldown().max(MIN_DELAY);
                self.deadlines.arm(TimerKind::Resume, at + cooldown);
            }
            Some(TransitionOrigin::Auto) if self.auto_rotate_enabled => {
                let due = self
                    .last_auto_advance
                    .map(|fired| fired + self.auto_interval())
                    .unwrap_or(at)
                    .max(at);
                self.deadlines.arm(TimerKind::AutoAdvance, due);
            }
            _ => {}
        }
    }

    fn auto_advance(&mut self, at: Instant) {
        if !self.auto_rotate_enabled || self.catalog.is_empty() {
            return;
        }
        if self.is_transitioning {
            // Dropped for this tick; the next one re-checks.
            self.arm_auto_advance(at);
            return;
        }
        self.last_auto_advance = Some(at);
        if let Err(err) =
            self.begin_transition(Direction::Forward, TransitionOrigin::Auto, at)
        {
            self.record_failure(err);
            self.arm_auto_advance(at);
        }
    }

    fn arm_auto_advance(&mut self, from: Instant) {
        if self.catalog.is_empty() {
            return;
        }
        let due = from + self.auto_interval();
        self.deadlines.arm(TimerKind::AutoAdvance, due);
    }

    fn auto_interval(&self) -> Duration {
        self.config.auto_rotate_interval().max(MIN_DELAY)
    }

    fn record_failure(&mut self, err: CarouselError) {
        log::warn!("Carousel layout failed: {err}");
        self.last_error = Some(err.to_string());
        self.is_transitioning = false;
        self.transition = None;
        self.deadlines.cancel(TimerKind::TransitionEnd);
        self.touch();
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
