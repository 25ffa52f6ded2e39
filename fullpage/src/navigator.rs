use alloc::sync::Arc;
use core::cell::Cell;

use crate::{
    NavKey, NavPhase, NavState, NavigatorOptions, Slide, SlideEntry, SlideKey, SlideRegistry,
    SlideTransform,
};

/// A headless slide navigation machine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; slides are registered as `(key, geometry)` handles.
/// - Your adapter drives it by reporting geometry and calling the navigation entry points.
/// - Rendering consumes the pure [`SlideTransform`] output; interpolation is the host's job.
///
/// Time is injected: entry points that start or expire a transition take a monotonic
/// `now_ms`. While a transition is in flight, further `goto` calls are ignored so
/// overlapping scroll/resize/keyboard triggers cannot fight each other.
///
/// For input adapters and a ready-made controller, see the `fullpage-adapter` crate.
#[derive(Clone, Debug)]
pub struct Navigator<K = SlideKey> {
    options: NavigatorOptions<K>,
    registry: SlideRegistry<K>,

    slide_index: usize,
    translate_y: i64,
    fullpage_height: u32,
    viewport_height: u32,
    reset_scroll: bool,
    is_transitioning: bool,
    transition_started_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<Option<(usize, usize)>>,
}

impl<K: NavKey> Navigator<K> {
    /// Creates a new navigator from options.
    ///
    /// If `options.initial_heights` is set, those measurements are applied immediately.
    pub fn new(options: NavigatorOptions<K>) -> Self {
        let (fullpage_height, viewport_height) = options.initial_heights.unwrap_or_default();
        fpdebug!(
            enabled = options.enabled,
            transition_duration_ms = options.transition_duration_ms,
            "Navigator::new"
        );
        Self {
            options,
            registry: SlideRegistry::new(),
            slide_index: 0,
            translate_y: 0,
            fullpage_height,
            viewport_height,
            reset_scroll: false,
            is_transitioning: false,
            transition_started_ms: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(None),
        }
    }

    pub fn options(&self) -> &NavigatorOptions<K> {
        &self.options
    }

    pub fn registry(&self) -> &SlideRegistry<K> {
        &self.registry
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn slide_count(&self) -> usize {
        self.registry.len()
    }

    pub fn current_index(&self) -> usize {
        self.slide_index
    }

    pub fn current_slide(&self) -> Option<&SlideEntry<K>> {
        self.registry.get(self.slide_index)
    }

    pub fn translate_y(&self) -> i64 {
        self.translate_y
    }

    pub fn fullpage_height(&self) -> u32 {
        self.fullpage_height
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn reset_scroll(&self) -> bool {
        self.reset_scroll
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    pub fn phase(&self) -> NavPhase {
        if self.is_transitioning {
            NavPhase::Transitioning
        } else {
            NavPhase::Idle
        }
    }

    /// The `(translate_y, duration_ms)` pair the presentation shell should render.
    pub fn transform(&self) -> SlideTransform {
        SlideTransform {
            translate_y: self.translate_y,
            duration_ms: self.options.transition_duration_ms,
        }
    }

    /// Returns a lightweight snapshot of the current navigation state.
    pub fn state(&self) -> NavState {
        NavState {
            slide_index: self.slide_index,
            translate_y: self.translate_y,
            fullpage_height: self.fullpage_height,
            viewport_height: self.viewport_height,
            reset_scroll: self.reset_scroll,
            is_transitioning: self.is_transitioning,
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// The slide index is clamped into the current registry and the translation re-derived
    /// from current geometry. When `state.is_transitioning` is set, the transition timer is
    /// restarted as if the move happened at `now_ms`.
    pub fn restore_state(&mut self, state: NavState, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        self.batch_update(|n| {
            n.set_heights(state.fullpage_height, state.viewport_height);
            let len = n.registry.len();
            n.slide_index = if len == 0 {
                0
            } else {
                state.slide_index.min(len - 1)
            };
            n.reset_scroll = state.reset_scroll;
            n.reclamp_translate();
            if state.is_transitioning && n.options.transition_duration_ms > 0 {
                n.is_transitioning = true;
                n.transition_started_ms = Some(now_ms);
            } else {
                n.is_transitioning = false;
                n.transition_started_ms = None;
            }
            n.notify_unmoved();
        });
    }

    // --- options surface ---

    pub fn set_options(&mut self, options: NavigatorOptions<K>) {
        let was_enabled = self.options.enabled;
        self.options = options;
        fptrace!(
            enabled = self.options.enabled,
            transition_duration_ms = self.options.transition_duration_ms,
            "Navigator::set_options"
        );
        if !self.options.enabled || !was_enabled {
            self.reset_to_initial();
        } else {
            self.reclamp_translate();
        }
        self.notify_unmoved();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut NavigatorOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Navigator<K>, usize, usize) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify_unmoved();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        self.reset_to_initial();
        self.notify_unmoved();
    }

    pub fn set_transition_duration_ms(&mut self, transition_duration_ms: u64) {
        self.options.transition_duration_ms = transition_duration_ms;
        self.notify_unmoved();
    }

    pub fn set_scroll_cooldown_ms(&mut self, scroll_cooldown_ms: u64) {
        self.options.scroll_cooldown_ms = scroll_cooldown_ms;
        self.notify_unmoved();
    }

    pub fn set_keyboard_enabled(&mut self, keyboard_enabled: bool) {
        self.options.keyboard_enabled = keyboard_enabled;
        self.notify_unmoved();
    }

    // --- geometry ---

    pub fn set_fullpage_height(&mut self, height: u32) {
        if !self.options.enabled || self.fullpage_height == height {
            return;
        }
        self.fullpage_height = height;
        self.reclamp_translate();
        self.notify_unmoved();
    }

    pub fn set_viewport_height(&mut self, height: u32) {
        if !self.options.enabled || self.viewport_height == height {
            return;
        }
        self.viewport_height = height;
        self.reclamp_translate();
        self.notify_unmoved();
    }

    /// Applies both measurements in a single coalesced update.
    ///
    /// This is the recommended entry point for resize handling: with an `on_change` callback
    /// that drives rendering, two separate setters would notify twice.
    pub fn set_heights(&mut self, fullpage_height: u32, viewport_height: u32) {
        self.batch_update(|n| {
            n.set_fullpage_height(fullpage_height);
            n.set_viewport_height(viewport_height);
        });
    }

    // --- registry maintenance ---

    /// Registers a slide, keeping the registry sorted by `offset_top`.
    ///
    /// Idempotent on membership: re-registering a key updates its geometry. The active
    /// index keeps pointing at the same slide when the insert shifts positions, and the
    /// translation is re-clamped. Returns the index the slide landed at.
    pub fn register_slide(&mut self, key: K, slide: Slide) -> usize
    where
        K: Clone,
    {
        let active_key = self.active_key();
        let prev = self.slide_index;
        let at = self.registry.register(key, slide);
        self.realign_active(active_key);
        fptrace!(
            at,
            count = self.registry.len(),
            "Navigator::register_slide"
        );
        self.notify(prev, self.slide_index);
        at
    }

    /// Unregisters a slide. Returns `false` when the key was never registered.
    ///
    /// Unregistering the active slide clamps the index to the nearest valid one (never past
    /// the end of the now-shorter registry).
    pub fn unregister_slide(&mut self, key: &K) -> bool
    where
        K: Clone,
    {
        let active_key = self.active_key();
        let prev = self.slide_index;
        if self.registry.unregister(key).is_none() {
            return false;
        }
        self.realign_active(active_key);
        fptrace!(count = self.registry.len(), "Navigator::unregister_slide");
        self.notify(prev, self.slide_index);
        true
    }

    // --- navigation ---

    /// Navigates to `index`.
    ///
    /// Silent no-op (returns `false`) when the index is out of range, equals the current
    /// index, the navigator is disabled, or a transition is still in flight at `now_ms`.
    pub fn goto(&mut self, index: usize, now_ms: u64) -> bool {
        self.goto_with(index, false, now_ms)
    }

    /// Like [`goto`](Self::goto), additionally asking the host to reset its raw scroll
    /// position once the move lands.
    pub fn goto_with(&mut self, index: usize, reset_scroll: bool, now_ms: u64) -> bool {
        if !self.options.enabled {
            return false;
        }
        self.update_transition(now_ms);
        if self.is_transitioning {
            fptrace!(index, "goto ignored: transition in flight");
            return false;
        }
        if index >= self.registry.len() {
            fpwarn!(index, count = self.registry.len(), "goto: index out of range");
            return false;
        }
        if index == self.slide_index {
            return false;
        }

        let prev = self.slide_index;
        self.slide_index = index;
        self.translate_y = self.target_translate(index);
        self.reset_scroll = reset_scroll;
        if self.options.transition_duration_ms > 0 {
            self.is_transitioning = true;
            self.transition_started_ms = Some(now_ms);
        }
        fpdebug!(
            prev,
            next = index,
            translate_y = self.translate_y,
            "goto"
        );
        self.notify(prev, index);
        true
    }

    /// Advances to the next slide, wrapping from the last slide back to the first.
    ///
    /// The wraparound is designed behavior, not an overflow artifact. No-op with fewer than
    /// two slides.
    pub fn next(&mut self, now_ms: u64) -> bool {
        let len = self.registry.len();
        if len <= 1 {
            return false;
        }
        let target = if self.slide_index + 1 >= len {
            0
        } else {
            self.slide_index + 1
        };
        self.goto_with(target, true, now_ms)
    }

    /// Goes back one slide, wrapping from slide 0 to the last slide.
    pub fn previous(&mut self, now_ms: u64) -> bool {
        let len = self.registry.len();
        if len <= 1 {
            return false;
        }
        let target = if self.slide_index == 0 {
            len - 1
        } else {
            self.slide_index - 1
        };
        self.goto_with(target, true, now_ms)
    }

    /// Jumps to slide 0. No-op with fewer than two slides.
    pub fn first(&mut self, now_ms: u64) -> bool {
        if self.registry.len() <= 1 {
            return false;
        }
        self.goto_with(0, true, now_ms)
    }

    /// Jumps to the last slide. No-op with fewer than two slides.
    pub fn last(&mut self, now_ms: u64) -> bool {
        let len = self.registry.len();
        if len <= 1 {
            return false;
        }
        self.goto_with(len - 1, true, now_ms)
    }

    /// Expires the transition window once `transition_duration_ms` has elapsed.
    ///
    /// Hosts call this from their frame/timer tick (or rely on the next `goto` doing it).
    pub fn update_transition(&mut self, now_ms: u64) {
        if !self.is_transitioning {
            return;
        }
        let Some(started) = self.transition_started_ms else {
            self.is_transitioning = false;
            return;
        };
        if now_ms.saturating_sub(started) >= self.options.transition_duration_ms {
            self.is_transitioning = false;
            self.transition_started_ms = None;
            self.notify_unmoved();
        }
    }

    /// Clears a pending scroll-reset request, returning whether one was pending.
    ///
    /// Shells without a scroll stream call this after honoring [`NavState::reset_scroll`];
    /// the scroll adapter clears it automatically on its next frame.
    pub fn acknowledge_scroll_reset(&mut self) -> bool {
        if !self.reset_scroll {
            return false;
        }
        self.reset_scroll = false;
        self.notify_unmoved();
        true
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// The notification fired at the end carries the previous index from before the batch
    /// and the index the batch ended on.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 {
            if let Some((prev, cur)) = self.notify_pending.replace(None) {
                self.notify_now(prev, cur);
            }
        }
    }

    // --- internals ---

    fn active_key(&self) -> Option<K>
    where
        K: Clone,
    {
        self.registry.get(self.slide_index).map(|e| e.key.clone())
    }

    /// Re-points `slide_index` after a registry mutation: same slide when it survived,
    /// clamped into range otherwise. Always re-derives the translation.
    fn realign_active(&mut self, active_key: Option<K>) {
        let len = self.registry.len();
        if len == 0 {
            self.slide_index = 0;
            self.translate_y = 0;
            return;
        }
        match active_key.and_then(|k| self.registry.index_of(&k)) {
            Some(i) => self.slide_index = i,
            None => self.slide_index = self.slide_index.min(len - 1),
        }
        self.reclamp_translate();
    }

    fn reclamp_translate(&mut self) {
        self.translate_y = self.target_translate(self.slide_index);
    }

    fn target_translate(&self, index: usize) -> i64 {
        let Some(entry) = self.registry.get(index) else {
            return 0;
        };
        // Never scroll past the end of content; a viewport taller than the container
        // clamps the shift to zero.
        let max_shift =
            (self.fullpage_height as u64).saturating_sub(self.viewport_height as u64);
        let shift = entry.offset_top.min(max_shift);
        -(shift as i64)
    }

    fn reset_to_initial(&mut self) {
        let (fullpage_height, viewport_height) = self.options.initial_heights.unwrap_or_default();
        self.fullpage_height = fullpage_height;
        self.viewport_height = viewport_height;
        self.slide_index = 0;
        self.reset_scroll = false;
        self.is_transitioning = false;
        self.transition_started_ms = None;
        self.reclamp_translate();
    }

    fn notify_now(&self, prev: usize, next: usize) {
        if let Some(cb) = &self.options.on_change {
            cb(self, prev, next);
        }
    }

    fn notify(&self, prev: usize, next: usize) {
        if self.notify_depth.get() > 0 {
            let merged = match self.notify_pending.get() {
                Some((first_prev, _)) => (first_prev, next),
                None => (prev, next),
            };
            self.notify_pending.set(Some(merged));
            return;
        }
        self.notify_now(prev, next);
    }

    fn notify_unmoved(&self) {
        self.notify(self.slide_index, self.slide_index);
    }
}
