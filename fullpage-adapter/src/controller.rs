use fullpage::{NavKey, Navigator, NavigatorOptions, SlideKey};

use crate::{
    Easing, FullscreenDriver, FullscreenToggle, KeyCode, ResizeAdapter, ScrollAdapter, Transition,
    keyboard,
};

/// A framework-neutral controller that wraps a [`fullpage::Navigator`] and wires the input
/// adapters, fullscreen toggle, and transition tween together.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `on_scroll` / `on_resize` / `on_key` when UI events occur
/// - `on_frame(now_ms)` from the animation-frame callback the scroll/resize adapters asked
///   them to schedule
/// - `tick(now_ms)` each frame while animating, applying the returned translation to the
///   real slide container
#[derive(Clone, Debug)]
pub struct Controller<K = SlideKey> {
    nav: Navigator<K>,
    scroll: ScrollAdapter,
    resize: ResizeAdapter,
    fullscreen: FullscreenToggle,
    transition: Option<Transition>,
    rendered_translate: i64,
    easing: Easing,
}

impl<K: NavKey> Controller<K> {
    pub fn new(options: NavigatorOptions<K>) -> Self {
        Self::from_navigator(Navigator::new(options))
    }

    pub fn from_navigator(nav: Navigator<K>) -> Self {
        let rendered_translate = nav.translate_y();
        Self {
            nav,
            scroll: ScrollAdapter::new(),
            resize: ResizeAdapter::new(),
            fullscreen: FullscreenToggle::new(),
            transition: None,
            rendered_translate,
            easing: Easing::default(),
        }
    }

    pub fn navigator(&self) -> &Navigator<K> {
        &self.nav
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator<K> {
        &mut self.nav
    }

    pub fn into_navigator(self) -> Navigator<K> {
        self.nav
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.transition = None;
    }

    /// Unmount path: drops the tween and all pending adapter frames so nothing mutates
    /// state after teardown.
    pub fn detach(&mut self) {
        self.cancel_animation();
        self.scroll.cancel();
        self.resize.cancel();
    }

    // --- input events ---

    /// Call when the UI reports a scroll offset change (wheel/drag).
    ///
    /// Returns `true` when the host must schedule a frame callback for
    /// [`on_frame`](Self::on_frame).
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) -> bool {
        self.scroll.on_scroll(&self.nav, offset, now_ms)
    }

    /// Call when the UI reports new `(fullpage_height, viewport_height)` measurements.
    ///
    /// Returns `true` when the host must schedule a frame callback for
    /// [`on_frame`](Self::on_frame).
    pub fn on_resize(&mut self, fullpage_height: u32, viewport_height: u32) -> bool {
        self.resize.on_resize(&self.nav, fullpage_height, viewport_height)
    }

    /// Call on a pressed key. Returns `true` when the key was handled (stop propagation).
    pub fn on_key(&mut self, key: KeyCode, now_ms: u64) -> bool {
        let handled = keyboard::dispatch_key(&mut self.nav, key, now_ms);
        self.sync_transition(now_ms);
        handled
    }

    /// The deferred recomputation both gated adapters asked the host to schedule.
    pub fn on_frame(&mut self, now_ms: u64) {
        self.scroll.on_frame(&mut self.nav, now_ms);
        self.resize.on_frame(&mut self.nav);
        self.sync_transition(now_ms);
    }

    // --- programmatic navigation ---

    pub fn goto(&mut self, index: usize, now_ms: u64) -> bool {
        let moved = self.nav.goto(index, now_ms);
        self.sync_transition(now_ms);
        moved
    }

    pub fn next(&mut self, now_ms: u64) -> bool {
        let moved = self.nav.next(now_ms);
        self.sync_transition(now_ms);
        moved
    }

    pub fn previous(&mut self, now_ms: u64) -> bool {
        let moved = self.nav.previous(now_ms);
        self.sync_transition(now_ms);
        moved
    }

    pub fn first(&mut self, now_ms: u64) -> bool {
        let moved = self.nav.first(now_ms);
        self.sync_transition(now_ms);
        moved
    }

    pub fn last(&mut self, now_ms: u64) -> bool {
        let moved = self.nav.last(now_ms);
        self.sync_transition(now_ms);
        moved
    }

    // --- fullscreen ---

    /// Toggles fullscreen through the host driver. A rejection has already been logged by
    /// the toggle; the tracked state is returned unchanged in that case.
    pub fn toggle_fullscreen(&mut self, driver: &mut dyn FullscreenDriver) -> bool {
        match self.fullscreen.toggle(driver) {
            Ok(active) => active,
            Err(_) => self.fullscreen.is_fullscreen(),
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    // --- frame loop ---

    /// Advances the controller.
    ///
    /// - While a tween is active, returns the interpolated translation to render.
    /// - Otherwise expires the navigator's transition window and returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<i64> {
        self.sync_transition(now_ms);

        let Some(transition) = self.transition else {
            self.nav.update_transition(now_ms);
            return None;
        };

        self.rendered_translate = transition.sample(now_ms);
        self.nav.update_transition(now_ms);

        if transition.is_done(now_ms) {
            self.transition = None;
        }
        Some(self.rendered_translate)
    }

    /// Starts or retargets the tween whenever the navigator's target translation moved away
    /// from what is currently rendered.
    fn sync_transition(&mut self, now_ms: u64) {
        let target = self.nav.translate_y();
        let duration_ms = self.nav.options().transition_duration_ms;
        if let Some(t) = &mut self.transition {
            if t.to != target {
                t.retarget(now_ms, target, duration_ms);
            }
        } else if target != self.rendered_translate {
            self.transition = Some(Transition::new(
                self.rendered_translate,
                target,
                now_ms,
                duration_ms,
                self.easing,
            ));
        }
    }
}
