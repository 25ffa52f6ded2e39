use alloc::sync::Arc;

use crate::navigator::Navigator;
use crate::SlideKey;

/// A callback fired when the navigator's state changes.
///
/// The second and third arguments are `(previous_index, next_index)`. For mutations that do
/// not move the active slide (geometry updates, option changes) both carry the current
/// index.
pub type OnChangeCallback<K> = Arc<dyn Fn(&Navigator<K>, usize, usize) + Send + Sync>;

/// Configuration for [`crate::Navigator`].
///
/// This type is designed to be cheap to clone: the callback is stored in an `Arc` so
/// adapters can update a few fields and call `Navigator::set_options` without reallocating
/// closures.
pub struct NavigatorOptions<K = SlideKey> {
    /// Enables/disables the navigator. When disabled, navigation and geometry updates are
    /// no-ops and the state reads as initial.
    pub enabled: bool,

    /// How long a slide-change animation is in flight. While it is, further `goto` calls
    /// are ignored.
    pub transition_duration_ms: u64,

    /// Extra floor on the scroll adapter's cool-down between accepted scroll gestures.
    ///
    /// The effective cool-down is `max(transition_duration_ms, scroll_cooldown_ms)`.
    pub scroll_cooldown_ms: u64,

    /// Enables the keyboard adapter. When `false`, no key is handled (and hosts should not
    /// stop propagation for any of them).
    pub keyboard_enabled: bool,

    /// Initial `(fullpage_height, viewport_height)` applied at construction, for hosts that
    /// can measure before mounting.
    pub initial_heights: Option<(u32, u32)>,

    /// Optional callback fired when the navigator's state changes.
    pub on_change: Option<OnChangeCallback<K>>,
}

impl<K> Clone for NavigatorOptions<K> {
    fn clone(&self) -> Self {
        Self {
            enabled: self.enabled,
            transition_duration_ms: self.transition_duration_ms,
            scroll_cooldown_ms: self.scroll_cooldown_ms,
            keyboard_enabled: self.keyboard_enabled,
            initial_heights: self.initial_heights,
            on_change: self.on_change.clone(),
        }
    }
}

impl<K> Default for NavigatorOptions<K> {
    fn default() -> Self {
        Self {
            enabled: true,
            transition_duration_ms: 500,
            scroll_cooldown_ms: 125,
            keyboard_enabled: true,
            initial_heights: None,
            on_change: None,
        }
    }
}

impl<K> NavigatorOptions<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_transition_duration_ms(mut self, transition_duration_ms: u64) -> Self {
        self.transition_duration_ms = transition_duration_ms;
        self
    }

    pub fn with_scroll_cooldown_ms(mut self, scroll_cooldown_ms: u64) -> Self {
        self.scroll_cooldown_ms = scroll_cooldown_ms;
        self
    }

    pub fn with_keyboard_enabled(mut self, keyboard_enabled: bool) -> Self {
        self.keyboard_enabled = keyboard_enabled;
        self
    }

    /// Sets the initial `(fullpage_height, viewport_height)` pair.
    pub fn with_initial_heights(mut self, initial_heights: Option<(u32, u32)>) -> Self {
        self.initial_heights = initial_heights;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Navigator<K>, usize, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> core::fmt::Debug for NavigatorOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavigatorOptions")
            .field("enabled", &self.enabled)
            .field("transition_duration_ms", &self.transition_duration_ms)
            .field("scroll_cooldown_ms", &self.scroll_cooldown_ms)
            .field("keyboard_enabled", &self.keyboard_enabled)
            .field("initial_heights", &self.initial_heights)
            .finish_non_exhaustive()
    }
}
