/// A lightweight, serializable snapshot of the full navigation state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
///
/// Snapshots are produced by [`crate::Navigator::state`] and are what `on_change` observers
/// typically read. `translate_y` always satisfies
/// `-min(fullpage_height - viewport_height, offset_top(active slide))`; only the navigator
/// mutates the underlying fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavState {
    /// Index of the active slide in the registry (0 when the registry is empty).
    pub slide_index: usize,
    /// Clamped vertical translation the rendering layer should apply.
    pub translate_y: i64,
    /// Measured height of the whole slide container.
    pub fullpage_height: u32,
    /// Measured height of the viewport.
    pub viewport_height: u32,
    /// Set when the last navigation asked the host to reset its raw scroll position.
    pub reset_scroll: bool,
    /// Whether a slide-change animation is currently in flight.
    pub is_transitioning: bool,
}
