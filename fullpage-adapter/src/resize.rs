use fullpage::{NavKey, Navigator};

/// Translates window-resize measurements into navigator geometry updates.
///
/// Shares the scroll adapter's one-frame gate, and short-circuits entirely when both
/// measurements match what the navigator already holds, to avoid redundant re-renders.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResizeAdapter {
    pending: Option<(u32, u32)>,
    frame_requested: bool,
}

impl ResizeAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a resize measurement pair `(fullpage_height, viewport_height)`.
    ///
    /// Returns `true` when the host must schedule a frame callback that will invoke
    /// [`on_frame`](Self::on_frame).
    pub fn on_resize<K: NavKey>(
        &mut self,
        nav: &Navigator<K>,
        fullpage_height: u32,
        viewport_height: u32,
    ) -> bool {
        if !nav.enabled() {
            return false;
        }
        // shortcircuit
        if nav.fullpage_height() == fullpage_height && nav.viewport_height() == viewport_height {
            return false;
        }
        self.pending = Some((fullpage_height, viewport_height));
        if self.frame_requested {
            return false;
        }
        self.frame_requested = true;
        true
    }

    /// Applies the pending measurements in a single coalesced update.
    pub fn on_frame<K: NavKey>(&mut self, nav: &mut Navigator<K>) {
        self.frame_requested = false;
        let Some((fullpage_height, viewport_height)) = self.pending.take() else {
            return;
        };
        fptrace!(fullpage_height, viewport_height, "resize frame");
        nav.set_heights(fullpage_height, viewport_height);
    }

    /// Whether a frame callback is outstanding.
    pub fn is_frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Drops any pending work. Call on unmount so no update fires after teardown.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.frame_requested = false;
    }
}
