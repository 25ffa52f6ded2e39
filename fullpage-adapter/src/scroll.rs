use core::cmp;

use fullpage::{NavKey, Navigator};

/// How a scroll sample relates to the previously recorded one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollMotion {
    /// The container is back at offset zero.
    Top,
    /// The viewport bottom reached the end of the content.
    Bottom,
    /// Offset increased.
    Forward,
    /// Offset decreased.
    Backward,
}

/// Translates raw scroll/wheel offsets into navigation calls.
///
/// Two throttles prevent re-entrant transitions:
/// - a single in-flight frame gate: [`on_scroll`](Self::on_scroll) returns `true` at most
///   once per outstanding [`on_frame`](Self::on_frame), so the host schedules at most one
///   deferred recomputation;
/// - a cool-down of `max(transition_duration_ms, scroll_cooldown_ms)`, armed per accepted
///   gesture, so a new gesture cannot trigger another navigation until the previous
///   animation settles.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollAdapter {
    prev_offset: u64,
    pending_offset: Option<u64>,
    frame_requested: bool,
    cooldown_until_ms: u64,
}

impl ScrollAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scroll event at `offset`.
    ///
    /// Returns `true` when the host must schedule a frame callback that will invoke
    /// [`on_frame`](Self::on_frame). Events inside the cool-down window are dropped.
    pub fn on_scroll<K: NavKey>(&mut self, nav: &Navigator<K>, offset: u64, now_ms: u64) -> bool {
        if !nav.enabled() {
            return false;
        }
        if now_ms < self.cooldown_until_ms {
            fptrace!(offset, "scroll dropped: cool-down");
            return false;
        }

        let opts = nav.options();
        let cooldown = cmp::max(opts.transition_duration_ms, opts.scroll_cooldown_ms);
        self.cooldown_until_ms = now_ms.saturating_add(cooldown);
        self.pending_offset = Some(offset);

        if self.frame_requested {
            // Gate: one deferred recomputation at a time; the newest offset still wins.
            return false;
        }
        self.frame_requested = true;
        true
    }

    /// The deferred recomputation: classifies the pending offset and dispatches at most one
    /// navigation. Clears a scroll reset served by the previous navigation.
    pub fn on_frame<K: NavKey>(&mut self, nav: &mut Navigator<K>, now_ms: u64) {
        self.frame_requested = false;
        let Some(offset) = self.pending_offset.take() else {
            return;
        };

        nav.update_transition(now_ms);
        nav.acknowledge_scroll_reset();

        let motion = self.classify(nav, offset);
        fptrace!(offset, prev = self.prev_offset, ?motion, "scroll frame");
        match motion {
            Some(ScrollMotion::Top) => {
                nav.first(now_ms);
            }
            Some(ScrollMotion::Bottom) => {
                nav.last(now_ms);
            }
            Some(ScrollMotion::Forward) => {
                nav.next(now_ms);
            }
            Some(ScrollMotion::Backward) => {
                nav.previous(now_ms);
            }
            None => {}
        }
        self.prev_offset = offset;
    }

    /// Whether a frame callback is outstanding.
    pub fn is_frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Drops any pending work. Call on unmount so no navigation fires after teardown.
    pub fn cancel(&mut self) {
        self.pending_offset = None;
        self.frame_requested = false;
    }

    fn classify<K: NavKey>(&self, nav: &Navigator<K>, offset: u64) -> Option<ScrollMotion> {
        if offset == 0 {
            return Some(ScrollMotion::Top);
        }
        let reached_bottom = (nav.viewport_height() as u64).saturating_add(offset)
            >= nav.fullpage_height() as u64;
        if reached_bottom {
            return Some(ScrollMotion::Bottom);
        }
        match offset.cmp(&self.prev_offset) {
            cmp::Ordering::Greater => Some(ScrollMotion::Forward),
            cmp::Ordering::Less => Some(ScrollMotion::Backward),
            cmp::Ordering::Equal => None,
        }
    }
}
