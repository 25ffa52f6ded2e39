use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Three 400-tall slides stacked in a 1200 container with an 800 viewport.
fn three_slides() -> Navigator<SlideKey> {
    let mut nav = Navigator::new(
        NavigatorOptions::new().with_initial_heights(Some((1200, 800))),
    );
    nav.register_slide(0, Slide::new(0, 400));
    nav.register_slide(1, Slide::new(500, 400));
    nav.register_slide(2, Slide::new(1200, 400));
    nav
}

#[test]
fn registry_keeps_slides_sorted_by_offset() {
    let mut reg = SlideRegistry::<u64>::new();
    reg.register(2, Slide::new(900, 100));
    reg.register(0, Slide::new(0, 100));
    reg.register(1, Slide::new(450, 100));

    let offsets: Vec<u64> = reg.iter().map(|e| e.offset_top).collect();
    assert_eq!(offsets, vec![0, 450, 900]);
    assert_eq!(reg.index_of(&2), Some(2));
    assert_eq!(reg.index_of(&7), None);
}

#[test]
fn register_is_idempotent_and_updates_geometry() {
    let mut reg = SlideRegistry::<u64>::new();
    reg.register(0, Slide::new(0, 100));
    reg.register(1, Slide::new(100, 100));
    assert_eq!(reg.len(), 2);

    // Re-registering moves the slide, not duplicates it.
    let at = reg.register(0, Slide::new(250, 120));
    assert_eq!(reg.len(), 2);
    assert_eq!(at, 1);
    assert_eq!(reg.get(1).map(|e| e.height), Some(120));
}

#[test]
fn unregister_returns_previous_index() {
    let mut reg = SlideRegistry::<u64>::new();
    reg.register(0, Slide::new(0, 100));
    reg.register(1, Slide::new(100, 100));
    assert_eq!(reg.unregister(&0), Some(0));
    assert_eq!(reg.unregister(&0), None);
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.index_of(&1), Some(0));
}

#[test]
fn goto_clamps_translate_to_content_end() {
    let mut nav = three_slides();

    // offset_top = 1200 but only 1200 - 800 = 400 of content can shift up.
    assert!(nav.goto(2, 0));
    assert_eq!(nav.translate_y(), -400);
    assert_eq!(nav.current_index(), 2);
}

#[test]
fn goto_out_of_range_or_current_is_a_noop() {
    let mut nav = three_slides();
    assert!(!nav.goto(3, 0));
    assert!(!nav.goto(0, 0)); // already active
    assert_eq!(nav.current_index(), 0);
    assert_eq!(nav.translate_y(), 0);
}

#[test]
fn goto_is_ignored_while_transitioning() {
    let mut nav = three_slides();
    assert!(nav.goto(1, 0));
    assert!(nav.is_transitioning());
    assert_eq!(nav.phase(), NavPhase::Transitioning);

    // Default duration is 500ms: re-entrant calls are dropped until it elapses.
    assert!(!nav.goto(2, 100));
    assert!(!nav.goto(2, 499));
    assert_eq!(nav.current_index(), 1);

    assert!(nav.goto(2, 500));
    assert_eq!(nav.current_index(), 2);
}

#[test]
fn update_transition_returns_to_idle() {
    let mut nav = three_slides();
    nav.goto(1, 0);
    nav.update_transition(499);
    assert!(nav.is_transitioning());
    nav.update_transition(500);
    assert!(!nav.is_transitioning());
    assert_eq!(nav.phase(), NavPhase::Idle);
}

#[test]
fn zero_duration_transitions_never_block() {
    let mut nav = Navigator::new(
        NavigatorOptions::new()
            .with_transition_duration_ms(0)
            .with_initial_heights(Some((1200, 800))),
    );
    nav.register_slide(0u64, Slide::new(0, 400));
    nav.register_slide(1, Slide::new(500, 400));
    nav.register_slide(2, Slide::new(1200, 400));

    assert!(nav.goto(1, 0));
    assert!(!nav.is_transitioning());
    assert!(nav.goto(2, 0));
    assert_eq!(nav.current_index(), 2);
}

#[test]
fn next_wraps_from_last_to_first() {
    let mut nav = three_slides();
    assert!(nav.goto(2, 0));
    assert!(nav.next(1000));
    assert_eq!(nav.current_index(), 0);
    assert_eq!(nav.translate_y(), 0);
}

#[test]
fn previous_wraps_from_first_to_last() {
    let mut nav = three_slides();
    assert!(nav.previous(0));
    assert_eq!(nav.current_index(), 2);

    // Equivalent to `last()` from any slide below the threshold.
    let mut other = three_slides();
    assert!(other.last(0));
    assert_eq!(other.current_index(), nav.current_index());
    assert_eq!(other.translate_y(), nav.translate_y());
}

#[test]
fn relative_navigation_noops_on_tiny_registries() {
    let mut empty = Navigator::new(NavigatorOptions::<SlideKey>::new());
    assert!(!empty.next(0));
    assert!(!empty.previous(0));
    assert!(!empty.first(0));
    assert!(!empty.last(0));

    let mut single = Navigator::new(NavigatorOptions::new());
    single.register_slide(0u64, Slide::new(0, 400));
    assert!(!single.next(0));
    assert!(!single.previous(0));
    assert!(!single.first(0));
    assert!(!single.last(0));
    assert_eq!(single.current_index(), 0);
}

#[test]
fn relative_navigation_sets_reset_scroll() {
    let mut nav = three_slides();
    assert!(nav.next(0));
    assert!(nav.reset_scroll());
    assert!(nav.acknowledge_scroll_reset());
    assert!(!nav.reset_scroll());
    assert!(!nav.acknowledge_scroll_reset());
}

#[test]
fn unregistering_active_slide_clamps_index() {
    let mut nav = three_slides();
    nav.goto(2, 0);
    assert!(nav.unregister_slide(&2));
    assert_eq!(nav.slide_count(), 2);
    assert_eq!(nav.current_index(), 1);
    // Translation re-derived for the new active slide: min(500, 1200-800) = 400.
    assert_eq!(nav.translate_y(), -400);
}

#[test]
fn unregistering_before_active_keeps_pointing_at_same_slide() {
    let mut nav = three_slides();
    nav.goto(1, 0);
    assert!(nav.unregister_slide(&0));
    assert_eq!(nav.current_index(), 0);
    assert_eq!(nav.current_slide().map(|e| e.key), Some(1));
}

#[test]
fn registering_before_active_keeps_pointing_at_same_slide() {
    let mut nav = Navigator::new(
        NavigatorOptions::new().with_initial_heights(Some((1200, 800))),
    );
    nav.register_slide(10u64, Slide::new(400, 400));
    nav.register_slide(11, Slide::new(800, 400));
    nav.goto(1, 0);

    // New slide sorts before the active one.
    nav.register_slide(12, Slide::new(0, 400));
    assert_eq!(nav.current_index(), 2);
    assert_eq!(nav.current_slide().map(|e| e.key), Some(11));
}

#[test]
fn unregistering_everything_resets_to_origin() {
    let mut nav = three_slides();
    nav.goto(2, 0);
    nav.unregister_slide(&0);
    nav.unregister_slide(&1);
    nav.unregister_slide(&2);
    assert_eq!(nav.slide_count(), 0);
    assert_eq!(nav.current_index(), 0);
    assert_eq!(nav.translate_y(), 0);
}

#[test]
fn viewport_taller_than_container_never_translates() {
    let mut nav = Navigator::new(
        NavigatorOptions::new().with_initial_heights(Some((600, 800))),
    );
    nav.register_slide(0u64, Slide::new(0, 300));
    nav.register_slide(1, Slide::new(300, 300));
    assert!(nav.goto(1, 0));
    assert_eq!(nav.translate_y(), 0);
}

#[test]
fn height_changes_reclamp_translate() {
    let mut nav = three_slides();
    nav.goto(1, 0);
    assert_eq!(nav.translate_y(), -400); // min(500, 400)

    // A taller container frees up room to honor the slide's real offset.
    nav.set_heights(1600, 800);
    assert_eq!(nav.translate_y(), -500);
}

#[test]
fn set_heights_short_circuits_when_unchanged() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let mut nav: Navigator<SlideKey> = Navigator::new(
        NavigatorOptions::new()
            .with_initial_heights(Some((1200, 800)))
            .with_on_change(Some(move |_: &Navigator<SlideKey>, _, _| {
                seen.fetch_add(1, Ordering::SeqCst);
            })),
    );

    nav.set_heights(1200, 800);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    nav.set_heights(1400, 800);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn on_change_reports_previous_and_next_index() {
    let seen = Arc::new(AtomicUsize::new(usize::MAX));
    let sink = Arc::clone(&seen);
    let mut nav: Navigator<SlideKey> = Navigator::new(
        NavigatorOptions::new()
            .with_initial_heights(Some((1200, 800)))
            .with_on_change(Some(move |_: &Navigator<SlideKey>, prev, next| {
                sink.store(prev * 10 + next, Ordering::SeqCst);
            })),
    );
    nav.register_slide(0u64, Slide::new(0, 400));
    nav.register_slide(1, Slide::new(500, 400));
    nav.register_slide(2, Slide::new(1200, 400));

    nav.goto(2, 0);
    assert_eq!(seen.load(Ordering::SeqCst), 2); // (0, 2)

    nav.goto(1, 1000);
    assert_eq!(seen.load(Ordering::SeqCst), 21); // (2, 1)
}

#[test]
fn batch_update_coalesces_notifications() {
    let calls = Arc::new(AtomicUsize::new(0));
    let last = Arc::new(AtomicUsize::new(usize::MAX));
    let calls_sink = Arc::clone(&calls);
    let last_sink = Arc::clone(&last);
    let mut nav: Navigator<SlideKey> = Navigator::new(
        NavigatorOptions::new()
            .with_initial_heights(Some((1200, 800)))
            .with_on_change(Some(move |_: &Navigator<SlideKey>, prev, next| {
                calls_sink.fetch_add(1, Ordering::SeqCst);
                last_sink.store(prev * 10 + next, Ordering::SeqCst);
            })),
    );
    nav.register_slide(0u64, Slide::new(0, 400));
    nav.register_slide(1, Slide::new(500, 400));
    nav.register_slide(2, Slide::new(1200, 400));
    let before = calls.load(Ordering::SeqCst);

    nav.batch_update(|n| {
        n.set_heights(1600, 900);
        n.goto(2, 0);
    });

    assert_eq!(calls.load(Ordering::SeqCst), before + 1);
    // Merged pair spans the whole batch: previous index from before, final index after.
    assert_eq!(last.load(Ordering::SeqCst), 2);
}

#[test]
fn disabled_navigator_ignores_everything() {
    let mut nav = Navigator::new(
        NavigatorOptions::new()
            .with_enabled(false)
            .with_initial_heights(Some((1200, 800))),
    );
    nav.register_slide(0u64, Slide::new(0, 400));
    nav.register_slide(1, Slide::new(500, 400));

    assert!(!nav.goto(1, 0));
    assert!(!nav.next(0));
    nav.set_heights(2000, 1000);
    assert_eq!(nav.fullpage_height(), 1200);
    assert_eq!(nav.current_index(), 0);

    nav.set_enabled(true);
    assert!(nav.goto(1, 0));
    assert_eq!(nav.current_index(), 1);
}

#[test]
fn snapshot_and_restore_roundtrip() {
    let mut nav = three_slides();
    nav.goto(2, 0);
    nav.update_transition(1000);
    let state = nav.state();
    assert_eq!(state.slide_index, 2);
    assert_eq!(state.translate_y, -400);
    assert!(!state.is_transitioning);

    let mut fresh = three_slides();
    fresh.restore_state(state, 5000);
    assert_eq!(fresh.current_index(), 2);
    assert_eq!(fresh.translate_y(), -400);
    assert!(!fresh.is_transitioning());
}

#[test]
fn restore_clamps_stale_slide_index() {
    let mut nav = three_slides();
    nav.goto(2, 0);
    let state = nav.state();

    let mut shorter = Navigator::new(
        NavigatorOptions::new().with_initial_heights(Some((1200, 800))),
    );
    shorter.register_slide(0u64, Slide::new(0, 400));
    shorter.register_slide(1, Slide::new(500, 400));
    shorter.restore_state(state, 0);
    assert_eq!(shorter.current_index(), 1);
    assert_eq!(shorter.translate_y(), -400);
}

#[test]
fn restore_resumes_transition_window() {
    let mut nav = three_slides();
    nav.goto(1, 0);
    let state = nav.state();
    assert!(state.is_transitioning);

    let mut fresh = three_slides();
    fresh.restore_state(state, 10_000);
    assert!(fresh.is_transitioning());
    // The window restarts at the restore timestamp.
    assert!(!fresh.goto(2, 10_100));
    assert!(fresh.goto(2, 10_500));
}

#[test]
fn transform_pairs_translate_with_duration() {
    let mut nav = three_slides();
    nav.goto(1, 0);
    let t = nav.transform();
    assert_eq!(t.translate_y, -400);
    assert_eq!(t.duration_ms, 500);
}

#[test]
fn randomized_registry_churn_keeps_invariants() {
    let mut rng = Lcg::new(0x5eed);
    let mut nav: Navigator<SlideKey> = Navigator::new(
        NavigatorOptions::new()
            .with_transition_duration_ms(0)
            .with_initial_heights(Some((10_000, 800))),
    );

    let mut now_ms = 0u64;
    for step in 0..500u64 {
        now_ms += rng.gen_range_u64(1, 50);
        let key = rng.gen_range_u64(0, 16);
        if rng.gen_bool() {
            let offset = rng.gen_range_u64(0, 9_000);
            nav.register_slide(key, Slide::new(offset, 400));
        } else {
            nav.unregister_slide(&key);
        }
        if step % 3 == 0 && nav.slide_count() > 1 {
            if rng.gen_bool() {
                nav.next(now_ms);
            } else {
                nav.previous(now_ms);
            }
        }

        // Invariants: index valid (or registry empty), registry sorted, translate clamped.
        if nav.slide_count() == 0 {
            assert_eq!(nav.current_index(), 0);
            assert_eq!(nav.translate_y(), 0);
        } else {
            assert!(nav.current_index() < nav.slide_count());
            let offsets: Vec<u64> = nav.registry().iter().map(|e| e.offset_top).collect();
            assert!(offsets.windows(2).all(|w| w[0] <= w[1]));

            let entry = nav.current_slide().unwrap();
            let max_shift =
                (nav.fullpage_height() as u64).saturating_sub(nav.viewport_height() as u64);
            let expected = -(entry.offset_top.min(max_shift) as i64);
            assert_eq!(nav.translate_y(), expected);
        }
    }
}
