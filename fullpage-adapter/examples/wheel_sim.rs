use fullpage::{NavigatorOptions, Slide};
use fullpage_adapter::Controller;

fn main() {
    // Example: a wheel gesture driving the controller without any UI objects.
    //
    // A host would:
    // - forward scroll events and schedule one frame callback when asked
    // - call on_frame from that callback, then tick in its frame loop
    // - apply the returned translation to the slide container
    let mut c = Controller::new(
        NavigatorOptions::new().with_initial_heights(Some((2400, 800))),
    );
    for i in 0..3u64 {
        c.navigator_mut().register_slide(i, Slide::new(i * 800, 800));
    }

    let mut now_ms = 0u64;
    for offset in [60u64, 120, 180] {
        let schedule = c.on_scroll(offset, now_ms);
        println!("t={now_ms} scroll offset={offset} schedule_frame={schedule}");
        now_ms += 20;
    }
    c.on_frame(now_ms);

    loop {
        now_ms += 16;
        match c.tick(now_ms) {
            Some(y) => {
                if now_ms % 80 < 16 {
                    println!("t={now_ms} translate_y={y}");
                }
            }
            None => break,
        }
    }

    println!(
        "settled: index={} transform={:?}",
        c.navigator().current_index(),
        c.navigator().transform()
    );
}
