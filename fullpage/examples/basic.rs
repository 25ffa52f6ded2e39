// Example: minimal usage. Register slides, navigate, read the transform.
use fullpage::{Navigator, NavigatorOptions, Slide};

fn main() {
    let mut nav = Navigator::new(
        NavigatorOptions::new().with_initial_heights(Some((2400, 800))),
    );
    for i in 0..3u64 {
        nav.register_slide(i, Slide::new(i * 800, 800));
    }

    println!("slides={} state={:?}", nav.slide_count(), nav.state());

    let mut now_ms = 0u64;
    nav.next(now_ms);
    println!("after next: {:?}", nav.transform());

    now_ms += 600; // let the transition settle before the next move
    nav.last(now_ms);
    println!("after last: {:?}", nav.transform());

    now_ms += 600;
    nav.next(now_ms); // wraps back to slide 0
    println!("after wraparound: index={} {:?}", nav.current_index(), nav.transform());
}
